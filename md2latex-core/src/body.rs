// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::collections::HashMap;

use crate::Result;
use crate::construct::{Construct, Renderer};
use crate::error::unsupported;
use crate::footnote::FootnotePlaceholder;
use crate::latex::{
    emph, escape_latex_href_url, escape_latex_text, escape_latex_url, is_script_url, textbf, texttt,
};

/// Features used by one body and the footnotes it defined.
#[derive(Default, Debug)]
pub struct RenderState {
    pub uses_block_quote: bool,
    pub uses_ordered_list: bool,
    pub uses_hyperlink: bool,
    pub footnotes: HashMap<String, String>,
    /// Keys in the order their references were emitted.
    pub references: Vec<String>,
}

/// Footnote labels match case-insensitively in Markdown.
pub(crate) fn footnote_key(name: &str) -> String {
    name.to_lowercase()
}

pub struct BodyRenderer<'s> {
    state: &'s mut RenderState,
    placeholder: FootnotePlaceholder,
}

impl<'s> BodyRenderer<'s> {
    pub fn new(state: &'s mut RenderState, placeholder: FootnotePlaceholder) -> Self {
        Self { state, placeholder }
    }
}

fn block(text: &str) -> String {
    format!("\n\n{text}")
}

impl Renderer for BodyRenderer<'_> {
    fn render(&mut self, construct: Construct) -> Result<String> {
        let out = match construct {
            Construct::Heading { level, text } => {
                let command = match level {
                    1 => "section",
                    2 => "subsection",
                    3 => "subsubsection",
                    _ => return Err(unsupported(format!("Heading level {level}"))),
                };
                block(&format!("\\{command}{{{text}}}"))
            }
            Construct::Paragraph { text, in_list } => {
                if in_list {
                    text
                } else {
                    block(&text)
                }
            }
            Construct::ThematicBreak => block("\\noindent\\rule{\\textwidth}{0.4pt}"),
            Construct::List { ordered, items } => {
                let env = if ordered {
                    self.state.uses_ordered_list = true;
                    "enumerate"
                } else {
                    "itemize"
                };
                block(&format!(
                    "\\begin{{{env}}}\n{}\\end{{{env}}}",
                    items.concat()
                ))
            }
            Construct::ListItem { text } => format!("    \\item {}\n", text.trim()),
            Construct::CodeBlock {
                in_footnote: true, ..
            } => return Err(unsupported("Code block in footnote")),
            Construct::CodeBlock { code, .. } => {
                block(&format!("\\begin{{verbatim}}\n{}\n\\end{{verbatim}}", code.trim_end()))
            }
            Construct::BlockQuote { text, nested } => {
                if nested {
                    return Err(unsupported("Nested block quote"));
                }
                self.state.uses_block_quote = true;
                block(&format!(
                    "\\begin{{blockquote}}\n{}\n\\end{{blockquote}}",
                    text.trim()
                ))
            }
            Construct::FootnoteDefinition { key, text } => {
                self.state
                    .footnotes
                    .insert(footnote_key(&key), text.trim().to_string());
                String::new()
            }
            Construct::Text(text) => escape_latex_text(&text),
            Construct::Emphasis(text) => emph(&text),
            Construct::Strong(text) => textbf(&text),
            Construct::Code(literal) => texttt(&literal),
            Construct::LineBreak => "\\\\\n".to_string(),
            Construct::SoftBreak => "\n".to_string(),
            Construct::Autolink { link, is_email } => {
                if is_script_url(&link) {
                    tracing::warn!(%link, "dropping autolink with a script URL");
                    return Ok(String::new());
                }
                self.state.uses_hyperlink = true;
                if is_email {
                    let address = escape_latex_href_url(&link);
                    format!("\\href{{mailto:{address}}}{{{}}}", escape_latex_text(&link))
                } else {
                    format!("\\url{{{}}}", escape_latex_url(&link))
                }
            }
            Construct::Link { url, text, .. } => {
                if is_script_url(&url) {
                    tracing::warn!(%url, "dropping link with a script URL");
                    return Ok(String::new());
                }
                self.state.uses_hyperlink = true;
                format!("\\href{{{}}}{{{text}}}", escape_latex_href_url(&url))
            }
            Construct::FootnoteReference { key } => {
                let key = footnote_key(&key);
                let placeholder = self.placeholder.encode(&key);
                self.state.references.push(key);
                placeholder
            }
            unsupported_construct @ (Construct::HtmlBlock(_)
            | Construct::Table
            | Construct::TableRow
            | Construct::TableCell
            | Construct::Image { .. }
            | Construct::HtmlInline(_)
            | Construct::Strikethrough(_)) => return Err(unsupported(unsupported_construct.name())),
        };
        Ok(out)
    }
}
