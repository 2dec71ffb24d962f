// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use crate::Result;
use crate::construct::{Construct, Renderer};
use crate::error::invalid_meta;
use crate::latex::{emph, escape_latex_text, textbf, texttt};

/// Renders the meta section: a `# Title` heading and an `author:` list.
#[derive(Default, Debug)]
pub struct MetaRenderer {
    has_title: bool,
    has_authors: bool,
}

impl MetaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the rendered meta section and fills in an empty author block
    /// when the document names no authors.
    pub fn finish(&self, rendered: &str) -> Result<String> {
        if !self.has_title {
            return Err(invalid_meta("missing the `# Title` heading"));
        }

        let mut out = rendered.trim().to_string();
        if !self.has_authors {
            out.push_str("\n\n\\author{}");
        }
        Ok(out)
    }
}

impl Renderer for MetaRenderer {
    fn render(&mut self, construct: Construct) -> Result<String> {
        match construct {
            Construct::Heading { level: 1, text } => {
                if self.has_title {
                    return Err(invalid_meta("more than one title heading"));
                }
                self.has_title = true;
                Ok(format!("\\title{{{text}}}"))
            }
            Construct::Heading { level, .. } => Err(invalid_meta(format!(
                "the title must be a level 1 heading, found level {level}"
            ))),
            Construct::List { items, .. } => {
                if self.has_authors {
                    return Err(invalid_meta("more than one meta list"));
                }
                self.has_authors = true;
                let authors = items
                    .iter()
                    .map(String::as_str)
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
                    .join(" \\and ");
                Ok(format!("\n\n\\author{{{authors}}}"))
            }
            Construct::ListItem { text } => Ok(author_names(&text)),
            Construct::Paragraph {
                text,
                in_list: true,
            } => Ok(text),
            Construct::Text(text) => Ok(escape_latex_text(&text)),
            Construct::Emphasis(text) => Ok(emph(&text)),
            Construct::Strong(text) => Ok(textbf(&text)),
            Construct::Code(literal) => Ok(texttt(&literal)),
            Construct::SoftBreak => Ok(" ".to_string()),
            // `\author{}` is not a hyperlink context.
            Construct::Autolink { link, .. } => Ok(format!("\\\\{}", texttt(&link))),
            other => Err(invalid_meta(format!(
                "{} is not allowed before the `---` line",
                other.name()
            ))),
        }
    }
}

/// `author: A, B` becomes `A \and B`; every other key contributes nothing.
fn author_names(item: &str) -> String {
    let Some((key, value)) = item.split_once(": ") else {
        return String::new();
    };
    if key.trim() != "author" {
        return String::new();
    }

    value
        .trim()
        .split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" \\and ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::construct::render_markdown;

    fn render_meta(markdown: &str) -> Result<String> {
        let mut renderer = MetaRenderer::new();
        let rendered = render_markdown(markdown, &mut renderer)?;
        renderer.finish(&rendered)
    }

    fn assert_invalid(markdown: &str) {
        let result = render_meta(markdown);
        assert!(
            matches!(result, Err(Error::InvalidMetaSection(_))),
            "expected invalid meta section, got {result:?}"
        );
    }

    #[test]
    fn title_and_authors() {
        assert_eq!(
            render_meta("# Report\n\n- author: Alice, Bob\n").unwrap(),
            "\\title{Report}\n\n\\author{Alice \\and Bob}"
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(
            render_meta("# R\n\n- date: today\n- author: Alice\n- tags: x, y\n").unwrap(),
            "\\title{R}\n\n\\author{Alice}"
        );
    }

    #[test]
    fn email_becomes_monospace() {
        assert_eq!(
            render_meta("# R\n\n- author: Alice <alice@example.com>, Bob\n").unwrap(),
            "\\title{R}\n\n\\author{Alice \\\\\\texttt{alice@example.com} \\and Bob}"
        );
    }

    #[test]
    fn title_is_escaped() {
        assert_eq!(
            render_meta("# 100% *Done*\n\n- author: A\n").unwrap(),
            "\\title{100\\% \\emph{Done}}\n\n\\author{A}"
        );
    }

    #[test]
    fn missing_authors_give_empty_block() {
        assert_eq!(render_meta("# Alone\n").unwrap(), "\\title{Alone}\n\n\\author{}");
    }

    #[test]
    fn grammar_violations_are_rejected() {
        assert_invalid("- author: Nobody\n");
        assert_invalid("# One\n\n# Two\n");
        assert_invalid("## Sub\n");
        assert_invalid("# T\n\nA stray paragraph.\n");
        assert_invalid("# T\n\n- author: A\n\n* author: B\n");
        assert_invalid("# T\n\n> quote\n");
    }
}
