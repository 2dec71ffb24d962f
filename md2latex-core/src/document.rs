// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use crate::body::{BodyRenderer, RenderState};
use crate::construct::render_markdown;
use crate::footnote::FootnotePlaceholder;
use crate::meta::MetaRenderer;
use crate::{Error, Options, Result};

const BLOCKQUOTE_ENVIRONMENT: &str = r"\newenvironment{blockquote}{%
  \par%
  \medskip
  \leftskip=4em\rightskip=2em%
  \noindent\ignorespaces}{%
  \par\medskip}
";

pub fn convert(document: &str, options: &Options) -> Result<String> {
    let (meta, body) = split_document(document)?;

    let mut meta_renderer = MetaRenderer::new();
    let title = render_markdown(meta, &mut meta_renderer)?;
    let title = meta_renderer.finish(&title)?;

    let mut state = RenderState::default();
    let placeholder = FootnotePlaceholder::for_text(body)?;
    let rendered = render_markdown(body, &mut BodyRenderer::new(&mut state, placeholder))?;
    let body = placeholder.resolve(&rendered, &state.footnotes)?;

    tracing::debug!(
        block_quote = state.uses_block_quote,
        ordered_list = state.uses_ordered_list,
        hyperlink = state.uses_hyperlink,
        footnotes = state.footnotes.len(),
        "rendered document body"
    );

    Ok(format!(
        "\\documentclass{{article}}\n\n{packages}\n{commands}\n{title}\n\n\\begin{{document}}\n\n\\maketitle\n\n{body}\n\n\\end{{document}}\n",
        packages = resolve_packages(&state, options),
        commands = resolve_commands(&state),
        body = body.trim(),
    ))
}

/// Splits at the first line that consists of `---`.
pub fn split_document(document: &str) -> Result<(&str, &str)> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        if line.trim() == "---" {
            return Ok((&document[..offset], &document[offset + line.len()..]));
        }
        offset += line.len();
    }
    Err(Error::MissingMetaSection)
}

fn resolve_packages(state: &RenderState, options: &Options) -> String {
    let mut packages = vec![
        "\\usepackage[bottom=1in,top=1in]{geometry}".to_string(),
        "\\usepackage{parskip}".to_string(),
    ];
    if state.uses_ordered_list {
        packages.push("\\usepackage{enumerate}".to_string());
    }
    if state.uses_hyperlink {
        packages.push(format!(
            "\\usepackage[pdftex,colorlinks,urlcolor={}]{{hyperref}}",
            options.link_color.as_str()
        ));
    }
    packages.push(format!("\n\\geometry{{{}}}", options.paper.as_str()));
    packages.join("\n")
}

fn resolve_commands(state: &RenderState) -> String {
    if state.uses_block_quote {
        format!("\n{BLOCKQUOTE_ENVIRONMENT}")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_separator_line() {
        let (meta, body) = split_document("# T\n---\nbody\n\n---\nmore\n").unwrap();
        assert_eq!(meta, "# T\n");
        assert_eq!(body, "body\n\n---\nmore\n");
    }

    #[test]
    fn separator_may_be_surrounded_by_spaces() {
        let (meta, body) = split_document("# T\n  ---  \nbody").unwrap();
        assert_eq!(meta, "# T\n");
        assert_eq!(body, "body");
    }

    #[test]
    fn dashes_inside_a_line_do_not_split() {
        let err = split_document("# T --- not a separator\n----\n").unwrap_err();
        assert!(matches!(err, Error::MissingMetaSection));
    }

    #[test]
    fn packages_follow_flags_and_options() {
        let state = RenderState {
            uses_ordered_list: true,
            uses_hyperlink: true,
            ..Default::default()
        };
        let options = Options {
            paper: crate::PaperSize::A4paper,
            link_color: crate::LinkColor::Red,
        };
        assert_eq!(
            resolve_packages(&state, &options),
            "\\usepackage[bottom=1in,top=1in]{geometry}\n\\usepackage{parskip}\n\\usepackage{enumerate}\n\\usepackage[pdftex,colorlinks,urlcolor=red]{hyperref}\n\n\\geometry{a4paper}"
        );
    }

    #[test]
    fn blockquote_environment_only_when_used() {
        assert_eq!(resolve_commands(&RenderState::default()), "");
        let state = RenderState {
            uses_block_quote: true,
            ..Default::default()
        };
        assert!(resolve_commands(&state).starts_with("\n\\newenvironment{blockquote}"));
    }
}
