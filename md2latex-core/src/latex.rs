// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub(crate) fn escape_latex_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn escape_latex_href_url(url: &str) -> String {
    // TeX scans macro arguments before hyperref can sanitize them.
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '_' => out.push_str("\\_"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            _ => push_url_delimiter_safe(&mut out, ch),
        }
    }
    out
}

/// Escapes the argument of `\url{}`, which takes `_` and `&` literally.
pub(crate) fn escape_latex_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            _ => push_url_delimiter_safe(&mut out, ch),
        }
    }
    out
}

/// Percent-encodes characters that would unbalance the macro argument.
fn push_url_delimiter_safe(out: &mut String, ch: char) {
    match ch {
        '{' => out.push_str("\\%7B"),
        '}' => out.push_str("\\%7D"),
        '\\' => out.push_str("\\%5C"),
        _ => out.push(ch),
    }
}

/// Whether a link target would run script when clicked in a PDF viewer.
pub(crate) fn is_script_url(url: &str) -> bool {
    url.to_ascii_lowercase().contains("javascript:")
}

pub(crate) fn emph(inner: &str) -> String {
    format!("\\emph{{{inner}}}")
}

pub(crate) fn textbf(inner: &str) -> String {
    format!("\\textbf{{{inner}}}")
}

pub(crate) fn texttt(literal: &str) -> String {
    format!("\\texttt{{{}}}", escape_latex_text(literal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_characters() {
        assert_eq!(
            escape_latex_text("50% of $x_1 & {y} #2 ~ ^ \\"),
            "50\\% of \\$x\\_1 \\& \\{y\\} \\#2 \\textasciitilde{} \\textasciicircum{} \\textbackslash{}"
        );
    }

    #[test]
    fn href_url_escapes_only_argument_breakers() {
        assert_eq!(
            escape_latex_href_url("https://example.com/a_b?x=1&y=2#top"),
            "https://example.com/a\\_b?x=1\\&y=2\\#top"
        );
        assert_eq!(escape_latex_href_url("https://example.com/~me"), "https://example.com/~me");
    }

    #[test]
    fn url_argument_keeps_braces_balanced() {
        assert_eq!(
            escape_latex_url("https://x.com/a_b&c#d%e{f}\\g"),
            "https://x.com/a_b&c\\#d\\%e\\%7Bf\\%7D\\%5Cg"
        );
        assert_eq!(
            escape_latex_href_url("https://x.com/{a}"),
            "https://x.com/\\%7Ba\\%7D"
        );
    }

    #[test]
    fn script_urls_are_detected_case_insensitively() {
        assert!(is_script_url("javascript:alert(1)"));
        assert!(is_script_url("JavaScript:void(0)"));
        assert!(!is_script_url("https://example.com/javascript"));
    }

    #[test]
    fn inline_code_is_escaped() {
        assert_eq!(texttt("a_b{}"), "\\texttt{a\\_b\\{\\}}");
    }
}
