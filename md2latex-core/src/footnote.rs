// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::collections::HashMap;

use crate::{Error, Result};

/// Marks a footnote reference until its definition is known.
///
/// A placeholder is the footnote key between two copies of a private-use
/// character that does not occur in the text being rendered, so it can never
/// be confused with document content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FootnotePlaceholder {
    sentinel: char,
}

impl FootnotePlaceholder {
    pub fn for_text(text: &str) -> Result<Self> {
        let sentinel = (0xE000..=0xF8FF)
            .chain(0xF0000..=0xFFFFD)
            .filter_map(char::from_u32)
            .find(|ch| !text.contains(*ch))
            .ok_or_else(|| {
                Error::InternalConsistency(
                    "no private-use character is free to mark footnotes".to_string(),
                )
            })?;
        Ok(Self { sentinel })
    }

    pub fn encode(&self, key: &str) -> String {
        format!("{sentinel}{key}{sentinel}", sentinel = self.sentinel)
    }

    /// Replaces every placeholder in `text` with `\footnote{<body>}`.
    pub fn resolve(&self, text: &str, footnotes: &HashMap<String, String>) -> Result<String> {
        let mut active = Vec::new();
        self.resolve_nested(text, footnotes, &mut active)
    }

    fn resolve_nested<'f>(
        &self,
        text: &str,
        footnotes: &'f HashMap<String, String>,
        active: &mut Vec<&'f str>,
    ) -> Result<String> {
        if !text.matches(self.sentinel).count().is_multiple_of(2) {
            return Err(Error::InternalConsistency(
                "unterminated footnote placeholder".to_string(),
            ));
        }

        let mut out = String::with_capacity(text.len());
        for (index, part) in text.split(self.sentinel).enumerate() {
            if index.is_multiple_of(2) {
                out.push_str(part);
                continue;
            }

            let Some((key, body)) = footnotes.get_key_value(part) else {
                return Err(Error::InternalConsistency(format!(
                    "footnote `{part}` is referenced but never defined"
                )));
            };
            if active.contains(&key.as_str()) {
                return Err(Error::InternalConsistency(format!(
                    "footnote `{key}` is part of a reference cycle"
                )));
            }

            active.push(key.as_str());
            let body = self.resolve_nested(body, footnotes, active)?;
            active.pop();

            out.push_str("\\footnote{");
            out.push_str(&body);
            out.push('}');
        }
        Ok(out)
    }
}
