// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

pub mod body;
pub mod config;
pub mod construct;
pub mod document;
mod error;
pub mod footnote;
mod latex;
pub mod meta;

pub use config::{LinkColor, Options, PaperSize};
pub use error::{Error, Result};

/// Converts a whole document (meta section, `---`, body) into LaTeX.
pub fn convert(document: &str) -> Result<String> {
    convert_with_options(document, &Options::default())
}

pub fn convert_with_options(document: &str, options: &Options) -> Result<String> {
    document::convert(document, options)
}
