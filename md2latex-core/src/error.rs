// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("the document has no meta section: expected a `---` line after the title and authors")]
    MissingMetaSection,

    #[error("invalid meta section: {0}")]
    InvalidMetaSection(String),

    #[error("{0} is not supported")]
    UnsupportedFeature(String),

    #[error("internal consistency error: {0}")]
    InternalConsistency(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid options: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn unsupported(feature: impl Into<String>) -> Error {
    let feature = feature.into();
    tracing::trace!(%feature, "rejecting unsupported construct");
    Error::UnsupportedFeature(feature)
}

pub(crate) fn invalid_meta(reason: impl Into<String>) -> Error {
    Error::InvalidMetaSection(reason.into())
}
