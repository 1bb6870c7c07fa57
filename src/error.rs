use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid rule table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no rules configured for field: {0}")]
    UnknownField(String),

    #[error("other: {0}")]
    Other(String),
}

impl Error {
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    #[inline]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField(field.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
