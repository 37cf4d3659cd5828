use thiserror::Error;

pub type FormatResult<T> = Result<T, FormatError>;

/// Why a site file could not be read
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Site file must be a JSON object")]
    NotAnObject,

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl FormatError {
    pub fn invalid_json(err: impl std::fmt::Display) -> Self {
        Self::InvalidJson(err.to_string())
    }
}
