use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("cannot decode '{input}': {reason}")]
    Decoding { input: String, reason: String },
}

impl QueryError {
    pub(crate) fn decoding(input: &str, reason: impl Into<String>) -> Self {
        Self::Decoding {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
