use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{operation} of an empty sequence has no seed value")]
    EmptyInput { operation: &'static str },

    #[error("cannot read property '{key}' of null")]
    NullReceiver { key: String },
}
