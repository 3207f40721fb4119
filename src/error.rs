//! `error` contains the [`Error`] type for this crate and a shorthand [`Result`] type.

pub type Result<T> = std::result::Result<T, Error>;

/// Only the decoding entry points return these, the item stack helpers themselves never fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("JSON value is not a valid text component: {0}")]
    InvalidText(String),
    #[error("Nbt value at '{0}' was the wrong nbt data type")]
    InvalidNbtType(&'static str),
    #[error("No Nbt value named '{0}'")]
    MissingNbtTag(&'static str),
    #[error("Invalid identifier '{0}', expected [namespace:]path")]
    InvalidIdentifier(String),
}
