// File: src/error.rs
// Purpose: Library error type
//
// Failed rules are not errors; they end up in the `Report`. The variants here
// are programming errors on the caller's side.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error sink has no writable field `{field}`")]
    UnknownSinkField { field: String },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
