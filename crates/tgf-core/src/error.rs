//! Pipeline error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via a `From` impl (see `tgf-output::OutputError`).  That keeps
//! error sites clean while every failure still names its origin.

use thiserror::Error;

/// The top-level error type for `tgf-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `tgf-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
