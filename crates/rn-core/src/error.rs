//! Shared error taxonomy.
//!
//! Each sub-crate defines its own error enum; all of them classify into
//! [`ErrorKind`] via a `kind()` method so callers can branch on the category
//! without matching every variant.

use thiserror::Error;

/// The category of a failed operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request addresses something unreachable in the current network.
    NotFound,
    /// A parameter, interval or index lies outside the valid range.
    OutOfRange,
    /// The request is structurally nonsensical.
    InvalidArgument,
    /// The operation would overwrite unrelated existing state.
    LogicConflict,
}

/// Returned by the `FromStr` impls of the small enums in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {what}: {got:?}")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub got: String,
}
