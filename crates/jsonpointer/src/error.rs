use alloc::string::String;

use thiserror::Error;

/// Error returned when pointer text fails to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Non-empty pointer text did not start with `/`.
    #[error("a JSON Pointer must be prefixed by a '/' character")]
    MissingPrefix,
}

/// Error raised while walking a document along a pointer.
///
/// Every failure is terminal for the traversal that raised it and leaves the
/// document unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    /// An array reference token is not a valid non-negative integer.
    #[error("invalid array index {token:?}")]
    InvalidIndex { token: String },

    /// An array reference token names an element past the end.
    #[error("index {index} out of bounds [0,{len})")]
    OutOfBounds { index: usize, len: usize },

    /// An object reference token names a key that is absent.
    #[error("object does not have the key {key:?}")]
    KeyNotFound { key: String },

    /// A reference token was applied to a scalar value.
    #[error("invalid reference {token:?} through a scalar value")]
    InvalidReference { token: String },

    /// A delete targeted an element of an array that is the document root,
    /// which has no surrounding container to splice the shortened array into.
    #[error("can not delete from an array at root level")]
    RootArrayDelete,
}
