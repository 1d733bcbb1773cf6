//! The traversal engine.
//!
//! Walks a document along a pointer's reference tokens and applies a read,
//! write, or delete at the terminal location. Each reference token is
//! evaluated sequentially: object keys are escape-decoded, array indices are
//! numerically parsed, and a token applied to a scalar is an error.
//!
//! All checks precede the single terminal mutation, so a failed `assign` or
//! `remove` leaves the document exactly as it was.

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::{error::TraverseError, token, value::Value};

/// Resolves `tokens` against `document`, returning the addressed value.
pub(crate) fn resolve<'a>(
    tokens: &[String],
    document: &'a Value,
) -> Result<&'a Value, TraverseError> {
    let mut current = document;
    for token_text in tokens {
        current = step(current, token_text)?;
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve`].
pub(crate) fn resolve_mut<'a>(
    tokens: &[String],
    document: &'a mut Value,
) -> Result<&'a mut Value, TraverseError> {
    let mut current = document;
    for token_text in tokens {
        current = step_mut(current, token_text)?;
    }
    Ok(current)
}

/// Writes `value` at the location `tokens` addresses and returns a mutable
/// borrow of the written slot.
///
/// Writing through an object's terminal token inserts the key when absent;
/// every non-terminal token must already resolve. With zero tokens the
/// document itself is the target and is returned untouched: replacing the
/// root is the caller's binding to rebind, not a location inside the tree.
pub(crate) fn assign<'a>(
    tokens: &[String],
    document: &'a mut Value,
    value: Value,
) -> Result<&'a mut Value, TraverseError> {
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(document);
    };
    let parent = resolve_mut(parents, document)?;
    match parent {
        Value::Array(array) => {
            let index = token::parse_index(last)?;
            let len = array.len();
            let slot = array
                .get_mut(index)
                .ok_or(TraverseError::OutOfBounds { index, len })?;
            *slot = value;
            Ok(slot)
        }
        Value::Object(object) => {
            let key = token::decode(last).into_owned();
            let slot = object.entry(key).or_insert(Value::Null);
            *slot = value;
            Ok(slot)
        }
        _ => Err(TraverseError::InvalidReference {
            token: last.clone(),
        }),
    }
}

/// Removes the value `tokens` addresses and returns it.
///
/// Removing an array element shifts the tail left; the shortened array stays
/// bound in its parent container, whether that is an object entry or an
/// array slot. An element of a root-level array cannot be removed at all,
/// because no surrounding container exists to hold the shortened array. With
/// zero tokens nothing is detached and a copy of the whole document is
/// returned.
pub(crate) fn remove(tokens: &[String], document: &mut Value) -> Result<Value, TraverseError> {
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(document.clone());
    };
    if parents.is_empty() && document.is_array() {
        return Err(TraverseError::RootArrayDelete);
    }
    let parent = resolve_mut(parents, document)?;
    match parent {
        Value::Array(array) => {
            let index = token::parse_index(last)?;
            if index >= array.len() {
                return Err(TraverseError::OutOfBounds {
                    index,
                    len: array.len(),
                });
            }
            Ok(array.remove(index))
        }
        Value::Object(object) => {
            let key = token::decode(last);
            object
                .remove(key.as_ref())
                .ok_or_else(|| TraverseError::KeyNotFound {
                    key: key.into_owned(),
                })
        }
        _ => Err(TraverseError::InvalidReference {
            token: last.clone(),
        }),
    }
}

fn step<'a>(current: &'a Value, token_text: &str) -> Result<&'a Value, TraverseError> {
    match current {
        Value::Array(array) => {
            let index = token::parse_index(token_text)?;
            array.get(index).ok_or(TraverseError::OutOfBounds {
                index,
                len: array.len(),
            })
        }
        Value::Object(object) => {
            let key = token::decode(token_text);
            object
                .get(key.as_ref())
                .ok_or_else(|| TraverseError::KeyNotFound {
                    key: key.into_owned(),
                })
        }
        _ => Err(TraverseError::InvalidReference {
            token: token_text.to_owned(),
        }),
    }
}

fn step_mut<'a>(current: &'a mut Value, token_text: &str) -> Result<&'a mut Value, TraverseError> {
    match current {
        Value::Array(array) => {
            let index = token::parse_index(token_text)?;
            let len = array.len();
            array
                .get_mut(index)
                .ok_or(TraverseError::OutOfBounds { index, len })
        }
        Value::Object(object) => {
            let key = token::decode(token_text);
            match object.get_mut(key.as_ref()) {
                Some(value) => Ok(value),
                None => Err(TraverseError::KeyNotFound {
                    key: key.into_owned(),
                }),
            }
        }
        _ => Err(TraverseError::InvalidReference {
            token: token_text.to_owned(),
        }),
    }
}
