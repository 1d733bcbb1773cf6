//! An RFC 6901 [JSON Pointer] implementation.
//!
//! A JSON Pointer is a `/`-separated string that names one location inside a
//! JSON document. This crate parses pointer text into a [`Pointer`] and
//! resolves it against a [`Value`] tree to read ([`Pointer::get`]), write
//! ([`Pointer::set`]), or remove ([`Pointer::delete`]) the addressed value.
//!
//! ```
//! use jsonpointer::{Map, Pointer, Value};
//!
//! let mut doc = Value::Object(Map::from([(
//!     "foo".to_string(),
//!     Value::Array(vec![Value::String("bar".into()), Value::String("baz".into())]),
//! )]));
//!
//! let ptr = Pointer::parse("/foo/0")?;
//! assert_eq!(ptr.get(&doc)?, &Value::String("bar".into()));
//!
//! let removed = ptr.delete(&mut doc)?;
//! assert_eq!(removed, Value::String("bar".into()));
//! assert_eq!(doc.to_string(), r#"{"foo":["baz"]}"#);
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
//!
//! [JSON Pointer]: https://datatracker.ietf.org/doc/html/rfc6901

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod pointer;
mod token;
mod traverse;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, TraverseError};
pub use pointer::Pointer;
pub use value::{Array, Map, Value};
