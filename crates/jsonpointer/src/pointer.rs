//! JSON Pointer parsing and the public resolution surface.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{
    error::{ParseError, TraverseError},
    traverse,
    value::Value,
};

/// A parsed RFC 6901 JSON Pointer.
///
/// A pointer is an ordered sequence of *reference tokens*, stored verbatim in
/// their escaped form. Escape decoding (`~1` then `~0`) happens lazily during
/// traversal, and only for tokens used as object keys; array index tokens are
/// numerically parsed instead. Parse once, then resolve against as many
/// documents as needed: a `Pointer` is an immutable value and every
/// [`get`](Pointer::get)/[`set`](Pointer::set)/[`delete`](Pointer::delete)
/// call is an independent traversal.
///
/// # Examples
///
/// ```
/// use jsonpointer::{Pointer, Value};
///
/// let doc: Value = serde_json::from_str(r#"{"a/b": [10, 20]}"#).unwrap();
/// let ptr = Pointer::parse("/a~1b/1")?;
/// assert_eq!(ptr.get(&doc)?, &Value::Number(20.0));
/// assert_eq!(ptr.to_string(), "/a~1b/1");
/// # Ok::<(), Box<dyn core::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// The root pointer: zero tokens, addressing the whole document.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses pointer text.
    ///
    /// The empty string is the root pointer. Any other text must start with
    /// `/`; the remainder is split on `/` into raw tokens with no further
    /// validation. Malformed tokens (for example a non-numeric array index)
    /// surface later, at the traversal step that uses them.
    ///
    /// # Errors
    ///
    /// [`ParseError::MissingPrefix`] if non-empty `text` does not start with
    /// `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpointer::Pointer;
    ///
    /// assert!(Pointer::parse("").unwrap().is_root());
    /// assert_eq!(Pointer::parse("/foo/0").unwrap().tokens(), ["foo", "0"]);
    /// assert!(Pointer::parse("foo").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Ok(Self::default());
        }
        let Some(rest) = text.strip_prefix('/') else {
            return Err(ParseError::MissingPrefix);
        };
        Ok(Self {
            tokens: rest.split('/').map(String::from).collect(),
        })
    }

    /// Returns the raw reference tokens, still in escaped form.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns `true` for the root pointer.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolves the pointer against `document` and returns the addressed
    /// value. The root pointer returns the document itself.
    ///
    /// # Errors
    ///
    /// Any [`TraverseError`] raised while walking the tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpointer::{Pointer, Value};
    ///
    /// let doc: Value = serde_json::from_str(r#"{"foo": ["bar", "baz"]}"#).unwrap();
    /// assert_eq!(Pointer::parse("/foo/0")?.get(&doc)?, &Value::String("bar".into()));
    /// assert_eq!(Pointer::root().get(&doc)?, &doc);
    /// # Ok::<(), Box<dyn core::error::Error>>(())
    /// ```
    pub fn get<'a>(&self, document: &'a Value) -> Result<&'a Value, TraverseError> {
        traverse::resolve(&self.tokens, document)
    }

    /// Resolves the pointer against `document` and returns a mutable borrow
    /// of the addressed value.
    ///
    /// # Errors
    ///
    /// Any [`TraverseError`] raised while walking the tokens.
    pub fn get_mut<'a>(&self, document: &'a mut Value) -> Result<&'a mut Value, TraverseError> {
        traverse::resolve_mut(&self.tokens, document)
    }

    /// Writes `value` at the pointer's location and returns a mutable borrow
    /// of the written slot.
    ///
    /// An existing array element or object entry is replaced; a missing
    /// *terminal* object key is inserted. Non-terminal tokens must already
    /// resolve. The root pointer writes nothing and returns the document
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Any [`TraverseError`] raised while walking the tokens; the document is
    /// left unmodified on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpointer::{Pointer, Value};
    ///
    /// let mut doc: Value = serde_json::from_str("{}").unwrap();
    /// Pointer::parse("/x")?.set(&mut doc, Value::String("v".into()))?;
    /// assert_eq!(doc.to_string(), r#"{"x":"v"}"#);
    /// # Ok::<(), Box<dyn core::error::Error>>(())
    /// ```
    pub fn set<'a>(
        &self,
        document: &'a mut Value,
        value: Value,
    ) -> Result<&'a mut Value, TraverseError> {
        traverse::assign(&self.tokens, document, value)
    }

    /// Removes the value at the pointer's location and returns it.
    ///
    /// Removing an array element shifts later elements left. Elements of an
    /// array sitting at the document root cannot be removed (there is no
    /// container to splice the shortened array into); replace the whole
    /// document instead. The root pointer removes nothing and returns a copy
    /// of the document.
    ///
    /// # Errors
    ///
    /// Any [`TraverseError`] raised while walking the tokens; the document is
    /// left unmodified on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpointer::{Pointer, Value};
    ///
    /// let mut doc: Value = serde_json::from_str(r#"{"foo": ["bar", "baz"]}"#).unwrap();
    /// let removed = Pointer::parse("/foo/0")?.delete(&mut doc)?;
    /// assert_eq!(removed, Value::String("bar".into()));
    /// assert_eq!(doc.to_string(), r#"{"foo":["baz"]}"#);
    /// # Ok::<(), Box<dyn core::error::Error>>(())
    /// ```
    pub fn delete(&self, document: &mut Value) -> Result<Value, TraverseError> {
        traverse::remove(&self.tokens, document)
    }
}

impl FromStr for Pointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reconstructs the pointer text: `""` for the root pointer, otherwise `/`
/// followed by the `/`-joined raw tokens. Exact inverse of
/// [`Pointer::parse`].
impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{token}")?;
        }
        Ok(())
    }
}
