//! Reference token decoding and array index parsing.
//!
//! Both halves are deliberately lazy: a pointer stores its tokens verbatim,
//! and a token is only decoded (object keys) or numerically parsed (array
//! indices) at the traversal step that uses it.

use alloc::borrow::Cow;
use alloc::string::String;

use crate::error::TraverseError;

/// Decodes the RFC 6901 escape sequences in a reference token.
///
/// `~1` is replaced before `~0`; in the other order `~01` would decode to
/// `/` instead of the correct `~1`.
pub(crate) fn decode(token: &str) -> Cow<'_, str> {
    if token.contains('~') {
        Cow::Owned(token.replace("~1", "/").replace("~0", "~"))
    } else {
        Cow::Borrowed(token)
    }
}

/// Parses a reference token as an array index.
///
/// The token must match the RFC 6901 grammar: `0`, or a digit sequence
/// without a leading zero. Everything else, `-` included, is rejected.
pub(crate) fn parse_index(token: &str) -> Result<usize, TraverseError> {
    let well_formed = match token.as_bytes() {
        [] | [b'0', _, ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };
    if !well_formed {
        return Err(TraverseError::InvalidIndex {
            token: String::from(token),
        });
    }
    token.parse().map_err(|_| TraverseError::InvalidIndex {
        token: String::from(token),
    })
}
