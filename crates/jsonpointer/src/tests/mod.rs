mod mutate;

use crate::Value;

/// Builds a document from JSON text.
pub(crate) fn json(text: &str) -> Value {
    serde_json::from_str(text).expect("test document must parse")
}
