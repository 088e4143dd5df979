
use crate::{
    error::Error,
    traits::{ColumnValue, JSON_NULL, JsonValue},
    value::Value,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use tracing::{debug, trace};

///
/// NullString
///
/// Nullable text column with JSON support.
/// When invalid, the stored text is meaningless and must be ignored.
///

#[derive(Clone, Debug, Default)]
pub struct NullString {
    valid: bool,
    text: String,
}

impl NullString {
    /// Best-effort constructor: unsupported input yields an invalid string.
    pub fn new(source: impl Into<Value>) -> Self {
        match Self::try_new(source) {
            Ok(ns) => ns,
            Err(err) => {
                debug!(%err, "discarding string conversion error");
                Self::null()
            }
        }
    }

    /// Best-effort constructor that trims surrounding whitespace and
    /// invalidates the result if nothing is left.
    pub fn new_trimmed(source: impl Into<Value>) -> Self {
        let mut ns = Self::new(source);

        if ns.valid {
            ns.text = ns.text.trim().to_string();
            ns.valid = !ns.text.is_empty();
        }

        ns
    }

    pub fn try_new(source: impl Into<Value>) -> Result<Self, Error> {
        let mut ns = Self::null();
        ns.try_set(source)?;

        Ok(ns)
    }

    #[must_use]
    pub const fn null() -> Self {
        Self {
            valid: false,
            text: String::new(),
        }
    }

    /// Best-effort in-place update; errors are discarded.
    pub fn set(&mut self, source: impl Into<Value>) {
        if let Err(err) = self.try_set(source) {
            debug!(%err, "discarding string conversion error");
        }
    }

    /// Update the value in place.
    ///
    /// Accepts null, text and raw bytes. Bytes are decoded as UTF-8 with
    /// invalid sequences replaced. Anything else invalidates the string and
    /// fails with `Error::TypeMismatch`; callers must convert such values to
    /// text explicitly.
    pub fn try_set(&mut self, source: impl Into<Value>) -> Result<(), Error> {
        match source.into() {
            Value::Null => {
                self.clear();
                Ok(())
            }
            Value::Text(text) => {
                self.adopt(text);
                Ok(())
            }
            Value::Blob(bytes) => {
                self.adopt(text_from_bytes(&bytes));
                Ok(())
            }
            other => {
                self.clear();
                Err(Error::TypeMismatch {
                    value: other.to_string(),
                })
            }
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Text when valid, `None` otherwise.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.valid.then_some(self.text.as_str())
    }

    /// Raw stored text, regardless of validity.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_option(self) -> Option<String> {
        self.valid.then_some(self.text)
    }

    /// True when invalid, or when the text has no surrounding whitespace.
    #[must_use]
    pub fn is_trimmed(&self) -> bool {
        !self.valid || self.text == self.text.trim()
    }

    /// **Inverted name.** Returns `true` when the string is valid AND has
    /// non-whitespace content, i.e. when it is *not* empty.
    ///
    /// Existing callers depend on this behaviour, so it is kept as is. Use
    /// `!ns.is_empty()` to ask "is this null or blank".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid && !self.text.trim().is_empty()
    }

    /// `Value::Null` when invalid, the text otherwise.
    #[must_use]
    pub fn to_value(&self) -> Value {
        if self.valid {
            Value::Text(self.text.clone())
        } else {
            Value::Null
        }
    }

    fn adopt(&mut self, text: String) {
        self.text = text;
        self.valid = true;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.valid = false;
    }
}

// Invalid UTF-8 sequences are replaced with U+FFFD.
fn text_from_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl ColumnValue for NullString {
    fn scan(&mut self, value: &Value) -> Result<(), Error> {
        trace!(kind = %value.kind(), "scanning string column");

        match value {
            Value::Null => self.clear(),
            Value::Text(text) => self.adopt(text.clone()),
            Value::Blob(bytes) => self.adopt(text_from_bytes(bytes)),
            Value::Bool(_) | Value::Int(_) | Value::Uint(_) | Value::Float64(_) => {
                self.adopt(value.to_string());
            }
            Value::List(_) | Value::Map(_) => {
                self.clear();
                return Err(Error::InvalidInput {
                    found: value.kind(),
                });
            }
        }

        Ok(())
    }

    fn to_storage(&self) -> Result<Value, Error> {
        Ok(self.to_value())
    }
}

impl JsonValue for NullString {
    fn encode_json(&self) -> Result<Vec<u8>, Error> {
        if !self.valid {
            return Ok(JSON_NULL.to_vec());
        }

        Ok(serde_json::to_vec(&self.text)?)
    }

    /// Never fails: input that is not a JSON string is adopted verbatim.
    /// `null` is recognised with or without surrounding ASCII whitespace.
    fn decode_json(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.clear();

        if bytes.trim_ascii() == JSON_NULL {
            return Ok(());
        }

        let text = match serde_json::from_slice::<String>(bytes) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, "string json decode failed, using raw bytes");
                text_from_bytes(bytes)
            }
        };
        self.adopt(text);

        Ok(())
    }
}

impl PartialEq for NullString {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (true, true) => self.text == other.text,
            (false, false) => true,
            _ => false,
        }
    }
}

impl Eq for NullString {}

impl fmt::Display for NullString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            f.write_str(&self.text)
        } else {
            Ok(())
        }
    }
}

impl Serialize for NullString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.serialize_some(&self.text)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for NullString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Non-string JSON is kept as its compact JSON text.
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::null()),
            Value::Text(text) => Ok(Self::from(text)),
            Value::Blob(bytes) => Ok(Self::from(text_from_bytes(&bytes))),
            other => serde_json::to_string(&other)
                .map(Self::from)
                .map_err(de::Error::custom),
        }
    }
}

impl From<&str> for NullString {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl From<String> for NullString {
    fn from(text: String) -> Self {
        Self { valid: true, text }
    }
}

impl From<Option<String>> for NullString {
    fn from(text: Option<String>) -> Self {
        text.map_or_else(Self::null, Self::from)
    }
}

impl From<Option<&str>> for NullString {
    fn from(text: Option<&str>) -> Self {
        text.map_or_else(Self::null, Self::from)
    }
}

impl From<NullString> for Option<String> {
    fn from(ns: NullString) -> Self {
        ns.into_option()
    }
}
