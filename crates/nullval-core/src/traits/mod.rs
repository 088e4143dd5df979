use crate::{error::Error, value::Value};

///
/// ColumnValue
///
/// Storage value boundary: how a database access layer reads (`scan`) and
/// writes (`to_storage`) a single column value.
///
/// Implementors are not internally synchronized; a mutable instance must not
/// be shared across concurrent writers without external locking.
///

pub trait ColumnValue {
    /// Replace the current state with the column value read from storage.
    fn scan(&mut self, value: &Value) -> Result<(), Error>;

    /// Produce the column value to hand to storage.
    /// Invalid instances produce `Value::Null`.
    fn to_storage(&self) -> Result<Value, Error>;

    /// Scan into a fresh default instance.
    fn from_storage(value: &Value) -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        let mut out = Self::default();
        out.scan(value)?;

        Ok(out)
    }
}

///
/// JsonValue
///
/// JSON boundary over raw bytes. The literal `null` is the canonical absent
/// representation for every implementor.
///

pub trait JsonValue {
    fn encode_json(&self) -> Result<Vec<u8>, Error>;

    fn decode_json(&mut self, bytes: &[u8]) -> Result<(), Error>;

    fn from_json(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Default + Sized,
    {
        let mut out = Self::default();
        out.decode_json(bytes)?;

        Ok(out)
    }
}

/// JSON literal for an absent value.
pub const JSON_NULL: &[u8] = b"null";
