use crate::{
    error::{Error, NumericTarget},
    traits::{ColumnValue, JSON_NULL, JsonValue},
    value::Value,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};
use tracing::trace;

///
/// NullArray
///
/// Nullable ordered sequence of untyped values, stored as a JSON array column.
///
/// When the array is invalid its elements are treated as absent: they are
/// ignored by serialization and by equality.
///

#[derive(Clone, Debug, Default)]
pub struct NullArray {
    valid: bool,
    elements: Vec<Value>,
}

impl NullArray {
    /// Build a valid array by copying every element of `source`.
    /// Unsigned integers that fit in `i64` are stored as `Int`.
    pub fn new<I, T>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            valid: true,
            elements: source
                .into_iter()
                .map(|item| item.into().into_canonical())
                .collect(),
        }
    }

    /// Build a valid array from an untyped value.
    ///
    /// Lists contribute their items and blobs contribute one integer per
    /// byte. Every other kind is rejected with `Error::NotASequence`.
    pub fn try_from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::List(items) => Ok(Self::new(items)),
            Value::Blob(bytes) => Ok(Self::new(bytes)),
            other => Err(Error::NotASequence {
                found: other.kind(),
            }),
        }
    }

    /// The absent array.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            valid: false,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Stored elements, regardless of validity.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    #[must_use]
    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }

    /// Elements when valid, `None` otherwise.
    #[must_use]
    pub fn as_option(&self) -> Option<&[Value]> {
        self.valid.then_some(self.elements.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render every element with its default text form, positionally.
    #[must_use]
    pub fn to_string_vec(&self) -> Vec<String> {
        self.elements.iter().map(ToString::to_string).collect()
    }

    /// Convert to `i64`s. `Int` elements are taken as is; everything else is
    /// rendered to text and parsed as base-10.
    pub fn to_i64_vec(&self) -> Result<Vec<i64>, Error> {
        self.convert(NumericTarget::Int64, |value| match value {
            Value::Int(v) => Some(*v),
            _ => None,
        })
    }

    /// Convert to `f64`s. `Float64` elements are taken as is; everything else
    /// is rendered to text and parsed.
    pub fn to_f64_vec(&self) -> Result<Vec<f64>, Error> {
        self.convert(NumericTarget::Float64, |value| match value {
            Value::Float64(v) => Some(*v),
            _ => None,
        })
    }

    // The first unparsable element aborts the conversion.
    fn convert<T>(
        &self,
        target: NumericTarget,
        direct: impl Fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>, Error>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if let Some(v) = direct(value) {
                    return Ok(v);
                }

                let text = value.to_string();
                text.parse::<T>().map_err(|err| Error::Parse {
                    index,
                    message: err.to_string(),
                    text,
                    target,
                })
            })
            .collect()
    }
}

impl ColumnValue for NullArray {
    fn scan(&mut self, value: &Value) -> Result<(), Error> {
        self.valid = false;
        self.elements.clear();

        match value {
            Value::Null => Ok(()),
            Value::Blob(bytes) if bytes.is_empty() => Ok(()),
            Value::Blob(bytes) => {
                trace!(len = bytes.len(), "scanning array column");
                self.decode_json(bytes)
            }
            other => Err(Error::InvalidInput {
                found: other.kind(),
            }),
        }
    }

    fn to_storage(&self) -> Result<Value, Error> {
        if !self.valid {
            return Ok(Value::Null);
        }

        let data = self.encode_json()?;
        trace!(len = data.len(), "producing array column");

        Ok(Value::Blob(data))
    }
}

impl JsonValue for NullArray {
    fn encode_json(&self) -> Result<Vec<u8>, Error> {
        if !self.valid {
            return Ok(JSON_NULL.to_vec());
        }

        Ok(serde_json::to_vec(&self.elements)?)
    }

    /// `null` is recognised with or without surrounding ASCII whitespace.
    fn decode_json(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.valid = false;
        self.elements.clear();

        if bytes.trim_ascii() == JSON_NULL {
            return Ok(());
        }

        self.elements = serde_json::from_slice(bytes)?;
        self.valid = true;

        Ok(())
    }
}

impl PartialEq for NullArray {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (true, true) => self.elements == other.elements,
            (false, false) => true,
            _ => false,
        }
    }
}

impl Serialize for NullArray {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.serialize_some(&self.elements)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de> Deserialize<'de> for NullArray {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let elements = Option::<Vec<Value>>::deserialize(deserializer)?;

        Ok(elements.map_or_else(Self::null, Self::new))
    }
}

impl<T: Into<Value>> FromIterator<T> for NullArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Value>> for NullArray {
    fn from(elements: Vec<Value>) -> Self {
        Self::new(elements)
    }
}

impl<T: Into<Value>> From<Option<Vec<T>>> for NullArray {
    fn from(source: Option<Vec<T>>) -> Self {
        source.map_or_else(Self::null, Self::new)
    }
}

impl TryFrom<Value> for NullArray {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}

///
/// TESTS
///
