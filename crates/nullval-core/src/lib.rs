//! Core runtime for nullval: the untyped `Value`, the nullable column types,
//! and the storage and JSON boundaries they implement.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Types and boundary traits only; helpers are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        traits::{ColumnValue, JsonValue},
        types::{NullArray, NullString},
        value::Value,
    };
}
