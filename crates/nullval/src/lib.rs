//! ## Crate layout
//! - `core`: the untyped `Value`, `NullArray`, `NullString`, and the storage
//!   and JSON boundary traits.
//!
//! The `prelude` module brings the column types and boundary traits into
//! scope for application code.

pub use nullval_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{
    Error,
    error::ErrorKind,
    types::{NullArray, NullString},
    value::{Value, ValueKind},
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        traits::{ColumnValue as _, JsonValue as _},
        types::{NullArray, NullString},
        value::Value,
    };
    pub use serde::{Deserialize, Serialize};
}
