//! Error types for operations on reference-like values

use thiserror::Error;

use crate::kind::Kind;
use crate::value::Value;

/// Main error type for nilcheck operations.
///
/// The classifier itself never fails; these come from building handles
/// from mistyped values and from asking reflection the wrong question.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NilError {
    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// Map key that cannot be hashed
    #[error("unhashable map key of type {ty}")]
    UnhashableKey {
        /// Type name of the rejected key
        ty: String,
    },

    /// Nil query on a value whose kind can never be nil
    #[error("value of kind {kind} cannot be nil")]
    NotNilable {
        /// Kind of the inspected value
        kind: Kind,
    },
}

/// Result type alias for nilcheck operations
pub type Result<T> = std::result::Result<T, NilError>;

/// Render the dynamic type of a value for messages.
///
/// The untyped absence has no type and renders as `nil`.
pub fn type_name(value: &Value) -> String {
    match value.type_of() {
        Some(ty) => ty.to_string(),
        None => "nil".to_string(),
    }
}
