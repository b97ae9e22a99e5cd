//! Hashable wrapper for Value to enable use as map keys

use std::hash::{Hash, Hasher};

use super::Value;
use crate::error::{type_name, NilError, Result};

/// A map key.
///
/// Only scalars (other than floats), strings and bytes can be keys. The
/// wrapper can only be built through [`HashableValue::new`], so every
/// instance holds a hashable value.
#[derive(Debug, Clone)]
pub struct HashableValue(Value);

impl HashableValue {
    /// Wrap a value as a key, rejecting unhashable values.
    pub fn new(value: Value) -> Result<Self> {
        if Self::is_hashable(&value) {
            Ok(HashableValue(value))
        } else {
            Err(NilError::UnhashableKey {
                ty: type_name(&value),
            })
        }
    }

    /// Check if a value can be hashed
    pub fn is_hashable(value: &Value) -> bool {
        matches!(
            value,
            Value::Unit
                | Value::Bool(_)
                | Value::Char(_)
                | Value::I8(_)
                | Value::I16(_)
                | Value::I32(_)
                | Value::I64(_)
                | Value::I128(_)
                | Value::Isize(_)
                | Value::U8(_)
                | Value::U16(_)
                | Value::U32(_)
                | Value::U64(_)
                | Value::U128(_)
                | Value::Usize(_)
                | Value::String(_)
                | Value::Bytes(_)
        )
    }

    /// The wrapped key
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap the key
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Hash for HashableValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the discriminant first
        std::mem::discriminant(&self.0).hash(state);

        match &self.0 {
            Value::Bool(b) => b.hash(state),
            Value::Char(c) => c.hash(state),
            Value::I8(n) => n.hash(state),
            Value::I16(n) => n.hash(state),
            Value::I32(n) => n.hash(state),
            Value::I64(n) => n.hash(state),
            Value::I128(n) => n.hash(state),
            Value::Isize(n) => n.hash(state),
            Value::U8(n) => n.hash(state),
            Value::U16(n) => n.hash(state),
            Value::U32(n) => n.hash(state),
            Value::U64(n) => n.hash(state),
            Value::U128(n) => n.hash(state),
            Value::Usize(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            // Unit, and nothing else gets past `new`
            _ => {}
        }
    }
}

impl PartialEq for HashableValue {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for HashableValue {}
