//! Reflection view over a value
//!
//! A [`Reflected`] borrows a [`Value`] and answers questions about its
//! dynamic type without consuming or copying it.

use crate::error::{NilError, Result};
use crate::kind::{Kind, Type};
use crate::value::Value;

/// A borrowed, read-only reflection of a value.
#[derive(Debug, Clone, Copy)]
pub struct Reflected<'a> {
    value: &'a Value,
}

/// Reflect a value.
pub fn value_of(value: &Value) -> Reflected<'_> {
    Reflected { value }
}

impl<'a> Reflected<'a> {
    /// Whether the value carries a representable type descriptor.
    ///
    /// Only the untyped absence is invalid.
    pub fn is_valid(&self) -> bool {
        self.kind() != Kind::Invalid
    }

    /// The reflection category
    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// The dynamic type, `None` when invalid
    pub fn type_of(&self) -> Option<Type> {
        self.value.type_of()
    }

    /// The reflected value
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Whether a reference-like value is unset.
    ///
    /// Kinds that can never be nil are an error rather than `false`, so
    /// that callers asking the wrong question find out.
    pub fn is_nil(&self) -> Result<bool> {
        match self.value {
            Value::Chan(c) => Ok(c.is_unset()),
            Value::Func(f) => Ok(f.is_unset()),
            Value::Interface(i) => Ok(i.is_unset()),
            Value::Map(m) => Ok(m.is_unset()),
            Value::Ptr(p) => Ok(p.is_unset()),
            Value::Slice(s) => Ok(s.is_unset()),
            _ => Err(NilError::NotNilable { kind: self.kind() }),
        }
    }
}
