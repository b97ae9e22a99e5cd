//! Pointer and interface handles

use std::sync::Arc;

use super::{check_assignable, Value};
use crate::error::Result;
use crate::kind::Type;

/// A pointer to a storage cell.
///
/// An unset pointer still knows its element type, so `*i64(nil)` and the
/// untyped absence stay distinguishable.
#[derive(Debug, Clone)]
pub struct PtrRef {
    elem: Type,
    target: Option<Arc<Value>>,
}

impl PtrRef {
    /// An unset pointer to `elem`
    pub fn null(elem: Type) -> Self {
        Self { elem, target: None }
    }

    /// Allocate a fresh cell holding `value`.
    pub fn new(elem: Type, value: Value) -> Result<Self> {
        check_assignable(&elem, &value)?;
        Ok(Self::from_checked(elem, value))
    }

    pub(super) fn from_checked(elem: Type, value: Value) -> Self {
        Self {
            elem,
            target: Some(Arc::new(value)),
        }
    }

    /// Whether the pointer has no target
    pub fn is_unset(&self) -> bool {
        self.target.is_none()
    }

    /// Element type
    pub fn elem_type(&self) -> &Type {
        &self.elem
    }

    /// The pointer type, `*elem`
    pub fn declared_type(&self) -> Type {
        Type::ptr(self.elem.clone())
    }

    /// The target value, `None` when unset
    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }

    /// Whether both pointers share a target, or are both unset
    pub fn ptr_eq(&self, other: &PtrRef) -> bool {
        match (&self.target, &other.target) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PartialEq for PtrRef {
    fn eq(&self, other: &Self) -> bool {
        self.elem == other.elem && self.ptr_eq(other)
    }
}

/// A dynamic-type container.
///
/// Holds at most one value together with that value's own dynamic type.
/// Interfaces never nest: boxing the untyped absence or an unset interface
/// yields an unset interface, and boxing a set interface re-boxes its held
/// value. Boxing a typed nil (for example an unset pointer) yields a *set*
/// interface.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceRef {
    name: String,
    inner: Option<Arc<Value>>,
}

impl InterfaceRef {
    /// An unset interface; the empty name is `any`
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: None,
        }
    }

    /// Box `value` into an interface
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        let inner = match value {
            Value::Nil => None,
            Value::Interface(other) => other.inner,
            value => Some(Arc::new(value)),
        };
        Self {
            name: name.into(),
            inner,
        }
    }

    /// Whether the interface holds no value
    pub fn is_unset(&self) -> bool {
        self.inner.is_none()
    }

    /// The interface type itself
    pub fn declared_type(&self) -> Type {
        Type::Interface(self.name.clone())
    }

    /// The held value, one level deep
    pub fn inner(&self) -> Option<&Value> {
        self.inner.as_deref()
    }

    /// The dynamic type of the held value
    pub fn dynamic_type(&self) -> Option<Type> {
        self.inner().and_then(Value::type_of)
    }
}
