//! Value representation at the dynamic boundary

mod callable;
mod collections;
mod compound;
mod display;
mod hashable;
mod impls;
mod refs;

pub use callable::{FuncPtr, FuncRef};
pub use collections::{ChanRef, MapRef, SliceRef};
pub use compound::{ArrayValue, StructValue};
pub use hashable::HashableValue;
pub use impls::StaticType;
pub use refs::{InterfaceRef, PtrRef};

use std::sync::Arc;

use crate::error::{NilError, Result};
use crate::kind::{Kind, Type};

/// A dynamically typed value.
///
/// Values are organized into three tiers:
/// - Tier 0: The untyped absence, which carries no type at all
/// - Tier 1: Non-reference values (scalars and fixed-size aggregates)
/// - Tier 2: Reference-like handles, which carry a declared type and may be
///   unset
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 0: Untyped Absence
    // ═══════════════════════════════════════════════════════════════════
    /// No dynamic type and no value
    Nil,

    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Non-Reference Values
    // ═══════════════════════════════════════════════════════════════════
    /// The unit type `()`
    Unit,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    // Signed integers
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer (default integer type)
    I64(i64),
    /// 128-bit signed integer
    I128(i128),
    /// Pointer-sized signed integer
    Isize(isize),

    // Unsigned integers
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 128-bit unsigned integer
    U128(u128),
    /// Pointer-sized unsigned integer
    Usize(usize),

    // Floating point
    /// 32-bit floating point
    F32(f32),
    /// 64-bit floating point (default float type)
    F64(f64),

    /// Text scalar
    String(Arc<String>),

    /// Byte string
    Bytes(Arc<Vec<u8>>),

    /// Fixed-size array
    Array(Arc<ArrayValue>),

    /// Tuple (heterogeneous, fixed-size)
    Tuple(Arc<Vec<Value>>),

    /// Struct instance
    Struct(Arc<StructValue>),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Reference-Like Handles
    // ═══════════════════════════════════════════════════════════════════
    /// Channel reference
    Chan(ChanRef),

    /// Function reference
    Func(FuncRef),

    /// Dynamic-type container
    Interface(InterfaceRef),

    /// Associative mapping reference
    Map(MapRef),

    /// Pointer
    Ptr(PtrRef),

    /// Resizable sequence reference
    Slice(SliceRef),
}

impl Value {
    /// The dynamic type of this value, or `None` for the untyped absence.
    ///
    /// Reference-like handles report their declared type whether or not
    /// they are set.
    pub fn type_of(&self) -> Option<Type> {
        let ty = match self {
            Value::Nil => return None,
            Value::Unit => Type::Unit,
            Value::Bool(_) => Type::Bool,
            Value::Char(_) => Type::Char,
            Value::I8(_) => Type::I8,
            Value::I16(_) => Type::I16,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::I128(_) => Type::I128,
            Value::Isize(_) => Type::Isize,
            Value::U8(_) => Type::U8,
            Value::U16(_) => Type::U16,
            Value::U32(_) => Type::U32,
            Value::U64(_) => Type::U64,
            Value::U128(_) => Type::U128,
            Value::Usize(_) => Type::Usize,
            Value::F32(_) => Type::F32,
            Value::F64(_) => Type::F64,
            Value::String(_) => Type::String,
            Value::Bytes(_) => Type::Bytes,
            Value::Array(a) => a.array_type(),
            Value::Tuple(items) => Type::Tuple(
                items
                    .iter()
                    .map(|item| item.type_of().unwrap_or_else(Type::any))
                    .collect(),
            ),
            Value::Struct(s) => Type::Struct(s.type_name.clone()),
            Value::Chan(c) => c.declared_type(),
            Value::Func(f) => f.declared_type(),
            Value::Interface(i) => i.declared_type(),
            Value::Map(m) => m.declared_type(),
            Value::Ptr(p) => p.declared_type(),
            Value::Slice(s) => s.declared_type(),
        };
        Some(ty)
    }

    /// The reflection category of this value.
    ///
    /// Only the untyped absence reports [`Kind::Invalid`].
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Invalid,
            Value::Unit => Kind::Unit,
            Value::Bool(_) => Kind::Bool,
            Value::Char(_) => Kind::Char,
            Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::I128(_)
            | Value::Isize(_) => Kind::Int,
            Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::U128(_)
            | Value::Usize(_) => Kind::Uint,
            Value::F32(_) | Value::F64(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Bytes(_) => Kind::Bytes,
            Value::Array(_) => Kind::Array,
            Value::Tuple(_) => Kind::Tuple,
            Value::Struct(_) => Kind::Struct,
            Value::Chan(_) => Kind::Chan,
            Value::Func(_) => Kind::Func,
            Value::Interface(_) => Kind::Interface,
            Value::Map(_) => Kind::Map,
            Value::Ptr(_) => Kind::Ptr,
            Value::Slice(_) => Kind::Slice,
        }
    }
}

/// Check that `value` may be stored where `expected` is declared.
///
/// Interfaces accept any value, including the untyped absence. Every other
/// declared type requires an exact dynamic type match.
pub(crate) fn check_assignable(expected: &Type, value: &Value) -> Result<()> {
    if expected.kind() == Kind::Interface {
        return Ok(());
    }
    match value.type_of() {
        Some(ref got) if got == expected => Ok(()),
        got => Err(NilError::TypeError {
            expected: expected.to_string(),
            got: got.map_or_else(|| "nil".to_string(), |ty| ty.to_string()),
        }),
    }
}
