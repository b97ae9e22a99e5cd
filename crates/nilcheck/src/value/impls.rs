//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create a byte string value
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(Arc::new(b.into()))
    }

    /// Create a tuple value
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Arc::new(items))
    }

    /// Create a struct value
    pub fn structure(s: StructValue) -> Self {
        Value::Struct(Arc::new(s))
    }

    /// Create a fixed-size array value
    pub fn array(elem: Type, items: Vec<Value>) -> Result<Self> {
        Ok(Value::Array(Arc::new(ArrayValue::new(elem, items)?)))
    }

    /// Create an unset slice, `[]elem(nil)`
    pub fn nil_slice(elem: Type) -> Self {
        Value::Slice(SliceRef::null(elem))
    }

    /// Create a set slice
    pub fn slice(elem: Type, items: Vec<Value>) -> Result<Self> {
        Ok(Value::Slice(SliceRef::new(elem, items)?))
    }

    /// Create an unset map
    pub fn nil_map(key: Type, value: Type) -> Self {
        Value::Map(MapRef::null(key, value))
    }

    /// Create a set map with zero entries
    pub fn map(key: Type, value: Type) -> Self {
        Value::Map(MapRef::new(key, value))
    }

    /// Create an unset pointer
    pub fn nil_ptr(elem: Type) -> Self {
        Value::Ptr(PtrRef::null(elem))
    }

    /// Allocate a fresh cell holding `value` and point at it.
    ///
    /// The element type is the value's own dynamic type, or `any` for the
    /// untyped absence.
    pub fn new_ptr(value: impl Into<Value>) -> Self {
        let value = value.into();
        let elem = value.type_of().unwrap_or_else(Type::any);
        Value::Ptr(PtrRef::from_checked(elem, value))
    }

    /// Create an unset channel
    pub fn nil_chan(elem: Type) -> Self {
        Value::Chan(ChanRef::null(elem))
    }

    /// Create a set channel
    pub fn make_chan(elem: Type, capacity: usize) -> Self {
        Value::Chan(ChanRef::make(elem, capacity))
    }

    /// Create an unset function reference
    pub fn nil_func(params: Vec<Type>, ret: Type) -> Self {
        Value::Func(FuncRef::null(params, ret))
    }

    /// Wrap a native function
    pub fn func<F>(name: impl Into<String>, params: Vec<Type>, ret: Type, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Value::Func(FuncRef::new(name, params, ret, func))
    }

    /// Create an unset interface
    pub fn nil_interface(name: impl Into<String>) -> Self {
        Value::Interface(InterfaceRef::null(name))
    }

    /// Box a value into an interface
    pub fn interface(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Interface(InterfaceRef::new(name, value.into()))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if this is the untyped absence (not merely an unset reference)
    pub fn is_untyped_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Check if this value belongs to the reference-like category
    pub fn is_reference_like(&self) -> bool {
        self.kind().is_reference_like()
    }

    /// Check if this value is logically nil. See [`crate::is_nil`].
    pub fn is_nil(&self) -> bool {
        crate::nil::is_nil(self)
    }

    /// Check if value is any integer type
    pub fn is_integer(&self) -> bool {
        matches!(self.kind(), Kind::Int | Kind::Uint)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract as i64 (converts from smaller integer types)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I8(n) => Some(*n as i64),
            Value::I16(n) => Some(*n as i64),
            Value::I32(n) => Some(*n as i64),
            Value::I64(n) => Some(*n),
            Value::Isize(n) => Some(*n as i64),
            // Unsigned that fit
            Value::U8(n) => Some(*n as i64),
            Value::U16(n) => Some(*n as i64),
            Value::U32(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the slice handle
    pub fn as_slice(&self) -> Option<&SliceRef> {
        match self {
            Value::Slice(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the map handle
    pub fn as_map(&self) -> Option<&MapRef> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Extract the pointer handle
    pub fn as_ptr(&self) -> Option<&PtrRef> {
        match self {
            Value::Ptr(p) => Some(p),
            _ => None,
        }
    }

    /// Extract the channel handle
    pub fn as_chan(&self) -> Option<&ChanRef> {
        match self {
            Value::Chan(c) => Some(c),
            _ => None,
        }
    }

    /// Extract the function handle
    pub fn as_func(&self) -> Option<&FuncRef> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Extract the interface handle
    pub fn as_interface(&self) -> Option<&InterfaceRef> {
        match self {
            Value::Interface(i) => Some(i),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Untyped absence
            (Value::Nil, Value::Nil) => true,

            // Unit
            (Value::Unit, Value::Unit) => true,

            // Primitives
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,

            // Signed integers
            (Value::I8(a), Value::I8(b)) => a == b,
            (Value::I16(a), Value::I16(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::I128(a), Value::I128(b)) => a == b,
            (Value::Isize(a), Value::Isize(b)) => a == b,

            // Unsigned integers
            (Value::U8(a), Value::U8(b)) => a == b,
            (Value::U16(a), Value::U16(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::U128(a), Value::U128(b)) => a == b,
            (Value::Usize(a), Value::Usize(b)) => a == b,

            // Floats
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,

            // Strings and bytes
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,

            // Aggregates (element-wise comparison)
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,

            // References compare by identity of their backing storage;
            // interfaces compare their held values
            (Value::Chan(a), Value::Chan(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a == b,
            (Value::Interface(a), Value::Interface(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Ptr(a), Value::Ptr(b)) => a == b,
            (Value::Slice(a), Value::Slice(b)) => a == b,

            // Different types are never equal
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Static Types and From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

/// Rust types with a fixed dynamic [`Type`] once converted into a [`Value`].
pub trait StaticType {
    /// The dynamic type of `Value::from(x)` for any `x` of this type
    fn static_type() -> Type;
}

macro_rules! scalar_value {
    ($($rust:ty => $variant:ident),* $(,)?) => {
        $(
            impl StaticType for $rust {
                fn static_type() -> Type {
                    Type::$variant
                }
            }

            impl From<$rust> for Value {
                fn from(n: $rust) -> Self {
                    Value::$variant(n)
                }
            }
        )*
    };
}

scalar_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl StaticType for () {
    fn static_type() -> Type {
        Type::Unit
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl StaticType for String {
    fn static_type() -> Type {
        Type::String
    }
}

impl StaticType for &str {
    fn static_type() -> Type {
        Type::String
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl<T: StaticType> StaticType for Vec<T> {
    fn static_type() -> Type {
        Type::slice(T::static_type())
    }
}

/// A `Vec` becomes a set slice, even when empty.
impl<T: Into<Value> + StaticType> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        let items = v.into_iter().map(Into::into).collect();
        Value::Slice(SliceRef::from_checked(T::static_type(), items))
    }
}

impl<T: StaticType> StaticType for Option<T> {
    fn static_type() -> Type {
        Type::ptr(T::static_type())
    }
}

/// An `Option` becomes a pointer: `None` is an unset `*T`, `Some(x)` points
/// at a fresh cell holding `x`.
impl<T: Into<Value> + StaticType> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        let elem = T::static_type();
        match opt {
            Some(v) => Value::Ptr(PtrRef::from_checked(elem, v.into())),
            None => Value::Ptr(PtrRef::null(elem)),
        }
    }
}

impl From<StructValue> for Value {
    fn from(s: StructValue) -> Self {
        Value::structure(s)
    }
}

impl From<ArrayValue> for Value {
    fn from(a: ArrayValue) -> Self {
        Value::Array(Arc::new(a))
    }
}

impl From<ChanRef> for Value {
    fn from(c: ChanRef) -> Self {
        Value::Chan(c)
    }
}

impl From<FuncRef> for Value {
    fn from(f: FuncRef) -> Self {
        Value::Func(f)
    }
}

impl From<InterfaceRef> for Value {
    fn from(i: InterfaceRef) -> Self {
        Value::Interface(i)
    }
}

impl From<MapRef> for Value {
    fn from(m: MapRef) -> Self {
        Value::Map(m)
    }
}

impl From<PtrRef> for Value {
    fn from(p: PtrRef) -> Self {
        Value::Ptr(p)
    }
}

impl From<SliceRef> for Value {
    fn from(s: SliceRef) -> Self {
        Value::Slice(s)
    }
}
