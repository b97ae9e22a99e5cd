//! Type descriptors: reflection kinds and dynamic types

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reflection category of a value.
///
/// `Invalid` is reserved for the untyped absence, which has no dynamic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// No dynamic type at all
    Invalid,
    /// The unit type `()`
    Unit,
    /// Boolean
    Bool,
    /// Unicode scalar value
    Char,
    /// Signed integer of any width
    Int,
    /// Unsigned integer of any width
    Uint,
    /// Floating point of any width
    Float,
    /// Text scalar
    String,
    /// Byte string
    Bytes,
    /// Fixed-size array
    Array,
    /// Fixed-size heterogeneous tuple
    Tuple,
    /// Struct instance
    Struct,
    /// Channel reference
    Chan,
    /// Function reference
    Func,
    /// Dynamic-type container
    Interface,
    /// Associative mapping reference
    Map,
    /// Pointer
    Ptr,
    /// Resizable sequence reference
    Slice,
}

impl Kind {
    /// Whether values of this kind hold at most one reference to backing
    /// storage and can therefore be unset.
    pub const fn is_reference_like(self) -> bool {
        matches!(
            self,
            Kind::Chan | Kind::Func | Kind::Interface | Kind::Map | Kind::Ptr | Kind::Slice
        )
    }

    /// Human-readable name of this kind
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Unit => "unit",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Array => "array",
            Kind::Tuple => "tuple",
            Kind::Struct => "struct",
            Kind::Chan => "chan",
            Kind::Func => "func",
            Kind::Interface => "interface",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Slice => "slice",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamic or declared type.
///
/// Reference-like handles carry one of these even when unset, which is what
/// separates a typed nil from the untyped absence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    // ═══════════════════════════════════════════════════════════════════
    // Scalars
    // ═══════════════════════════════════════════════════════════════════
    /// `()`
    Unit,
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `i128`
    I128,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `u128`
    U128,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `String`
    String,
    /// Byte string
    Bytes,

    // ═══════════════════════════════════════════════════════════════════
    // Aggregates
    // ═══════════════════════════════════════════════════════════════════
    /// Fixed-size array `[elem; len]`
    Array(Box<Type>, usize),
    /// Tuple
    Tuple(Vec<Type>),
    /// Named struct
    Struct(String),

    // ═══════════════════════════════════════════════════════════════════
    // Reference-like
    // ═══════════════════════════════════════════════════════════════════
    /// Channel of `elem`
    Chan(Box<Type>),
    /// Function signature
    Func(Vec<Type>, Box<Type>),
    /// Named interface; the empty name is `any`
    Interface(String),
    /// Mapping from key to value
    Map(Box<Type>, Box<Type>),
    /// Pointer to `elem`
    Ptr(Box<Type>),
    /// Resizable sequence of `elem`
    Slice(Box<Type>),
}

impl Type {
    /// The empty interface, able to hold a value of any type
    pub fn any() -> Self {
        Type::Interface(String::new())
    }

    /// `[]elem`
    pub fn slice(elem: Type) -> Self {
        Type::Slice(Box::new(elem))
    }

    /// `map[key]value`
    pub fn map(key: Type, value: Type) -> Self {
        Type::Map(Box::new(key), Box::new(value))
    }

    /// `*elem`
    pub fn ptr(elem: Type) -> Self {
        Type::Ptr(Box::new(elem))
    }

    /// `chan elem`
    pub fn chan(elem: Type) -> Self {
        Type::Chan(Box::new(elem))
    }

    /// `func(params) ret`
    pub fn func(params: Vec<Type>, ret: Type) -> Self {
        Type::Func(params, Box::new(ret))
    }

    /// `[elem; len]`
    pub fn array(elem: Type, len: usize) -> Self {
        Type::Array(Box::new(elem), len)
    }

    /// The reflection category of this type
    pub fn kind(&self) -> Kind {
        match self {
            Type::Unit => Kind::Unit,
            Type::Bool => Kind::Bool,
            Type::Char => Kind::Char,
            Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::I128 | Type::Isize => Kind::Int,
            Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::U128 | Type::Usize => Kind::Uint,
            Type::F32 | Type::F64 => Kind::Float,
            Type::String => Kind::String,
            Type::Bytes => Kind::Bytes,
            Type::Array(..) => Kind::Array,
            Type::Tuple(_) => Kind::Tuple,
            Type::Struct(_) => Kind::Struct,
            Type::Chan(_) => Kind::Chan,
            Type::Func(..) => Kind::Func,
            Type::Interface(_) => Kind::Interface,
            Type::Map(..) => Kind::Map,
            Type::Ptr(_) => Kind::Ptr,
            Type::Slice(_) => Kind::Slice,
        }
    }

    /// Whether a value of this type can hold an unset reference
    pub fn is_reference_like(&self) -> bool {
        self.kind().is_reference_like()
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Type]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Unit => write!(f, "()"),
            Type::Bool => write!(f, "bool"),
            Type::Char => write!(f, "char"),
            Type::I8 => write!(f, "i8"),
            Type::I16 => write!(f, "i16"),
            Type::I32 => write!(f, "i32"),
            Type::I64 => write!(f, "i64"),
            Type::I128 => write!(f, "i128"),
            Type::Isize => write!(f, "isize"),
            Type::U8 => write!(f, "u8"),
            Type::U16 => write!(f, "u16"),
            Type::U32 => write!(f, "u32"),
            Type::U64 => write!(f, "u64"),
            Type::U128 => write!(f, "u128"),
            Type::Usize => write!(f, "usize"),
            Type::F32 => write!(f, "f32"),
            Type::F64 => write!(f, "f64"),
            Type::String => write!(f, "String"),
            Type::Bytes => write!(f, "Vec<u8>"),
            Type::Array(elem, len) => write!(f, "[{}]{}", len, elem),
            Type::Tuple(items) => {
                write!(f, "(")?;
                write_list(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Type::Struct(name) => write!(f, "{}", name),
            Type::Chan(elem) => write!(f, "chan {}", elem),
            Type::Func(params, ret) => {
                write!(f, "func(")?;
                write_list(f, params)?;
                write!(f, ")")?;
                match ret.as_ref() {
                    Type::Unit => Ok(()),
                    ret => write!(f, " {}", ret),
                }
            }
            Type::Interface(name) if name.is_empty() => write!(f, "any"),
            Type::Interface(name) => write!(f, "{}", name),
            Type::Map(key, value) => write!(f, "map[{}]{}", key, value),
            Type::Ptr(elem) => write!(f, "*{}", elem),
            Type::Slice(elem) => write!(f, "[]{}", elem),
        }
    }
}
