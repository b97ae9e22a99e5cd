//! # nilcheck
//!
//! Typed-nil aware absence checks for dynamically typed values.
//!
//! A value crossing a dynamically typed boundary can be absent in two
//! different ways: it can carry no type at all (the untyped absence), or it
//! can be a typed reference whose target is unset. A check that only looks
//! at the outer container sees the second case as present. [`is_nil`] treats
//! both as nil, and never treats a non-reference value as nil.
//!
//! ## Architecture
//!
//! - **Kinds and types**: [`Kind`] and [`Type`] describe dynamic types
//! - **Values**: [`Value`], a closed tagged sum with reference-like handles
//!   that can be unset
//! - **Reflection**: [`reflect::value_of`] gives a borrowed, read-only view
//! - **Classifier**: [`is_nil`] and the [`Nilable`] capability
//!
//! ## Example
//!
//! ```
//! use nilcheck::{is_nil, Type, Value};
//!
//! let untyped = Value::Nil;
//! let typed = Value::nil_ptr(Type::I64);
//! let boxed = Value::interface("", typed.clone());
//!
//! assert!(is_nil(&untyped));
//! assert!(is_nil(&typed));
//! // One level only: the interface itself holds a value
//! assert!(!is_nil(&boxed));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kind;
pub mod nil;
pub mod reflect;
pub mod value;

// Re-export main types
pub use error::{NilError, Result};
pub use kind::{Kind, Type};
pub use nil::{is_nil, Nilable};
pub use reflect::Reflected;
pub use value::{
    ArrayValue, ChanRef, FuncPtr, FuncRef, HashableValue, InterfaceRef, MapRef, PtrRef,
    SliceRef, StaticType, StructValue, Value,
};

/// nilcheck version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
