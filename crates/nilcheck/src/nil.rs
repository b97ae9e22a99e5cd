//! The nil classifier

use tracing::{debug, trace};

use crate::kind::Kind;
use crate::reflect;
use crate::value::{ChanRef, FuncRef, InterfaceRef, MapRef, PtrRef, SliceRef, Value};

/// Report whether `value` is logically nil.
///
/// - The untyped absence ([`Value::Nil`]) is nil.
/// - A reference-like value (channel, function, interface, map, pointer or
///   slice) is nil exactly when it is unset, whatever its declared type.
/// - Every other value is never nil, including zero values such as `0`,
///   `""` or an all-zero struct.
///
/// Only one level is inspected: an interface holding an unset pointer is
/// itself set, and so is not nil.
///
/// # Example
///
/// ```
/// use nilcheck::{is_nil, Type, Value};
///
/// assert!(is_nil(&Value::Nil));
/// assert!(is_nil(&Value::nil_slice(Type::I64)));
/// assert!(!is_nil(&Value::from(Vec::<i64>::new())));
/// assert!(!is_nil(&Value::I64(0)));
/// ```
pub fn is_nil(value: &Value) -> bool {
    if value.is_untyped_nil() {
        trace!("untyped nil");
        return true;
    }

    let reflected = reflect::value_of(value);
    // Unreachable through the check above, kept for values built elsewhere
    if !reflected.is_valid() {
        return false;
    }

    let kind = reflected.kind();
    let nil = match kind {
        Kind::Chan | Kind::Func | Kind::Interface | Kind::Map | Kind::Ptr | Kind::Slice => {
            match reflected.is_nil() {
                Ok(unset) => unset,
                Err(err) => {
                    debug!(%kind, %err, "reference kind without a nil state");
                    false
                }
            }
        }
        _ => false,
    };
    trace!(%kind, nil, "classified value");
    nil
}

/// Values that can report whether they are nil.
pub trait Nilable {
    /// Whether this value is nil
    fn is_nil(&self) -> bool;
}

impl Nilable for Value {
    fn is_nil(&self) -> bool {
        is_nil(self)
    }
}

impl<T: Nilable> Nilable for Option<T> {
    /// `None` is nil; `Some` defers to the held value.
    fn is_nil(&self) -> bool {
        self.as_ref().map_or(true, Nilable::is_nil)
    }
}

macro_rules! nilable_handle {
    ($($handle:ty),* $(,)?) => {
        $(
            impl Nilable for $handle {
                fn is_nil(&self) -> bool {
                    self.is_unset()
                }
            }
        )*
    };
}

nilable_handle!(ChanRef, FuncRef, InterfaceRef, MapRef, PtrRef, SliceRef);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Type;
    use crate::value::StructValue;

    #[test]
    fn test_untyped_nil() {
        assert!(is_nil(&Value::Nil));
    }

    #[test]
    fn test_unset_references() {
        assert!(is_nil(&Value::nil_slice(Type::I64)));
        assert!(is_nil(&Value::nil_map(Type::String, Type::I64)));
        assert!(is_nil(&Value::nil_ptr(Type::I64)));
        assert!(is_nil(&Value::nil_chan(Type::I64)));
        assert!(is_nil(&Value::nil_func(vec![], Type::Unit)));
        assert!(is_nil(&Value::nil_interface("")));
    }

    #[test]
    fn test_every_kind() {
        let cases = vec![
            (Value::Unit, false),
            (Value::Bool(false), false),
            (Value::Char('a'), false),
            (Value::I64(0), false),
            (Value::U8(0), false),
            (Value::F64(0.0), false),
            (Value::string(""), false),
            (Value::bytes(Vec::new()), false),
            (Value::array(Type::I64, vec![]).unwrap(), false),
            (Value::tuple(vec![]), false),
            (Value::structure(StructValue::new("S")), false),
            (Value::nil_chan(Type::I64), true),
            (Value::make_chan(Type::I64, 0), false),
            (Value::nil_func(vec![], Type::Unit), true),
            (Value::func("f", vec![], Type::Unit, |_| Ok(Value::Unit)), false),
            (Value::nil_interface(""), true),
            (Value::interface("", 1i64), false),
            (Value::nil_map(Type::I64, Type::I64), true),
            (Value::map(Type::I64, Type::I64), false),
            (Value::nil_ptr(Type::I64), true),
            (Value::new_ptr(1i64), false),
            (Value::nil_slice(Type::I64), true),
            (Value::from(vec![1i64]), false),
        ];
        for (value, want) in cases {
            assert_eq!(is_nil(&value), want, "{:?} ({})", value, value.kind());
        }
    }

    #[test]
    fn test_plain_values() {
        assert!(!is_nil(&Value::I64(123)));
        assert!(!is_nil(&Value::Unit));
        assert!(!is_nil(&Value::string("")));
    }

    #[test]
    fn test_nilable_handles() {
        assert!(SliceRef::null(Type::I64).is_nil());
        assert!(!SliceRef::empty(Type::I64).is_nil());
        assert!(PtrRef::null(Type::I64).is_nil());
        assert!(!MapRef::new(Type::I64, Type::I64).is_nil());
    }

    #[test]
    fn test_nilable_option() {
        assert!(None::<Value>.is_nil());
        assert!(Some(Value::Nil).is_nil());
        assert!(!Some(Value::I64(1)).is_nil());
    }
}
