//! Display and Debug implementations for Value

use std::fmt;

use super::*;

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", item)?;
    }
    Ok(())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),

            Value::I8(n) => write!(f, "{}i8", n),
            Value::I16(n) => write!(f, "{}i16", n),
            Value::I32(n) => write!(f, "{}i32", n),
            Value::I64(n) => write!(f, "{}", n), // Default integer type
            Value::I128(n) => write!(f, "{}i128", n),
            Value::Isize(n) => write!(f, "{}isize", n),

            Value::U8(n) => write!(f, "{}u8", n),
            Value::U16(n) => write!(f, "{}u16", n),
            Value::U32(n) => write!(f, "{}u32", n),
            Value::U64(n) => write!(f, "{}u64", n),
            Value::U128(n) => write!(f, "{}u128", n),
            Value::Usize(n) => write!(f, "{}usize", n),

            Value::F32(n) => write!(f, "{}f32", n),
            Value::F64(n) => write!(f, "{}", n), // Default float type

            Value::String(s) => write!(f, "{:?}", s.as_ref()),
            Value::Bytes(b) => write!(f, "b{:?}", b.as_ref()),

            Value::Array(a) => {
                write!(f, "[")?;
                write_items(f, a.as_slice())?;
                write!(f, "]")
            }

            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?; // Single-element tuple needs trailing comma
                }
                write!(f, ")")
            }

            Value::Struct(s) => {
                write!(f, "{} {{ ", s.type_name)?;
                for (i, (k, v)) in s.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {:?}", k, v)?;
                }
                write!(f, " }}")
            }

            // Typed nils render as a conversion of nil to their type
            _ if self.is_nil() => match self.type_of() {
                Some(ty) => write!(f, "{}(nil)", ty),
                None => write!(f, "nil"),
            },

            Value::Slice(s) => {
                write!(f, "{}{{", s.declared_type())?;
                write_items(f, &s.to_vec())?;
                write!(f, "}}")
            }

            Value::Map(m) => {
                write!(f, "{}{{", m.declared_type())?;
                for (i, (k, v)) in m.entries().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {:?}", k, v)?;
                }
                write!(f, "}}")
            }

            Value::Ptr(p) => match p.target() {
                Some(target) => write!(f, "&{:?}", target),
                None => write!(f, "{}(nil)", p.declared_type()),
            },

            Value::Chan(c) => write!(f, "<{} cap {}>", c.declared_type(), c.capacity()),

            Value::Func(func) => match func.name() {
                Some(name) => write!(f, "<fn {}>", name),
                None => write!(f, "<{}>", func.declared_type()),
            },

            Value::Interface(i) => match i.inner() {
                Some(inner) => write!(f, "{:?}", inner),
                None => write!(f, "{}(nil)", i.declared_type()),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is more user-friendly, Debug is more detailed
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            Value::Char(c) => write!(f, "{}", c),            // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_untyped_nil() {
        assert_eq!(format!("{:?}", Value::Nil), "nil");
    }

    #[test]
    fn test_debug_typed_nils() {
        assert_eq!(format!("{:?}", Value::nil_slice(Type::I64)), "[]i64(nil)");
        assert_eq!(
            format!("{:?}", Value::nil_map(Type::String, Type::I64)),
            "map[String]i64(nil)"
        );
        assert_eq!(format!("{:?}", Value::nil_ptr(Type::I64)), "*i64(nil)");
        assert_eq!(format!("{:?}", Value::nil_interface("")), "any(nil)");
    }

    #[test]
    fn test_debug_set_references() {
        let slice = Value::slice(Type::I64, vec![Value::I64(1), Value::I64(2)]).unwrap();
        assert_eq!(format!("{:?}", slice), "[]i64{1, 2}");
        assert_eq!(format!("{:?}", Value::new_ptr(5i64)), "&5");
        assert_eq!(format!("{:?}", Value::make_chan(Type::I64, 4)), "<chan i64 cap 4>");
        assert_eq!(format!("{:?}", Value::interface("", "hi")), "\"hi\"");
    }

    #[test]
    fn test_display_strips_quotes() {
        assert_eq!(Value::string("hello").to_string(), "hello");
        assert_eq!(Value::Char('x').to_string(), "x");
        assert_eq!(Value::I64(3).to_string(), "3");
    }
}
