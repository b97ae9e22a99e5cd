//! Fixed-size aggregate values: structs and arrays

use indexmap::IndexMap;

use super::{check_assignable, Value};
use crate::error::Result;
use crate::kind::Type;

/// A struct instance with named fields.
///
/// Uses IndexMap to preserve field order for predictable iteration and
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
    /// The struct's type name (e.g., "Point", "Person")
    pub type_name: String,

    /// The struct's fields in definition order
    pub fields: IndexMap<String, Value>,
}

impl StructValue {
    /// Create a new struct with no fields
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field (builder pattern)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Get a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A fixed-size array. Every element has the declared element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue {
    elem: Type,
    items: Vec<Value>,
}

impl ArrayValue {
    /// Create an array, checking each element against `elem`.
    pub fn new(elem: Type, items: Vec<Value>) -> Result<Self> {
        for item in &items {
            check_assignable(&elem, item)?;
        }
        Ok(Self { elem, items })
    }

    /// Element type
    pub fn elem_type(&self) -> &Type {
        &self.elem
    }

    /// The full array type, `[elem; len]`
    pub fn array_type(&self) -> Type {
        Type::array(self.elem.clone(), self.items.len())
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the array has zero elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an element by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_fields_keep_order() {
        let s = StructValue::new("Point")
            .with_field("y", 2i64)
            .with_field("x", 1i64);
        let names: Vec<_> = s.fields.keys().cloned().collect();
        assert_eq!(names, vec!["y", "x"]);
        assert_eq!(s.get("x"), Some(&Value::I64(1)));
        assert_eq!(s.get("z"), None);
    }

    #[test]
    fn test_array_checks_elements() {
        let arr = ArrayValue::new(Type::I64, vec![Value::I64(1), Value::I64(2)]).unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.array_type(), Type::array(Type::I64, 2));

        let err = ArrayValue::new(Type::I64, vec![Value::Bool(true)]);
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_array() {
        let arr = ArrayValue::new(Type::U8, vec![]).unwrap();
        assert!(arr.is_empty());
        assert_eq!(arr.array_type(), Type::array(Type::U8, 0));
    }
}
