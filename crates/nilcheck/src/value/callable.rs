//! Function handles

use std::sync::Arc;

use super::Value;
use crate::kind::Type;

/// Type alias for native function pointers to reduce complexity
pub type FuncPtr = Arc<dyn Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync>;

/// A function reference with a declared signature.
///
/// Two references are the same function when they share one bound
/// closure.
#[derive(Clone)]
pub struct FuncRef {
    /// Function name (for display/debugging)
    name: Option<String>,

    params: Vec<Type>,

    ret: Type,

    func: Option<FuncPtr>,
}

impl FuncRef {
    /// An unset function reference
    pub fn null(params: Vec<Type>, ret: Type) -> Self {
        Self {
            name: None,
            params,
            ret,
            func: None,
        }
    }

    /// Wrap a native function
    pub fn new<F>(name: impl Into<String>, params: Vec<Type>, ret: Type, func: F) -> Self
    where
        F: Fn(&[Value]) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            params,
            ret,
            func: Some(Arc::new(func)),
        }
    }

    /// Whether no function is bound
    pub fn is_unset(&self) -> bool {
        self.func.is_none()
    }

    /// Function name, if bound
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The signature, `func(params) ret`
    pub fn declared_type(&self) -> Type {
        Type::func(self.params.clone(), self.ret.clone())
    }

    fn same_func(&self, other: &FuncRef) -> bool {
        match (&self.func, &other.func) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl std::fmt::Debug for FuncRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "FuncRef({}: {})", name, self.declared_type()),
            None => write!(f, "FuncRef({})", self.declared_type()),
        }
    }
}

impl PartialEq for FuncRef {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params && self.ret == other.ret && self.same_func(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> FuncRef {
        FuncRef::new("double", vec![Type::I64], Type::I64, |args| match args {
            [Value::I64(n)] => Ok(Value::I64(n * 2)),
            _ => Err("expected one i64".to_string()),
        })
    }

    #[test]
    fn test_bound_function() {
        let f = double();
        assert!(!f.is_unset());
        assert_eq!(f.name(), Some("double"));
        assert_eq!(f.declared_type(), Type::func(vec![Type::I64], Type::I64));
    }

    #[test]
    fn test_unset_function() {
        let f = FuncRef::null(vec![Type::I64], Type::I64);
        assert!(f.is_unset());
        assert_eq!(f.name(), None);
        assert_eq!(format!("{:?}", f), "FuncRef(func(i64) i64)");
    }

    #[test]
    fn test_func_identity() {
        let f = double();
        let g = f.clone();
        assert_eq!(f, g);
        assert_ne!(f, double());
        assert_eq!(
            FuncRef::null(vec![], Type::Unit),
            FuncRef::null(vec![], Type::Unit)
        );
    }
}
