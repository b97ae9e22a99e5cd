//! Tests for values and reference-like handles

use nilcheck::error::type_name;
use nilcheck::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Kinds and Types
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_kind_of_every_variant() {
    assert_eq!(Value::Nil.kind(), Kind::Invalid);
    assert_eq!(Value::Unit.kind(), Kind::Unit);
    assert_eq!(Value::Bool(true).kind(), Kind::Bool);
    assert_eq!(Value::I32(1).kind(), Kind::Int);
    assert_eq!(Value::Usize(1).kind(), Kind::Uint);
    assert_eq!(Value::F64(1.0).kind(), Kind::Float);
    assert_eq!(Value::string("s").kind(), Kind::String);
    assert_eq!(Value::bytes(vec![1u8]).kind(), Kind::Bytes);
    assert_eq!(Value::tuple(vec![]).kind(), Kind::Tuple);
    assert_eq!(Value::structure(StructValue::new("S")).kind(), Kind::Struct);
    assert_eq!(Value::array(Type::I64, vec![]).unwrap().kind(), Kind::Array);
    assert_eq!(Value::nil_chan(Type::I64).kind(), Kind::Chan);
    assert_eq!(Value::nil_func(vec![], Type::Unit).kind(), Kind::Func);
    assert_eq!(Value::nil_interface("").kind(), Kind::Interface);
    assert_eq!(Value::nil_map(Type::I64, Type::I64).kind(), Kind::Map);
    assert_eq!(Value::nil_ptr(Type::I64).kind(), Kind::Ptr);
    assert_eq!(Value::nil_slice(Type::I64).kind(), Kind::Slice);
}

#[test]
fn test_kind_agrees_with_type() {
    let values = vec![
        Value::Bool(false),
        Value::U8(1),
        Value::string("x"),
        Value::new_ptr(1i64),
        Value::from(vec!["a", "b"]),
        Value::map(Type::String, Type::I64),
        Value::interface("Stringer", 1i64),
    ];
    for v in values {
        assert_eq!(v.type_of().map(|ty| ty.kind()), Some(v.kind()));
    }
}

#[test]
fn test_static_types() {
    assert_eq!(i64::static_type(), Type::I64);
    assert_eq!(<Vec<String>>::static_type(), Type::slice(Type::String));
    assert_eq!(<Option<bool>>::static_type(), Type::ptr(Type::Bool));
    assert_eq!(
        <Vec<Option<u8>>>::static_type(),
        Type::slice(Type::ptr(Type::U8))
    );
}

#[test]
fn test_type_name() {
    assert_eq!(type_name(&Value::Nil), "nil");
    assert_eq!(type_name(&Value::I64(1)), "i64");
    assert_eq!(type_name(&Value::from(vec![1u8])), "[]u8");
    assert_eq!(type_name(&Value::bytes(vec![1u8])), "Vec<u8>");
    assert_eq!(
        type_name(&Value::nil_map(Type::String, Type::slice(Type::I64))),
        "map[String][]i64"
    );
    assert_eq!(type_name(&Value::nil_interface("Error")), "Error");
}

// ═══════════════════════════════════════════════════════════════════════
// Handles Through Value
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_pointer_shares_target_across_copies() {
    let p = Value::new_ptr(1i64);
    let alias = p.clone();
    assert_eq!(alias.as_ptr().unwrap().target(), Some(&Value::I64(1)));
    assert_eq!(p, alias);
    assert_ne!(p, Value::new_ptr(1i64));
}

#[test]
fn test_unset_pointer_has_no_target() {
    let p = Value::nil_ptr(Type::I64);
    assert_eq!(p.as_ptr().unwrap().target(), None);
}

#[test]
fn test_map_through_value() {
    let m = Value::Map(
        MapRef::from_entries(
            Type::String,
            Type::I64,
            vec![(Value::from("one"), Value::I64(1))],
        )
        .unwrap(),
    );
    let handle = m.as_map().unwrap();
    assert_eq!(handle.get(&Value::from("one")), Ok(Some(Value::I64(1))));
    assert_eq!(handle.len(), 1);

    let unset = Value::nil_map(Type::String, Type::I64);
    assert_eq!(unset.as_map().unwrap().get(&Value::from("one")), Ok(None));
}

#[test]
fn test_map_lookup_errors_are_reported() {
    let m = Value::map(Type::String, Type::I64);
    let err = m.as_map().unwrap().get(&Value::I64(1)).unwrap_err();
    assert_eq!(err.to_string(), "Type error: expected String, got i64");

    let floats = Value::map(Type::F32, Type::I64);
    let err = floats.as_map().unwrap().get(&Value::F32(0.5)).unwrap_err();
    assert_eq!(err, NilError::UnhashableKey { ty: "f32".into() });
}

#[test]
fn test_func_through_value() {
    let f = Value::func("len", vec![Type::String], Type::Usize, |args| match args {
        [Value::String(s)] => Ok(Value::Usize(s.len())),
        _ => Err("expected a string".to_string()),
    });
    let handle = f.as_func().unwrap();
    assert_eq!(handle.name(), Some("len"));
    assert_eq!(f.type_of(), Some(Type::func(vec![Type::String], Type::Usize)));
    assert_eq!(f, f.clone());

    let unset = Value::nil_func(vec![Type::String], Type::Usize);
    assert!(unset.as_func().unwrap().is_unset());
}

#[test]
fn test_channel_through_value() {
    let c = Value::make_chan(Type::String, 2);
    assert_eq!(c.as_chan().unwrap().capacity(), 2);
    assert_eq!(c.type_of(), Some(Type::chan(Type::String)));

    let unset = Value::nil_chan(Type::String);
    assert_eq!(unset.as_chan().unwrap().capacity(), 0);
}

#[test]
fn test_interface_reports_dynamic_type() {
    let i = Value::interface("", vec![1i64, 2]);
    let handle = i.as_interface().unwrap();
    assert_eq!(handle.dynamic_type(), Some(Type::slice(Type::I64)));
    assert_eq!(i.type_of(), Some(Type::any()));

    let unset = Value::nil_interface("");
    assert_eq!(unset.as_interface().unwrap().dynamic_type(), None);
}

#[test]
fn test_slice_reads() {
    let s = Value::slice(Type::I64, vec![Value::I64(0), Value::I64(1)]).unwrap();
    let handle = s.as_slice().unwrap();
    assert_eq!(handle.len(), 2);
    assert_eq!(handle.get(1), Some(&Value::I64(1)));
    assert_eq!(handle.to_vec(), vec![Value::I64(0), Value::I64(1)]);
}

// ═══════════════════════════════════════════════════════════════════════
// Reflection
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_reflect_view() {
    let v = Value::nil_slice(Type::I64);
    let r = reflect::value_of(&v);
    assert!(r.is_valid());
    assert_eq!(r.kind(), Kind::Slice);
    assert_eq!(r.is_nil(), Ok(true));
    assert_eq!(r.value(), &v);

    let nil = Value::Nil;
    assert!(!reflect::value_of(&nil).is_valid());
}

// ═══════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_debug_output() {
    assert_eq!(format!("{:?}", Value::Nil), "nil");
    assert_eq!(format!("{:?}", Value::nil_slice(Type::I64)), "[]i64(nil)");
    assert_eq!(format!("{:?}", Value::from(Vec::<i64>::new())), "[]i64{}");
    assert_eq!(
        format!("{:?}", Value::nil_func(vec![Type::I64], Type::Bool)),
        "func(i64) bool(nil)"
    );

    let s = StructValue::new("Point")
        .with_field("x", 1i64)
        .with_field("y", 2i64);
    assert_eq!(format!("{:?}", Value::structure(s)), "Point { x: 1, y: 2 }");
}

#[cfg(feature = "serde")]
#[test]
fn test_type_serde() {
    let ty = Type::map(Type::String, Type::slice(Type::I64));
    let json = serde_json::to_string(&ty).unwrap();
    let back: Type = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ty);

    assert_eq!(serde_json::to_string(&Kind::Ptr).unwrap(), "\"ptr\"");
}
