use avm_arc4::{Arc4Error, Arc4Value, TypeDescriptor};
use avm_test::string_array;

#[test]
fn set_matches_fresh_construction() {
    let mut value = string_array(&["a", "b", "c"]).unwrap();
    value.set(0, Arc4Value::str("x").unwrap()).unwrap();
    assert_eq!(value.encoded(), string_array(&["x", "b", "c"]).unwrap().encoded());

    value.set(2, Arc4Value::str("a longer string").unwrap()).unwrap();
    assert_eq!(
        value,
        string_array(&["x", "b", "a longer string"]).unwrap()
    );
}

#[test]
fn nested_mutation_rewrites_the_root() {
    let matrix = |rows: &[&[&str]]| {
        let rows = rows
            .iter()
            .map(|row| string_array(row).unwrap())
            .collect();
        Arc4Value::dyn_array("string[]".parse().unwrap(), rows).unwrap()
    };
    let mut value = Arc4Value::tuple(vec![
        Arc4Value::uint64(7),
        matrix(&[&["a"], &["b", "c"]]),
    ])
    .unwrap();

    value.set_at(&[1, 1, 0], Arc4Value::str("zz").unwrap()).unwrap();

    let expected = Arc4Value::tuple(vec![
        Arc4Value::uint64(7),
        matrix(&[&["a"], &["zz", "c"]]),
    ])
    .unwrap();
    assert_eq!(value.encoded(), expected.encoded());
}

#[test]
fn push_pop_adjust_prefix_and_tail() {
    let mut value = string_array(&[]).unwrap();
    assert_eq!(value.encoded(), [0, 0]);

    value.push(Arc4Value::str("a").unwrap()).unwrap();
    value
        .extend([Arc4Value::str("b").unwrap(), Arc4Value::str("c").unwrap()])
        .unwrap();
    assert_eq!(value, string_array(&["a", "b", "c"]).unwrap());

    let popped = value.pop().unwrap();
    assert_eq!(popped.as_str().unwrap(), "c");
    assert_eq!(value, string_array(&["a", "b"]).unwrap());

    value.pop().unwrap();
    value.pop().unwrap();
    assert_eq!(value.pop(), Err(Arc4Error::EmptyArray));
    assert_eq!(value.encoded(), [0, 0]);
}

#[test]
fn element_type_is_enforced() {
    let mut value = string_array(&["a"]).unwrap();
    assert!(matches!(
        value.push(Arc4Value::uint64(1)),
        Err(Arc4Error::TypeMismatch { .. })
    ));
    let mut numbers =
        Arc4Value::dyn_array(TypeDescriptor::UintN { bits: 8 }, vec![]).unwrap();
    assert!(matches!(
        numbers.push(Arc4Value::uint64(1)),
        Err(Arc4Error::TypeMismatch { .. })
    ));
    numbers.push(Arc4Value::uint(8, 1u64).unwrap()).unwrap();
}

#[test]
fn copies_do_not_share_state() {
    let mut original = string_array(&["a", "b"]).unwrap();
    let snapshot = original.encoded().to_vec();
    let mut copy = original.copy();

    copy.push(Arc4Value::str("c").unwrap()).unwrap();
    assert_eq!(original.encoded(), snapshot.as_slice());

    original.set(0, Arc4Value::str("z").unwrap()).unwrap();
    assert_eq!(copy, string_array(&["a", "b", "c"]).unwrap());
}

#[test]
fn struct_field_updates() {
    let mut account = Arc4Value::structure(
        "Account",
        vec![
            ("balance", Arc4Value::uint64(10)),
            ("frozen", Arc4Value::bool(false)),
            ("name", Arc4Value::str("alice").unwrap()),
        ],
    )
    .unwrap();
    account.set_field("frozen", Arc4Value::bool(true)).unwrap();
    account.set_field("balance", Arc4Value::uint64(20)).unwrap();

    let expected = Arc4Value::tuple(vec![
        Arc4Value::uint64(20),
        Arc4Value::bool(true),
        Arc4Value::str("alice").unwrap(),
    ])
    .unwrap();
    assert_eq!(account.encoded(), expected.encoded());
    assert_eq!(
        account.set_field("owner", Arc4Value::bool(true)),
        Err(Arc4Error::UnknownField("owner".to_string()))
    );
}
