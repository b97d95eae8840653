use avm_arc4::{
    Arc4Error, Arc4Native, Arc4Value, TypeDescriptor, arc4_encoded_length, decode, encode,
    typed::{DynamicArray, StaticArray, Str, UintN},
};
use avm_test::string_array;
use hex_literal::hex;

fn parse(s: &str) -> TypeDescriptor {
    s.parse().unwrap()
}

#[test]
fn bool_array_and_trailing_bools_pack_into_three_bytes() {
    let flags = (0..10).map(|i| Arc4Value::bool(i % 3 == 0)).collect();
    let value = Arc4Value::tuple(vec![
        Arc4Value::fixed_array(TypeDescriptor::Bool, flags).unwrap(),
        Arc4Value::bool(true),
        Arc4Value::bool(true),
    ])
    .unwrap();

    // bits 0, 3, 6, 9 set, then the two trailing bools share a byte
    assert_eq!(value.encoded(), [0b1001_0010, 0b0100_0000, 0b1100_0000]);
    assert_eq!(value.type_descriptor().static_length().unwrap(), 3);
    assert_eq!(
        arc4_encoded_length::<(StaticArray<bool, 10>, bool, bool)>().unwrap(),
        3
    );
}

#[test]
fn dynamic_array_of_strings_vector() {
    let value = string_array(&["a", "b", "c"]).unwrap();
    assert_eq!(
        value.encoded(),
        hex!("0003 0006 0009 000c 000161 000162 000163")
    );
    assert_eq!(value.len().unwrap(), 3);
    assert_eq!(value.get(1).unwrap().as_str().unwrap(), "b");
}

#[test]
fn fixed_array_of_dynamic_elements_uses_offsets() {
    let ty = parse("string[2]");
    assert!(ty.is_dynamic());
    let native = Arc4Native::Array(vec!["ab".into(), "c".into()]);
    let encoded = encode(&ty, &native).unwrap();
    assert_eq!(encoded, hex!("0004 0008 00026162 000163"));
    assert_eq!(decode(&ty, &encoded).unwrap(), native);
}

#[test]
fn mixed_tuple_matches_abi_encoder() {
    // (uint64,string,bool,uint16[]) with (1, "x", true, [2, 3])
    let value = Arc4Value::tuple(vec![
        Arc4Value::uint64(1),
        Arc4Value::str("x").unwrap(),
        Arc4Value::bool(true),
        Arc4Value::dyn_array(
            TypeDescriptor::UintN { bits: 16 },
            vec![
                Arc4Value::uint(16, 2u64).unwrap(),
                Arc4Value::uint(16, 3u64).unwrap(),
            ],
        )
        .unwrap(),
    ])
    .unwrap();
    assert_eq!(value.type_descriptor().to_string(), "(uint64,string,bool,uint16[])");
    assert_eq!(
        value.encoded(),
        hex!("0000000000000001 000d 80 0010 000178 0002 0002 0003")
    );
}

#[test]
fn nested_tuple_offsets_are_relative_to_their_own_head() {
    let inner = Arc4Value::tuple(vec![Arc4Value::str("in").unwrap()]).unwrap();
    let outer = Arc4Value::tuple(vec![inner, Arc4Value::str("out").unwrap()]).unwrap();
    assert_eq!(
        outer.encoded(),
        hex!("0004 000a 0002 0002696e 0003 6f7574")
    );
}

#[test]
fn typed_descriptors_match_parsed_ones() {
    use avm_arc4::Arc4Type;
    assert_eq!(
        <(UintN<64>, DynamicArray<Str>, StaticArray<bool, 3>)>::descriptor(),
        parse("(uint64,string[],bool[3])")
    );
    assert!(matches!(
        arc4_encoded_length::<DynamicArray<UintN<8>>>(),
        Err(Arc4Error::DynamicType(_))
    ));
}

#[test]
fn malformed_buffers_are_rejected() {
    let ty = parse("(uint8,string)");
    // offset does not match the head length
    assert!(decode(&ty, &hex!("01 0004 0000")).is_err());
    // string payload shorter than its prefix
    assert!(decode(&ty, &hex!("01 0003 0002ff")).is_err());
    // dynamic array count larger than the data
    assert!(decode(&parse("uint16[]"), &hex!("0003 0001 0002")).is_err());
    // trailing bytes after a static value
    assert!(decode(&parse("uint16[2]"), &hex!("0001 0002 00")).is_err());
}

#[test]
fn default_values() {
    let value = Arc4Value::default_for(parse("(bool,uint32,string,byte[2])")).unwrap();
    assert_eq!(value.encoded(), hex!("00 00000000 0009 0000 0000"));
    let value = Arc4Value::default_of::<DynamicArray<UintN<64>>>().unwrap();
    assert_eq!(value.encoded(), [0, 0]);
}

#[test]
fn oversized_fixed_arrays_are_rejected() {
    let ty = parse("uint512[576460752303423488]");
    assert!(matches!(ty.static_length(), Err(Arc4Error::InvalidDescriptor(_))));
    assert!(matches!(decode(&ty, &[0; 64]), Err(Arc4Error::InvalidDescriptor(_))));
    assert!(matches!(
        Arc4Value::default_for(ty),
        Err(Arc4Error::InvalidDescriptor(_))
    ));
}
