use avm_arc4::{Arc4Value, TypeDescriptor, decode, encode};
use avm_test::{init_tracing, strategies::typed_native};
use proptest::proptest;

proptest! {
    #[test]
    fn decode_inverts_encode((ty, native) in typed_native()) {
        init_tracing();
        let encoded = encode(&ty, &native).unwrap();
        assert_eq!(decode(&ty, &encoded).unwrap(), native);
        if !ty.is_dynamic() {
            assert_eq!(encoded.len(), ty.static_length().unwrap());
        }
    }

    #[test]
    fn encode_inverts_decode((ty, native) in typed_native()) {
        let encoded = encode(&ty, &native).unwrap();
        let value = Arc4Value::from_bytes(ty, &encoded).unwrap();
        assert_eq!(value.encoded(), encoded.as_slice());
    }

    // `byte[N]` arrays come back as static bytes, so compare the rendering.
    #[test]
    fn type_strings_parse_back((ty, native) in typed_native()) {
        let parsed: TypeDescriptor = ty.to_string().parse().unwrap();
        assert_eq!(parsed.to_string(), ty.to_string());
        let encoded = encode(&ty, &native).unwrap();
        assert!(decode(&parsed, &encoded).is_ok());
    }
}
