//! Shared fixtures and proptest strategies for the integration tests.

use avm_arc4::{Arc4Native, Arc4Value, TypeDescriptor, address::Address};
use avm_common::BigUint;
use proptest::{
    collection::vec,
    prelude::{BoxedStrategy, Just, Strategy, any, prop_oneof},
};
use tracing_subscriber::EnvFilter;

/// Installs a subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn string_array(values: &[&str]) -> Result<Arc4Value, avm_arc4::Arc4Error> {
    let items = values
        .iter()
        .map(|value| Arc4Value::str(*value))
        .collect::<Result<Vec<_>, _>>()?;
    Arc4Value::dyn_array(TypeDescriptor::Str, items)
}

pub mod strategies {
    use super::*;

    fn leaf_descriptor() -> impl Strategy<Value = TypeDescriptor> {
        prop_oneof![
            Just(TypeDescriptor::Bool),
            (1u16..=64).prop_map(|bytes| TypeDescriptor::UintN { bits: bytes * 8 }),
            (1u16..=8, 1u8..=4).prop_map(|(bytes, precision)| TypeDescriptor::UFixed {
                bits: bytes * 8,
                precision
            }),
            Just(TypeDescriptor::Byte),
            Just(TypeDescriptor::Address),
            Just(TypeDescriptor::Str),
            Just(TypeDescriptor::DynamicBytes),
            (0usize..4).prop_map(|len| TypeDescriptor::StaticBytes { len }),
        ]
    }

    /// Descriptors nested up to three levels deep.
    pub fn descriptor() -> impl Strategy<Value = TypeDescriptor> {
        leaf_descriptor().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                (inner.clone(), 0usize..4)
                    .prop_map(|(elem, len)| TypeDescriptor::fixed_array(elem, len)),
                inner.clone().prop_map(TypeDescriptor::dyn_array),
                vec(inner, 0..4).prop_map(TypeDescriptor::tuple),
            ]
        })
    }

    fn uint_of_bytes(len: usize) -> BoxedStrategy<Arc4Native> {
        vec(any::<u8>(), len)
            .prop_map(|bytes| Arc4Native::Uint(BigUint::from_bytes(&bytes)))
            .boxed()
    }

    /// Natives valid for `ty`.
    pub fn native(ty: &TypeDescriptor) -> BoxedStrategy<Arc4Native> {
        match ty {
            TypeDescriptor::Bool => any::<bool>().prop_map(Arc4Native::Bool).boxed(),
            TypeDescriptor::UintN { bits } | TypeDescriptor::UFixed { bits, .. } => {
                uint_of_bytes(usize::from(*bits) / 8)
            }
            TypeDescriptor::Byte => uint_of_bytes(1),
            TypeDescriptor::Address => any::<[u8; 32]>()
                .prop_map(|key| Arc4Native::Address(Address::new(key)))
                .boxed(),
            TypeDescriptor::Str => "\\PC{0,8}".prop_map(Arc4Native::Str).boxed(),
            TypeDescriptor::DynamicBytes => vec(any::<u8>(), 0..8).prop_map(Arc4Native::Bytes).boxed(),
            TypeDescriptor::StaticBytes { len } => {
                vec(any::<u8>(), *len).prop_map(Arc4Native::Bytes).boxed()
            }
            TypeDescriptor::FixedArray { elem, len } => {
                vec(native(elem), *len).prop_map(Arc4Native::Array).boxed()
            }
            TypeDescriptor::DynArray { elem } => {
                vec(native(elem), 0..4).prop_map(Arc4Native::Array).boxed()
            }
            TypeDescriptor::Tuple { fields } => fields
                .iter()
                .map(native)
                .collect::<Vec<_>>()
                .prop_map(Arc4Native::Tuple)
                .boxed(),
            TypeDescriptor::Struct { fields, .. } => fields
                .iter()
                .map(|(_, ty)| native(ty))
                .collect::<Vec<_>>()
                .prop_map(Arc4Native::Tuple)
                .boxed(),
        }
    }

    /// A descriptor together with a native value of that type.
    pub fn typed_native() -> impl Strategy<Value = (TypeDescriptor, Arc4Native)> {
        descriptor().prop_flat_map(|ty| {
            let values = native(&ty);
            (Just(ty), values)
        })
    }
}
