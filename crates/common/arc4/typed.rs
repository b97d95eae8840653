//! Compile-time ARC4 types.
//!
//! Marker types implement [`Arc4Type`] so descriptors and static encoded
//! lengths can be derived from a type alone:
//!
//! ```
//! use avm_arc4::typed::{arc4_encoded_length, StaticArray, UintN};
//!
//! type Pair = (UintN<64>, StaticArray<bool, 10>, bool);
//! assert_eq!(arc4_encoded_length::<Pair>().unwrap(), 11);
//! ```

use std::marker::PhantomData;

use avm_common::constants::BITS_IN_BYTE;

use crate::{
    address::Address,
    constants::{MAX_UFIXED_PRECISION, MAX_UINT_BITS},
    descriptor::TypeDescriptor,
    error::Arc4Error,
};

pub trait Arc4Type {
    fn descriptor() -> TypeDescriptor;
}

/// Encoded length of `T`, which must be static.
pub fn arc4_encoded_length<T: Arc4Type>() -> Result<usize, Arc4Error> {
    T::descriptor().static_length()
}

/// `uint<BITS>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UintN<const BITS: u16>;

/// `ufixed<N>x<M>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UFixedNxM<const N: u16, const M: u8>;

/// `byte`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Byte;

/// `string`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

/// `byte[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicBytes;

/// `byte[N]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBytes<const N: usize>;

/// `T[N]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticArray<T, const N: usize>(PhantomData<T>);

/// `T[]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicArray<T>(PhantomData<T>);

const fn is_valid_width(bits: u16) -> bool {
    bits > 0 && bits <= MAX_UINT_BITS && bits as usize % BITS_IN_BYTE == 0
}

impl<const BITS: u16> Arc4Type for UintN<BITS> {
    fn descriptor() -> TypeDescriptor {
        const { assert!(is_valid_width(BITS), "invalid uintN width") };
        TypeDescriptor::UintN { bits: BITS }
    }
}

impl<const N: u16, const M: u8> Arc4Type for UFixedNxM<N, M> {
    fn descriptor() -> TypeDescriptor {
        const {
            assert!(is_valid_width(N), "invalid ufixed width");
            assert!(M > 0 && M <= MAX_UFIXED_PRECISION, "invalid ufixed precision");
        };
        TypeDescriptor::UFixed {
            bits: N,
            precision: M,
        }
    }
}

impl Arc4Type for Byte {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Byte
    }
}

impl Arc4Type for Str {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Str
    }
}

impl Arc4Type for DynamicBytes {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::DynamicBytes
    }
}

impl<const N: usize> Arc4Type for StaticBytes<N> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::StaticBytes { len: N }
    }
}

impl<T: Arc4Type, const N: usize> Arc4Type for StaticArray<T, N> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::fixed_array(T::descriptor(), N)
    }
}

impl<T: Arc4Type> Arc4Type for DynamicArray<T> {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::dyn_array(T::descriptor())
    }
}

impl Arc4Type for Address {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Address
    }
}

impl Arc4Type for bool {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Bool
    }
}

impl Arc4Type for String {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::Str
    }
}

macro_rules! impl_native_uint {
    ($($ty:ty),*) => {
        $(
            impl Arc4Type for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::UintN { bits: <$ty>::BITS as u16 }
                }
            }
        )*
    };
}

impl_native_uint!(u8, u16, u32, u64, u128);

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Arc4Type),+> Arc4Type for ($($name,)+) {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::tuple(vec![$($name::descriptor()),+])
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
