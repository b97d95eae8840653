use avm_common::{AvmError, BigUint, Bytes, Uint64};
use avm_ops::{addw, bitlen, bsqrt, divmodw, divw, exp, expw, mulw, shl, shr, sqrt};
use proptest::proptest;

#[test]
fn wide_addition_and_multiplication() {
    assert_eq!(addw(u64::MAX, 1u64), (Uint64::ONE, Uint64::ZERO));
    assert_eq!(addw(1u64, 2u64), (Uint64::ZERO, Uint64::new(3)));
    assert_eq!(
        mulw(u64::MAX, u64::MAX),
        (Uint64::new(u64::MAX - 1), Uint64::ONE)
    );
}

#[test]
fn wide_division() {
    assert_eq!(divw(1u64, 0u64, 2u64).unwrap(), Uint64::new(1 << 63));
    assert_eq!(divw(0u64, 1u64, 0u64), Err(AvmError::DivisionByZero));
    assert_eq!(divw(1u64, 0u64, 1u64).unwrap_err().to_string(), "divw overflow");

    // (2^64 + 5) / 2
    assert_eq!(
        divmodw(1u64, 5u64, 0u64, 2u64).unwrap(),
        (Uint64::ZERO, Uint64::new((1 << 63) + 2), Uint64::ZERO, Uint64::ONE)
    );
    assert_eq!(
        divmodw(1u64, 0u64, 0u64, 0u64),
        Err(AvmError::DivisionByZero)
    );
}

#[test]
fn exponentiation() {
    assert_eq!(exp(2u64, 10u64).unwrap(), Uint64::new(1024));
    assert!(exp(2u64, 64u64).is_err());
    assert!(matches!(
        exp(0u64, 0u64),
        Err(AvmError::UndefinedOperation(_))
    ));

    assert_eq!(expw(2u64, 64u64).unwrap(), (Uint64::ONE, Uint64::ZERO));
    assert_eq!(expw(1u64, u64::MAX).unwrap(), (Uint64::ZERO, Uint64::ONE));
    assert_eq!(expw(2u64, 128u64).unwrap_err().to_string(), "expw overflow");
    assert!(matches!(
        expw(0u64, 0u64),
        Err(AvmError::UndefinedOperation(_))
    ));
}

#[test]
fn square_roots() {
    assert_eq!(sqrt(17u64), Uint64::new(4));
    assert_eq!(sqrt(u64::MAX), Uint64::new(u32::MAX as u64));
    assert_eq!(bsqrt(&BigUint::from(144u64)).unwrap(), BigUint::from(12u64));
    assert_eq!(
        bsqrt(&BigUint::from(u128::MAX)).unwrap(),
        BigUint::from(u64::MAX)
    );
}

#[test]
fn bit_lengths() {
    assert_eq!(bitlen(0u64), Uint64::ZERO);
    assert_eq!(bitlen(u64::MAX), Uint64::new(64));
    assert_eq!(bitlen(Bytes::from_slice(&[0x00, 0x01]).unwrap()), Uint64::ONE);
    assert_eq!(bitlen(Bytes::from_slice(&[0x80, 0x00]).unwrap()), Uint64::new(16));
    assert_eq!(bitlen(Bytes::empty()), Uint64::ZERO);
    assert_eq!(bitlen(Bytes::from_slice(&[0x80; 100]).unwrap()), Uint64::new(800));
}

proptest! {
    #[test]
    fn addw_matches_u128(a: u64, b: u64) {
        let (high, low) = addw(a, b);
        let sum = u128::from(a) + u128::from(b);
        assert_eq!((u128::from(high.as_u64()) << 64) | u128::from(low.as_u64()), sum);
    }

    #[test]
    fn divmodw_reconstructs_dividend(a: u128, b in 1u128..) {
        let (qh, ql, rh, rl) = divmodw(
            (a >> 64) as u64,
            a as u64,
            (b >> 64) as u64,
            b as u64,
        )
        .unwrap();
        let join = |h: Uint64, l: Uint64| (u128::from(h.as_u64()) << 64) | u128::from(l.as_u64());
        let (q, r) = (join(qh, ql), join(rh, rl));
        assert!(r < b);
        assert_eq!(q * b + r, a);
    }

    #[test]
    fn shifts_stay_in_range(value: u64, shift in 0u64..64) {
        assert_eq!(shl(value, shift).unwrap().as_u64(), value << shift);
        assert_eq!(shr(value, shift).unwrap().as_u64(), value >> shift);
    }
}
