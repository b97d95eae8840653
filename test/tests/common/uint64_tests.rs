use avm_common::{AvmError, Uint64};
use proptest::{prelude::any, proptest};

#[test]
fn overflow_boundary() {
    let err = Uint64::MAX.try_add(1u64).unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(err.to_string(), "Uint64 overflow or underflow");
    assert_eq!(
        Uint64::ZERO.try_sub(1u64).unwrap_err().to_string(),
        "Uint64 overflow or underflow"
    );
}

#[test]
fn shift_boundary() {
    assert_eq!(Uint64::ONE.try_shl(63u64).unwrap(), Uint64::new(1 << 63));
    assert_eq!(
        Uint64::ONE.try_shl(64u64),
        Err(AvmError::ShiftTooLarge { shift: 64, max: 63 })
    );
    assert_eq!(
        Uint64::MAX.try_shr(64u64),
        Err(AvmError::ShiftTooLarge { shift: 64, max: 63 })
    );
}

#[test]
fn zero_to_the_zero() {
    assert_eq!(
        Uint64::ZERO.try_pow(0u64),
        Err(AvmError::UndefinedOperation("0 ** 0 is undefined"))
    );
    assert_eq!(Uint64::ZERO.try_pow(5u64).unwrap(), Uint64::ZERO);
    assert_eq!(Uint64::ONE.try_pow(u64::MAX).unwrap(), Uint64::ONE);
    assert_eq!(Uint64::new(2).try_pow(63u64).unwrap(), Uint64::new(1 << 63));
    assert!(Uint64::new(2).try_pow(64u64).unwrap_err().is_overflow());
}

#[test]
fn itob_btoi() {
    let value = Uint64::new(0x0102_0304_0506_0708);
    assert_eq!(value.to_bytes().as_slice(), [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(Uint64::from_bytes(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap(), value);
    assert_eq!(Uint64::from_bytes(&[]).unwrap(), Uint64::ZERO);
    assert!(Uint64::from_bytes(&[0; 9]).is_err());
}

proptest! {
    #[test]
    fn add_matches_checked_add(a in any::<u64>(), b in any::<u64>()) {
        match a.checked_add(b) {
            Some(sum) => assert_eq!(Uint64::new(a).try_add(b).unwrap(), Uint64::new(sum)),
            None => assert!(Uint64::new(a).try_add(b).unwrap_err().is_overflow()),
        }
    }

    #[test]
    fn sub_matches_checked_sub(a in any::<u64>(), b in any::<u64>()) {
        assert_eq!(Uint64::new(a).try_sub(b).ok(), a.checked_sub(b).map(Uint64::new));
    }

    #[test]
    fn mul_matches_checked_mul(a in any::<u64>(), b in any::<u64>()) {
        assert_eq!(Uint64::new(a).try_mul(b).ok(), a.checked_mul(b).map(Uint64::new));
    }

    #[test]
    fn div_and_rem(a in any::<u64>(), b in 1u64..) {
        assert_eq!(Uint64::new(a).try_div(b).unwrap(), Uint64::new(a / b));
        assert_eq!(Uint64::new(a).try_rem(b).unwrap(), Uint64::new(a % b));
        assert_eq!(Uint64::new(a).try_div(0u64), Err(AvmError::DivisionByZero));
    }

    #[test]
    fn shifts_below_width(a in any::<u64>(), shift in 0u64..64) {
        assert_eq!(Uint64::new(a).try_shl(shift).unwrap(), Uint64::new(a << shift));
        assert_eq!(Uint64::new(a).try_shr(shift).unwrap(), Uint64::new(a >> shift));
    }

    #[test]
    fn bytes_round_trip(a in any::<u64>()) {
        let value = Uint64::new(a);
        assert_eq!(Uint64::from_bytes(value.to_bytes().as_slice()).unwrap(), value);
    }
}
