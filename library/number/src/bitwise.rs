//! Bitwise operations under infinite two's-complement semantics.
//!
//! A negative integer behaves as if its two's-complement bit pattern extended forever to the
//! left with set bits. `i64` operations already have this property within their width, and so
//! do the signed operators of `BigInt`, so an operation between two immediates and the same
//! operation between their widened forms always agree; the immediate path only saves the
//! allocation.
use std::ops::{BitAnd, BitOr, BitXor, Not};

use log::trace;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{Int, SystemLimitError};

/// The widest integer, in bits excluding sign, that a shift is allowed to produce
pub const MAX_INTEGER_BITS: u64 = 1 << 22;

impl Int {
    pub fn band(&self, rhs: &Int) -> Int {
        self.bitwise(rhs, |l, r| l & r, |l, r| l & r)
    }

    pub fn bor(&self, rhs: &Int) -> Int {
        self.bitwise(rhs, |l, r| l | r, |l, r| l | r)
    }

    pub fn bxor(&self, rhs: &Int) -> Int {
        self.bitwise(rhs, |l, r| l ^ r, |l, r| l ^ r)
    }

    /// Bitwise complement, which for every integer `n` is `-n - 1`
    pub fn bnot(&self) -> Int {
        match self {
            // The immediate range is symmetric under complement
            Self::Small(i) => Self::new(!*i),
            Self::Big(i) => Self::from(!i),
        }
    }

    /// Arithmetic shift left; a negative `shift` shifts right instead
    pub fn bsl(&self, shift: &Int) -> Result<Int, SystemLimitError> {
        self.shift(shift, true)
    }

    /// Arithmetic shift right, filling with the sign bit; a negative `shift` shifts left instead
    pub fn bsr(&self, shift: &Int) -> Result<Int, SystemLimitError> {
        self.shift(shift, false)
    }

    fn bitwise<S, B>(&self, rhs: &Int, small: S, big: B) -> Int
    where
        S: FnOnce(i64, i64) -> i64,
        B: FnOnce(&BigInt, &BigInt) -> BigInt,
    {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => Self::new(small(*lhs, *rhs)),
            (lhs, rhs) => Self::from(big(&lhs.widen(), &rhs.widen())),
        }
    }

    fn shift(&self, amount: &Int, left: bool) -> Result<Int, SystemLimitError> {
        let left = left != amount.is_negative();
        // `None` means the amount does not even fit in 64 bits
        let bits = match amount {
            Self::Small(n) => Some(n.unsigned_abs()),
            Self::Big(n) => n.magnitude().to_u64(),
        };
        if self.is_zero() {
            return Ok(Self::Small(0));
        }
        if left {
            self.shift_left(bits)
        } else {
            Ok(self.shift_right(bits))
        }
    }

    fn shift_left(&self, bits: Option<u64>) -> Result<Int, SystemLimitError> {
        let width = self.bits();
        let bits = match bits {
            Some(n) if width.saturating_add(n) <= MAX_INTEGER_BITS => n,
            _ => {
                trace!("refusing to shift a {}-bit integer left by {:?} bits", width, bits);
                return Err(SystemLimitError);
            }
        };
        match self {
            // Leaves at least the sign bit intact, so no bits are lost
            Self::Small(i) if width + bits < 64 => Ok(Self::new(*i << bits)),
            i => Ok(Self::from(&*i.widen() << bits as usize)),
        }
    }

    fn shift_right(&self, bits: Option<u64>) -> Int {
        match bits {
            Some(n) if n <= self.bits() => match self {
                Self::Small(i) => Self::new(*i >> n),
                Self::Big(i) => Self::from(i >> n as usize),
            },
            // Everything but the infinite sign extension has been shifted out
            _ if self.is_negative() => Self::Small(-1),
            _ => Self::Small(0),
        }
    }
}

impl BitAnd<&Int> for &Int {
    type Output = Int;

    fn bitand(self, rhs: &Int) -> Self::Output {
        self.band(rhs)
    }
}
impl BitAnd for Int {
    type Output = Int;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.band(&rhs)
    }
}

impl BitOr<&Int> for &Int {
    type Output = Int;

    fn bitor(self, rhs: &Int) -> Self::Output {
        self.bor(rhs)
    }
}
impl BitOr for Int {
    type Output = Int;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bor(&rhs)
    }
}

impl BitXor<&Int> for &Int {
    type Output = Int;

    fn bitxor(self, rhs: &Int) -> Self::Output {
        self.bxor(rhs)
    }
}
impl BitXor for Int {
    type Output = Int;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bxor(&rhs)
    }
}

impl Not for &Int {
    type Output = Int;

    fn not(self) -> Self::Output {
        self.bnot()
    }
}
impl Not for Int {
    type Output = Int;

    fn not(self) -> Self::Output {
        self.bnot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::One;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn two_pow(n: usize) -> Int {
        Int::from(BigInt::one() << n)
    }

    fn wide(i: i64) -> BigInt {
        BigInt::from(i)
    }

    #[test]
    fn band_of_disjoint_bits_demotes() {
        let result = two_pow(100).band(&Int::new(10));
        assert!(matches!(result, Int::Small(0)));
    }

    #[test]
    fn band_truth_table() {
        assert_eq!(Int::new(0b1100).band(&Int::new(0b1010)), Int::new(0b1000));
        assert_eq!(Int::new(0b1100).bor(&Int::new(0b1010)), Int::new(0b1110));
        assert_eq!(Int::new(0b1100).bxor(&Int::new(0b1010)), Int::new(0b0110));
    }

    #[test]
    fn band_with_minus_one_is_identity() {
        for n in [two_pow(100), -two_pow(100), Int::new(42), Int::new(-42), Int::new(0)] {
            assert_eq!(Int::new(-1).band(&n), n);
        }
    }

    #[test]
    fn signs_follow_infinite_twos_complement() {
        let big_neg = -two_pow(80);
        let big_pos = two_pow(80) + 5;
        assert!(!big_neg.band(&Int::new(7)).is_negative());
        assert!(big_neg.band(&Int::new(-7)).is_negative());
        assert!(big_neg.bor(&Int::new(7)).is_negative());
        assert!(!big_pos.bor(&Int::new(7)).is_negative());
        assert!(big_neg.bxor(&Int::new(7)).is_negative());
        assert!(!big_neg.bxor(&Int::new(-7)).is_negative());
    }

    #[test]
    fn negative_big_band_clears_low_bits() {
        // -(2^80) is ...1 followed by 80 zeroes, so only bits at or above 80 survive
        let masked = (-two_pow(80)).band(&(two_pow(81) + 3));
        assert_eq!(masked, two_pow(81));
        let masked = (-two_pow(80)).band(&(two_pow(80) - 1));
        assert_eq!(masked, Int::new(0));
    }

    #[test]
    fn bnot_is_negate_minus_one() {
        assert_eq!(Int::new(0).bnot(), Int::new(-1));
        assert_eq!(Int::new(Int::MIN_SMALL).bnot(), Int::new(Int::MAX_SMALL));
        assert_eq!(two_pow(70).bnot(), -two_pow(70) - 1);
    }

    #[test]
    fn bsl_overflow_promotes() {
        let shifted = Int::new(1).bsl(&Int::new(100)).unwrap();
        assert!(matches!(shifted, Int::Big(_)));
        assert_eq!(shifted, two_pow(100));

        let shifted = Int::new(1).bsl(&Int::new(64)).unwrap();
        assert_eq!(shifted.to_string(), "18446744073709551616");
    }

    #[test]
    fn bsl_at_the_immediate_boundary() {
        let shifted = Int::new(1).bsl(&Int::new(50)).unwrap();
        assert!(matches!(shifted, Int::Small(_)));
        let shifted = Int::new(1).bsl(&Int::new(51)).unwrap();
        assert!(matches!(shifted, Int::Big(_)));
        let shifted = Int::new(-1).bsl(&Int::new(51)).unwrap();
        assert!(matches!(shifted, Int::Small(n) if n == Int::MIN_SMALL));
    }

    #[test]
    fn bsr_sign_extends() {
        assert_eq!(Int::new(-8).bsr(&Int::new(1)).unwrap(), Int::new(-4));
        assert_eq!(Int::new(-1).bsr(&Int::new(10)).unwrap(), Int::new(-1));
        assert_eq!(Int::new(-5).bsr(&Int::new(1)).unwrap(), Int::new(-3));
        assert_eq!((-two_pow(100)).bsr(&Int::new(99)).unwrap(), Int::new(-2));
        assert_eq!(
            (-two_pow(100) - 1).bsr(&Int::new(100)).unwrap(),
            Int::new(-2)
        );
    }

    #[test]
    fn bsr_past_the_width_saturates() {
        assert_eq!(Int::new(0b101).bsr(&Int::new(3)).unwrap(), Int::new(0));
        assert_eq!(Int::new(5).bsr(&Int::new(1000)).unwrap(), Int::new(0));
        assert_eq!(Int::new(-5).bsr(&Int::new(1000)).unwrap(), Int::new(-1));
        assert_eq!(two_pow(100).bsr(&two_pow(70)).unwrap(), Int::new(0));
        assert_eq!((-two_pow(100)).bsr(&two_pow(70)).unwrap(), Int::new(-1));
    }

    #[test]
    fn negative_shift_reverses_direction() {
        let integer = Int::new(0b101100111000);
        assert_eq!(integer.bsl(&Int::new(-9)).unwrap(), Int::new(0b101));
        assert_eq!(integer.bsl(&Int::new(-12)).unwrap(), Int::new(0));
        assert_eq!(integer.bsr(&Int::new(-2)).unwrap(), Int::new(0b10110011100000));
    }

    #[test]
    fn shifting_zero_is_zero() {
        assert_eq!(Int::new(0).bsl(&two_pow(200)).unwrap(), Int::new(0));
        assert_eq!(Int::new(0).bsr(&-two_pow(200)).unwrap(), Int::new(0));
    }

    #[test]
    fn huge_left_shift_hits_system_limit() {
        assert_eq!(
            Int::new(1).bsl(&Int::new(MAX_INTEGER_BITS as i64)),
            Err(SystemLimitError)
        );
        assert_eq!(Int::new(1).bsl(&two_pow(70)), Err(SystemLimitError));
        assert_eq!(Int::new(1).bsr(&-two_pow(70)), Err(SystemLimitError));
    }

    proptest! {
        #[test]
        fn immediate_and_widened_paths_agree(a in any::<i64>(), b in any::<i64>()) {
            let (x, y) = (Int::new(a), Int::new(b));
            prop_assert_eq!(x.band(&y), Int::from(wide(a) & wide(b)));
            prop_assert_eq!(x.bor(&y), Int::from(wide(a) | wide(b)));
            prop_assert_eq!(x.bxor(&y), Int::from(wide(a) ^ wide(b)));
            prop_assert_eq!(x.bnot(), Int::from(!wide(a)));
        }

        #[test]
        fn bitwise_results_are_normalized(a in any::<i128>(), b in any::<i128>()) {
            let (x, y) = (Int::from(a), Int::from(b));
            prop_assert!(x.band(&y).is_normalized());
            prop_assert!(x.bor(&y).is_normalized());
            prop_assert!(x.bxor(&y).is_normalized());
        }

        #[test]
        fn band_with_minus_one_is_identity_for_all(a in any::<i128>()) {
            let n = Int::from(a);
            prop_assert_eq!(Int::new(-1).band(&n), n);
        }

        #[test]
        fn shifts_match_i128(a in -(1i64 << 40)..(1i64 << 40), n in 0u32..80) {
            let shift = Int::from(n);
            let expected = Int::from((a as i128) << n);
            prop_assert_eq!(Int::new(a).bsl(&shift).unwrap(), expected);
            let expected = Int::from((a as i128) >> n.min(127));
            prop_assert_eq!(Int::new(a).bsr(&shift).unwrap(), expected);
        }

        #[test]
        fn bsl_then_bsr_round_trips(a in any::<i64>(), n in 0u32..200) {
            let shift = Int::from(n);
            let shifted = Int::new(a).bsl(&shift).unwrap();
            prop_assert_eq!(shifted.bsr(&shift).unwrap(), Int::new(a));
        }
    }
}
