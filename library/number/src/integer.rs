use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use log::trace;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{validate_radix, InvalidRadixError, ParseIntError};

/// The number of bits available to an immediate integer, sign included.
///
/// A term is a 64-bit word; floats are stored unmodified and every other immediate lives in the
/// NaN space, so integers get the 51 payload bits below the quiet bit plus the quiet bit as sign.
pub const SMALL_INTEGER_BITS: u32 = 52;

/// This enum unifies the fixed-width and arbitrary precision integral types
///
/// A value of this type is normalized when `Small` holds a value in `MIN_SMALL..=MAX_SMALL`
/// and `Big` holds a value outside of it. Every constructor and operation in this crate
/// produces normalized values; building a variant by hand is the only way to break this,
/// and [`Int::normalize`] repairs it.
#[derive(Debug, Clone)]
pub enum Int {
    Small(i64),
    Big(BigInt),
}
impl Int {
    const INTEGER_TAG: u64 = 0xFFF0_0000_0000_0000;
    const SIGN_BIT: u64 = 1 << (SMALL_INTEGER_BITS - 1);
    const UNSIGNED_BITS: u64 = !(Self::INTEGER_TAG | Self::SIGN_BIT);
    pub const MAX_SMALL: i64 = Self::UNSIGNED_BITS as i64;
    pub const MIN_SMALL: i64 = !Self::UNSIGNED_BITS as i64;

    /// Creates a new integer, promoting to `Big` when `i` is out of immediate range
    #[inline]
    pub fn new(i: i64) -> Self {
        if Self::is_small(i) {
            Self::Small(i)
        } else {
            trace!("promoting {} to big integer", i);
            Self::Big(i.into())
        }
    }

    /// Returns true if `i` can be represented as an immediate
    #[inline]
    pub const fn is_small(i: i64) -> bool {
        i >= Self::MIN_SMALL && i <= Self::MAX_SMALL
    }

    /// Re-establishes the representation invariant for a value built by hand
    pub fn normalize(self) -> Self {
        match self {
            Self::Small(i) => Self::new(i),
            Self::Big(i) => Self::from(i),
        }
    }

    /// Returns true if this value uses the representation its magnitude calls for
    pub fn is_normalized(&self) -> bool {
        match self {
            Self::Small(i) => Self::is_small(*i),
            Self::Big(i) => match i.to_i64() {
                Some(i) => !Self::is_small(i),
                None => true,
            },
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Small(num) => *num == 0,
            Self::Big(num) => num.is_zero(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Small(num) => *num < 0,
            Self::Big(num) => num.is_negative(),
        }
    }

    /// Returns -1, 0 or 1 depending on the sign of this value
    pub fn signum(&self) -> i64 {
        match self {
            Self::Small(num) => num.signum(),
            Self::Big(num) if num.is_negative() => -1,
            Self::Big(_) => 1,
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Small(num) => match num.checked_abs() {
                Some(abs) => Self::new(abs),
                None => Self::from(BigInt::from(*num).abs()),
            },
            Self::Big(num) => Self::from(num.abs()),
        }
    }

    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Small(i) => Some(*i),
            Self::Big(i) => i.to_i64(),
        }
    }

    pub fn to_bigint(&self) -> BigInt {
        self.widen().into_owned()
    }

    /// Views this value as a `BigInt`, allocating only when it is `Small`
    pub(crate) fn widen(&self) -> Cow<'_, BigInt> {
        match self {
            Self::Small(i) => Cow::Owned(BigInt::from(*i)),
            Self::Big(i) => Cow::Borrowed(i),
        }
    }

    /// Determines the fewest bits necessary to express this integer value, not including the sign
    pub fn bits(&self) -> u64 {
        match self {
            Self::Big(i) => i.bits(),
            Self::Small(i) => {
                let i = *i;
                if i >= 0 {
                    (64 - i.leading_zeros()) as u64
                } else {
                    (64 - i.leading_ones()) as u64
                }
            }
        }
    }

    /// Parses `string` in the given radix, with an optional leading `+` or `-`
    pub fn from_string_radix(string: &str, radix: u32) -> Result<Self, ParseIntError> {
        let radix = validate_radix(radix)?;
        if let Ok(i) = i64::from_str_radix(string, radix) {
            return Ok(Self::new(i));
        }
        let (negative, digits) = match string.as_bytes() {
            [b'-', rest @ ..] => (true, rest),
            [b'+', rest @ ..] => (false, rest),
            rest => (false, rest),
        };
        let digits = digits
            .iter()
            .map(|b| {
                char::from(*b)
                    .to_digit(radix)
                    .map(|d| d as u8)
                    .ok_or(ParseIntError::InvalidDigit {
                        digit: u32::from(*b),
                        radix,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let sign = if negative {
            crate::Sign::Negative
        } else {
            crate::Sign::Positive
        };
        Self::from_literal(sign, &digits, radix)
    }

    /// Renders this value in the given radix, using uppercase letters for digits above 9
    pub fn to_string_radix(&self, radix: u32) -> Result<String, InvalidRadixError> {
        let radix = validate_radix(radix)?;
        if radix == 10 {
            return Ok(self.to_string());
        }
        Ok(self.widen().to_str_radix(radix).to_ascii_uppercase())
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Small(int) => fmt::Display::fmt(int, f),
            Self::Big(int) => fmt::Display::fmt(int, f),
        }
    }
}

impl FromStr for Int {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string_radix(s, 10)
    }
}

impl Hash for Int {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.to_i64() {
            Some(i) => i.hash(state),
            None => self.widen().hash(state),
        }
    }
}

impl Eq for Int {}
impl PartialEq for Int {
    fn eq(&self, rhs: &Int) -> bool {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.eq(rhs),
            (Self::Small(lhs), Self::Big(rhs)) | (Self::Big(rhs), Self::Small(lhs)) => {
                rhs.to_i64().map(|i| i == *lhs).unwrap_or(false)
            }
            (Self::Big(lhs), Self::Big(rhs)) => lhs.eq(rhs),
        }
    }
}
impl PartialEq<i64> for Int {
    fn eq(&self, rhs: &i64) -> bool {
        self.to_i64().map(|i| i == *rhs).unwrap_or(false)
    }
}
impl PartialEq<Int> for i64 {
    fn eq(&self, rhs: &Int) -> bool {
        rhs.eq(self)
    }
}

impl Ord for Int {
    fn cmp(&self, rhs: &Self) -> Ordering {
        match (self, rhs) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => lhs.widen().cmp(&rhs.widen()),
        }
    }
}
impl PartialOrd for Int {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Add<&Int> for &Int {
    type Output = Int;

    fn add(self, rhs: &Int) -> Self::Output {
        match (self, rhs) {
            (Int::Small(lhs), Int::Small(rhs)) => match lhs.checked_add(*rhs) {
                Some(i) => Int::new(i),
                None => Int::from(BigInt::from(*lhs) + *rhs),
            },
            (lhs, rhs) => Int::from(&*lhs.widen() + &*rhs.widen()),
        }
    }
}
impl Add for Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}
impl Add<i64> for Int {
    type Output = Int;

    fn add(self, rhs: i64) -> Self::Output {
        (&self).add(&Int::new(rhs))
    }
}

impl Sub<&Int> for &Int {
    type Output = Int;

    fn sub(self, rhs: &Int) -> Self::Output {
        match (self, rhs) {
            (Int::Small(lhs), Int::Small(rhs)) => match lhs.checked_sub(*rhs) {
                Some(i) => Int::new(i),
                None => Int::from(BigInt::from(*lhs) - *rhs),
            },
            (lhs, rhs) => Int::from(&*lhs.widen() - &*rhs.widen()),
        }
    }
}
impl Sub for Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}
impl Sub<i64> for Int {
    type Output = Int;

    fn sub(self, rhs: i64) -> Self::Output {
        (&self).sub(&Int::new(rhs))
    }
}

impl Mul<&Int> for &Int {
    type Output = Int;

    fn mul(self, rhs: &Int) -> Self::Output {
        match (self, rhs) {
            (Int::Small(lhs), Int::Small(rhs)) => match lhs.checked_mul(*rhs) {
                Some(i) => Int::new(i),
                None => Int::from(BigInt::from(*lhs) * *rhs),
            },
            (lhs, rhs) => Int::from(&*lhs.widen() * &*rhs.widen()),
        }
    }
}
impl Mul for Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}
impl Mul<i64> for Int {
    type Output = Int;

    fn mul(self, rhs: i64) -> Self::Output {
        (&self).mul(&Int::new(rhs))
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        match self {
            // MIN_SMALL has no immediate negation, `new` promotes it
            Int::Small(i) => match i.checked_neg() {
                Some(neg) => Int::new(neg),
                None => Int::from(-BigInt::from(*i)),
            },
            Int::Big(i) => Int::from(-i),
        }
    }
}
impl Neg for Int {
    type Output = Int;

    fn neg(self) -> Self::Output {
        (&self).neg()
    }
}

impl From<i8> for Int {
    #[inline(always)]
    fn from(i: i8) -> Self {
        Self::Small(i.into())
    }
}
impl From<i16> for Int {
    #[inline(always)]
    fn from(i: i16) -> Self {
        Self::Small(i.into())
    }
}
impl From<i32> for Int {
    #[inline(always)]
    fn from(i: i32) -> Self {
        Self::Small(i.into())
    }
}
impl From<u8> for Int {
    #[inline(always)]
    fn from(i: u8) -> Self {
        Self::Small(i.into())
    }
}
impl From<u32> for Int {
    #[inline(always)]
    fn from(i: u32) -> Self {
        Self::Small(i.into())
    }
}
impl From<i64> for Int {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::new(i)
    }
}
impl From<u64> for Int {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(i.into()),
        }
    }
}
impl From<usize> for Int {
    fn from(i: usize) -> Self {
        Self::from(i as u64)
    }
}
impl From<i128> for Int {
    fn from(i: i128) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::new(i),
            Err(_) => Self::Big(i.into()),
        }
    }
}
impl From<BigInt> for Int {
    /// Demotes `i` to an immediate when it fits
    #[inline]
    fn from(i: BigInt) -> Self {
        match i.to_i64() {
            Some(n) if Self::is_small(n) => {
                trace!("demoting big integer {} to small integer", n);
                Self::Small(n)
            }
            Some(_) | None => Self::Big(i),
        }
    }
}
impl TryFrom<Int> for i64 {
    type Error = Int;

    fn try_from(i: Int) -> Result<Self, Self::Error> {
        i.to_i64().ok_or(i)
    }
}
