use std::fmt;

use ember_number::{BigInt, Int, Sign};

use super::Value;

/// An integer in the immediate range, stored inline in its [`Value`](super::Value)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SmallInteger(i64);
impl SmallInteger {
    pub const MIN: i64 = Int::MIN_SMALL;
    pub const MAX: i64 = Int::MAX_SMALL;

    /// Returns `None` if `i` is outside of `MIN..=MAX`
    #[inline]
    pub fn new(i: i64) -> Option<Self> {
        if Int::is_small(i) {
            Some(Self(i))
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn get(self) -> i64 {
        self.0
    }
}
impl fmt::Display for SmallInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl From<SmallInteger> for i64 {
    #[inline(always)]
    fn from(i: SmallInteger) -> Self {
        i.0
    }
}

/// An integer too large to be a [`SmallInteger`], owning its digit storage.
///
/// There is no way to build one whose value fits the immediate range.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInteger(BigInt);
impl BigInteger {
    /// Returns `None` if `i` fits the immediate range
    pub fn new(i: BigInt) -> Option<Self> {
        match Int::from(i) {
            Int::Big(i) => Some(Self(i)),
            Int::Small(_) => None,
        }
    }

    pub fn sign(&self) -> Sign {
        self.0.sign().into()
    }

    /// The magnitude as little-endian base-2^32 digits, with no most-significant zero digits
    pub fn digits(&self) -> Vec<u32> {
        self.0.to_u32_digits().1
    }

    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// The fewest bits needed to express this value, not including the sign
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }
}
impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
impl From<Int> for Value {
    /// Normalizes `i`, so the variant chosen reflects only its mathematical value
    fn from(i: Int) -> Self {
        match i.normalize() {
            Int::Small(i) => Value::SmallInteger(SmallInteger(i)),
            Int::Big(i) => Value::BigInteger(BigInteger(i)),
        }
    }
}
impl From<BigInteger> for Int {
    fn from(i: BigInteger) -> Self {
        Int::Big(i.0)
    }
}
impl From<SmallInteger> for Int {
    fn from(i: SmallInteger) -> Self {
        Int::Small(i.0)
    }
}
