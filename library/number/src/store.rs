//! The sign + digit-sequence view of an integer.
//!
//! Big integers are stored as a sign and a sequence of base-2^32 digits, least significant
//! digit first, with no most-significant zero digits. Zero is the empty sequence with sign
//! [`Sign::Zero`]. These functions convert between that view and [`Int`], normalizing on the
//! way in so that a digit sequence small enough to be an immediate never produces `Int::Big`.
use std::cmp::Ordering;

use num_bigint::{self as bigint, BigInt};

use crate::{validate_radix, Int, ParseIntError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}
impl From<bigint::Sign> for Sign {
    fn from(sign: bigint::Sign) -> Self {
        match sign {
            bigint::Sign::Minus => Self::Negative,
            bigint::Sign::NoSign => Self::Zero,
            bigint::Sign::Plus => Self::Positive,
        }
    }
}
impl From<Sign> for bigint::Sign {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => Self::Minus,
            Sign::Zero => Self::NoSign,
            Sign::Positive => Self::Plus,
        }
    }
}

impl Int {
    /// Builds an integer from a sign and little-endian base-2^32 digits.
    ///
    /// Most-significant zero digits are stripped. A zero magnitude is zero whatever the sign,
    /// and `Sign::Zero` with a non-zero magnitude is treated as positive.
    pub fn from_digits(sign: Sign, digits: &[u32]) -> Self {
        let sign = match sign {
            Sign::Zero => Sign::Positive,
            sign => sign,
        };
        Self::from(BigInt::from_slice(sign.into(), digits))
    }

    /// Builds an integer from literal digits as a lexer produces them: most significant first,
    /// one digit value (not character) per element, in the given radix.
    pub fn from_literal(sign: Sign, digits: &[u8], radix: u32) -> Result<Self, ParseIntError> {
        let radix = validate_radix(radix)?;
        if digits.is_empty() {
            return Err(ParseIntError::Empty);
        }
        if let Some(digit) = digits.iter().find(|d| u32::from(**d) >= radix) {
            return Err(ParseIntError::InvalidDigit {
                digit: u32::from(*digit),
                radix,
            });
        }
        let sign = match sign {
            Sign::Negative => bigint::Sign::Minus,
            _ => bigint::Sign::Plus,
        };
        // Every digit has been validated against the radix
        let i = BigInt::from_radix_be(sign, digits, radix).ok_or(ParseIntError::Empty)?;
        Ok(Self::from(i))
    }

    pub fn sign(&self) -> Sign {
        match self {
            Self::Small(i) => match i.cmp(&0) {
                Ordering::Less => Sign::Negative,
                Ordering::Equal => Sign::Zero,
                Ordering::Greater => Sign::Positive,
            },
            Self::Big(i) => i.sign().into(),
        }
    }

    /// Returns the sign and magnitude of this value as little-endian base-2^32 digits
    pub fn to_digits(&self) -> (Sign, Vec<u32>) {
        let (sign, digits) = self.widen().to_u32_digits();
        (sign.into(), digits)
    }

    /// Compares magnitudes only: by digit count, then from the most significant digit down
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Small(lhs), Self::Small(rhs)) => lhs.unsigned_abs().cmp(&rhs.unsigned_abs()),
            (lhs, rhs) => {
                let (_, lhs) = lhs.to_digits();
                let (_, rhs) = rhs.to_digits();
                lhs.len()
                    .cmp(&rhs.len())
                    .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
            }
        }
    }
}
