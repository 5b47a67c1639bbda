//! The numeric substrate of the runtime.
//!
//! Integers are represented by [`Int`], which is either an immediate (`Small`) value that fits
//! in the bits left over after tagging a term word, or an arbitrary-precision (`Big`) value. Every
//! operation in this crate returns a normalized [`Int`]: a value is `Small` whenever it fits
//! the immediate range, and `Big` only when it does not.
mod bitwise;
mod float;
mod integer;
mod store;

pub use self::bitwise::MAX_INTEGER_BITS;
pub use self::float::{Float, FloatError};
pub use self::integer::{Int, SMALL_INTEGER_BITS};
pub use self::store::Sign;

pub use num_bigint as bigint;
pub use num_bigint::BigInt;
pub use num_traits::{One, Signed, ToPrimitive, Zero};

use thiserror::Error;

/// Produced when an operation would build an integer wider than [`MAX_INTEGER_BITS`]
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("integer would exceed the maximum of {} bits", MAX_INTEGER_BITS)]
pub struct SystemLimitError;

/// Produced when a radix outside of `2..=36` is requested
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid radix {0}, expected a value between 2 and 36")]
pub struct InvalidRadixError(pub u32);

/// Produced when constructing an integer from a literal digit sequence fails
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseIntError {
    #[error(transparent)]
    InvalidRadix(#[from] InvalidRadixError),
    #[error("invalid digit {digit} for radix {radix}")]
    InvalidDigit { digit: u32, radix: u32 },
    #[error("cannot build an integer from an empty digit sequence")]
    Empty,
}

pub(crate) fn validate_radix(radix: u32) -> Result<u32, InvalidRadixError> {
    if (2..=36).contains(&radix) {
        Ok(radix)
    } else {
        Err(InvalidRadixError(radix))
    }
}
