use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::num::FpCategory;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use thiserror::Error;

use crate::Int;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FloatError {
    #[error("NaN is not a valid float value")]
    Nan,
    #[error("infinity is not a valid float value")]
    Infinite,
    #[error("could not parse string as float")]
    ParseFailed,
}
impl FloatError {
    pub fn from_category(category: FpCategory) -> Result<(), Self> {
        match category {
            FpCategory::Nan => Err(FloatError::Nan),
            FpCategory::Infinite => Err(FloatError::Infinite),
            _ => Ok(()),
        }
    }
}

/// A wrapper around an f64 value that ensures the value is a valid runtime float, i.e. it
/// is neither NaN nor +/- infinity.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Float(f64);
impl Float {
    pub fn new(float: f64) -> Result<Float, FloatError> {
        FloatError::from_category(float.classify())?;
        // -0.0 and 0.0 are the same value
        if float == 0.0 {
            return Ok(Float(0.0));
        }
        Ok(Float(float))
    }

    #[inline(always)]
    pub fn inner(&self) -> f64 {
        self.0
    }

    /// Obtain this floating-point value as a raw 64-bit value
    #[inline(always)]
    pub fn raw(&self) -> u64 {
        self.0.to_bits()
    }

    pub fn is_zero(&self) -> bool {
        self.0.classify() == FpCategory::Zero
    }

    /// Truncates this float towards zero, producing a normalized integer
    pub fn to_integer(&self) -> Int {
        let truncated = self.0.trunc();
        if truncated.abs() <= Int::MAX_SMALL as f64 {
            return Int::new(truncated as i64);
        }
        // Finite floats always convert exactly once truncated
        BigInt::from_f64(truncated)
            .map(Int::from)
            .unwrap_or_else(|| Int::new(0))
    }
}
impl TryFrom<f64> for Float {
    type Error = FloatError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Self::new(f)
    }
}
impl From<Float> for f64 {
    #[inline(always)]
    fn from(f: Float) -> Self {
        f.0
    }
}
impl FromStr for Float {
    type Err = FloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<f64>() {
            Ok(f) => Self::new(f),
            Err(_) => Err(FloatError::ParseFailed),
        }
    }
}
impl fmt::Debug for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Always render a fractional part, `1.0` not `1`
        write!(f, "{:?}", self.0)
    }
}
impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state)
    }
}
impl Eq for Float {}
impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
impl PartialOrd for Float {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
