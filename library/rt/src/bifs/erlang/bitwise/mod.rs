//! Bitwise operators.
//!
//! Integers behave as if stored in infinite two's complement, so a negative operand has
//! infinitely many leading set bits. Results are normalized like every other integer result.
#[cfg(test)]
mod test;

use ember_number::{Int, SystemLimitError};

use crate::error::{BifError, BifResult, Operation};
use crate::term::Value;

use super::{integer, integers};

/// `band/2` infix operator.
pub fn band(left_integer: &Value, right_integer: &Value) -> BifResult {
    let (left, right) = integers(left_integer, right_integer, Operation::Band)?;
    Ok(left.band(&right).into())
}

/// `bor/2` infix operator.
pub fn bor(left_integer: &Value, right_integer: &Value) -> BifResult {
    let (left, right) = integers(left_integer, right_integer, Operation::Bor)?;
    Ok(left.bor(&right).into())
}

/// `bxor/2` infix operator.
pub fn bxor(left_integer: &Value, right_integer: &Value) -> BifResult {
    let (left, right) = integers(left_integer, right_integer, Operation::Bxor)?;
    Ok(left.bxor(&right).into())
}

/// `bnot/1` prefix operator.
pub fn bnot(integer_term: &Value) -> BifResult {
    let integer = integer(integer_term, Operation::Bnot)?;
    Ok(integer.bnot().into())
}

/// `bsl/2` infix operator.
///
/// A negative shift shifts right.
pub fn bsl(integer_term: &Value, shift: &Value) -> BifResult {
    shift_by(integer_term, shift, Operation::Bsl, Int::bsl)
}

/// `bsr/2` infix operator.
///
/// Sign-extends: a negative integer shifted right far enough becomes `-1`. A negative shift
/// shifts left.
pub fn bsr(integer_term: &Value, shift: &Value) -> BifResult {
    shift_by(integer_term, shift, Operation::Bsr, Int::bsr)
}

fn shift_by(
    integer_term: &Value,
    shift: &Value,
    operation: Operation,
    shifter: fn(&Int, &Int) -> Result<Int, SystemLimitError>,
) -> BifResult {
    let (integer, shift) = integers(integer_term, shift, operation)?;
    shifter(&integer, &shift)
        .map(Value::from)
        .map_err(|SystemLimitError| BifError::SystemLimit { operation })
}
