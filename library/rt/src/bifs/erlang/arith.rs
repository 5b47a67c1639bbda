//! Integer arithmetic operators.
//!
//! Results that overflow the immediate range are computed as big integers, and big results
//! small enough to be immediates are demoted.
use crate::error::{BifResult, Operation};
use crate::term::Value;

use super::{integer, integers};

/// `+/2` infix operator.
pub fn add(augend: &Value, addend: &Value) -> BifResult {
    let (augend, addend) = integers(augend, addend, Operation::Add)?;
    Ok((&augend + &addend).into())
}

/// `-/2` infix operator.
pub fn sub(minuend: &Value, subtrahend: &Value) -> BifResult {
    let (minuend, subtrahend) = integers(minuend, subtrahend, Operation::Sub)?;
    Ok((&minuend - &subtrahend).into())
}

/// `*/2` infix operator.
pub fn mul(multiplier: &Value, multiplicand: &Value) -> BifResult {
    let (multiplier, multiplicand) = integers(multiplier, multiplicand, Operation::Mul)?;
    Ok((&multiplier * &multiplicand).into())
}

/// `-/1` prefix operator.
pub fn neg(number: &Value) -> BifResult {
    let number = integer(number, Operation::Neg)?;
    Ok((-number).into())
}
