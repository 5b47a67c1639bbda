//! Builtins of the `erlang` module.
mod arith;
mod bitwise;
mod integers;
mod types;

pub use self::arith::{add, mul, neg, sub};
pub use self::bitwise::{band, bnot, bor, bsl, bsr, bxor};
pub use self::integers::{integer_to_list, integer_to_list_radix};
pub use self::types::*;

use ember_number::Int;

use crate::error::{BifError, Category, Operation};
use crate::term::Value;

/// Extracts the integer an operand of `operation` holds, rejecting anything else
fn integer(value: &Value, operation: Operation) -> Result<Int, BifError> {
    value
        .to_int()
        .ok_or_else(|| BifError::type_mismatch(Category::Integer, value, operation))
}

/// Like `integer`, for both operands of an infix operator, checking the left one first
fn integers(left: &Value, right: &Value, operation: Operation) -> Result<(Int, Int), BifError> {
    let left = integer(left, operation)?;
    let right = integer(right, operation)?;
    Ok((left, right))
}
