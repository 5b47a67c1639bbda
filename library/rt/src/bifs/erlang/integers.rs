//! Integer rendering.
use ember_number::Int;

use crate::error::{BifError, BifResult, Category, Operation};
use crate::term::Value;

use super::integer;

/// `integer_to_list/1`
///
/// Returns the decimal digits of `integer` as a list of character codes, with a leading `-`
/// for negative values.
pub fn integer_to_list(integer_term: &Value) -> BifResult {
    let integer = integer(integer_term, Operation::IntegerToList)?;
    Ok(Value::charlist(&integer.to_string()))
}

/// `integer_to_list/2`
///
/// Like `integer_to_list/1`, in any radix from 2 to 36, using uppercase letters for digits
/// above 9.
pub fn integer_to_list_radix(integer_term: &Value, radix_term: &Value) -> BifResult {
    let integer = integer(integer_term, Operation::IntegerToListRadix)?;
    let radix = radix(radix_term)?;
    let digits = integer
        .to_string_radix(radix)
        .map_err(|_| bad_radix(radix_term))?;
    Ok(Value::charlist(&digits))
}

fn radix(radix_term: &Value) -> Result<u32, BifError> {
    match radix_term.to_int().as_ref().and_then(Int::to_i64) {
        Some(radix @ 2..=36) => Ok(radix as u32),
        _ => Err(bad_radix(radix_term)),
    }
}

fn bad_radix(radix_term: &Value) -> BifError {
    BifError::type_mismatch(Category::Radix, radix_term, Operation::IntegerToListRadix)
}
