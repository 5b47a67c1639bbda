//! Builtins of the `ember` module.
//!
//! These expose the representation of values, which the `erlang` module deliberately hides.
use crate::error::BifResult;
use crate::term::Value;

/// Returns `true` if `term` is an integer held inline in the value
pub fn is_small_integer(term: &Value) -> BifResult {
    Ok(term.is_small_integer().into())
}

/// Returns `true` if `term` is an integer too large to be held inline
pub fn is_big_integer(term: &Value) -> BifResult {
    Ok(term.is_big_integer().into())
}

/// Returns `true` if `term` is the empty list
pub fn is_nil(term: &Value) -> BifResult {
    Ok(term.is_nil().into())
}
