//! Type tests.
//!
//! These are total: every value is a valid argument and the result is always `true` or
//! `false`.
use crate::error::BifResult;
use crate::term::Value;

macro_rules! type_test {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub fn $name(term: &Value) -> BifResult {
            Ok(term.$name().into())
        }
    };
}

type_test!(is_atom);
type_test!(is_binary);
type_test!(
    /// `true` or `false`
    is_boolean
);
type_test!(is_float);
type_test!(is_function);
type_test!(
    /// Small or big
    is_integer
);
type_test!(
    /// A list cell; the empty list `[]` is not one
    is_list
);
type_test!(is_map);
type_test!(
    /// An integer or a float
    is_number
);
type_test!(is_pid);
type_test!(is_reference);
type_test!(is_tuple);
