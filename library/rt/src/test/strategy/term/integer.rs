use proptest::arbitrary::any;
use proptest::collection::vec;
use proptest::prop_oneof;
use proptest::strategy::{BoxedStrategy, Just, Strategy};

use ember_number::{Int, Sign};

use crate::term::Value;

pub fn small() -> BoxedStrategy<Value> {
    (Int::MIN_SMALL..=Int::MAX_SMALL)
        .prop_map(Value::small_integer)
        .boxed()
}

pub fn big() -> BoxedStrategy<Value> {
    prop_oneof![
        // Just past the immediate range
        (i64::MIN..Int::MIN_SMALL).prop_map(Value::small_integer),
        ((Int::MAX_SMALL + 1)..=i64::MAX).prop_map(Value::small_integer),
        // Several digits wide
        (
            prop_oneof![Just(Sign::Negative), Just(Sign::Positive)],
            vec(any::<u32>(), 2..=6)
        )
            .prop_map(|(sign, digits)| Value::big_integer(sign, &digits))
            .prop_filter("Digits must not fit the immediate range", Value::is_big_integer),
    ]
    .boxed()
}

/// Shift amounts that keep results well within the maximum integer width
pub fn shift() -> BoxedStrategy<Value> {
    (0..=200i64).prop_map(Value::small_integer).boxed()
}
