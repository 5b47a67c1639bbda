use std::ops::RangeInclusive;

use proptest::collection::SizeRange;
use proptest::strategy::BoxedStrategy;

use crate::term::Value;

pub mod term;

pub const NON_EXISTENT_ATOM_PREFIX: &str = "non_existent";

pub fn size_range() -> SizeRange {
    RANGE_INCLUSIVE.clone().into()
}

/// Any value, including nested containers
pub fn term() -> BoxedStrategy<Value> {
    term::value()
}

const RANGE_INCLUSIVE: RangeInclusive<usize> = 0..=3;
