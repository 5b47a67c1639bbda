
use ember_number::{BigInt, Int, One};
use pretty_assertions::assert_eq;
use proptest::prop_assert_eq;
use proptest::strategy::BoxedStrategy;

use crate::error::{BifError, Category, Operation};
use crate::term::{Tag, Value};
use crate::test::{run, strategy};

use super::*;

fn two_pow(exponent: usize) -> Value {
    Value::from(Int::from(BigInt::one() << exponent))
}

/// Checks every binary operator against the same operation on `BigInt`, which is the
/// reference semantics for both representations
fn with_integer_right_matches_big_int(
    source_file: &'static str,
    left_strategy: fn() -> BoxedStrategy<Value>,
) {
    run(
        source_file,
        (left_strategy(), strategy::term::is_integer()),
        |(left, right)| {
            let l = left.to_int().unwrap().to_bigint();
            let r = right.to_int().unwrap().to_bigint();
            prop_assert_eq!(band(&left, &right), Ok(Value::from(Int::from(&l & &r))));
            prop_assert_eq!(bor(&left, &right), Ok(Value::from(Int::from(&l | &r))));
            prop_assert_eq!(bxor(&left, &right), Ok(Value::from(Int::from(&l ^ &r))));
            Ok(())
        },
    );
}

/// Checks that non-integer right operands are rejected, naming the right operand's tag
fn without_integer_right_errors_type_mismatch(
    source_file: &'static str,
    left_strategy: fn() -> BoxedStrategy<Value>,
) {
    run(
        source_file,
        (left_strategy(), strategy::term::is_not_integer()),
        |(left, right)| {
            let expected = |operation: Operation| -> BifResult {
                Err(BifError::TypeMismatch {
                    expected: Category::Integer,
                    actual: right.tag(),
                    operation,
                })
            };
            prop_assert_eq!(band(&left, &right), expected(Operation::Band));
            prop_assert_eq!(bor(&left, &right), expected(Operation::Bor));
            prop_assert_eq!(bxor(&left, &right), expected(Operation::Bxor));
            prop_assert_eq!(bsl(&left, &right), expected(Operation::Bsl));
            prop_assert_eq!(bsr(&left, &right), expected(Operation::Bsr));
            Ok(())
        },
    );
}

#[test]
fn without_integer_left_errors_type_mismatch() {
    run(
        file!(),
        (strategy::term::is_not_integer(), strategy::term()),
        |(left, right)| {
            prop_assert_eq!(
                band(&left, &right),
                Err(BifError::TypeMismatch {
                    expected: Category::Integer,
                    actual: left.tag(),
                    operation: Operation::Band,
                })
            );
            prop_assert_eq!(
                bnot(&left).map_err(|err| err.operation()),
                Err(Operation::Bnot)
            );
            Ok(())
        },
    );
}

#[test]
fn with_atom_left_names_atom() {
    let left = Value::from(crate::term::Atom::try_from_str("left").unwrap());
    let result = band(&left, &Value::small_integer(1));
    assert_eq!(
        result,
        Err(BifError::TypeMismatch {
            expected: Category::Integer,
            actual: Tag::Atom,
            operation: Operation::Band,
        })
    );
}

#[test]
fn with_negative_one_band_is_identity() {
    run(file!(), strategy::term::is_integer(), |integer| {
        let negative_one = Value::small_integer(-1);
        prop_assert_eq!(band(&negative_one, &integer), Ok(integer.clone()));
        prop_assert_eq!(band(&integer, &negative_one), Ok(integer.clone()));
        Ok(())
    });
}

#[test]
fn bnot_is_negated_predecessor() {
    run(file!(), strategy::term::is_integer(), |integer| {
        let int = integer.to_int().unwrap();
        prop_assert_eq!(bnot(&integer), Ok(Value::from(-int - 1)));
        Ok(())
    });
}
