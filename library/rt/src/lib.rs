//! The runtime term model.
//!
//! Every runtime value is a [`term::Value`], a closed sum type whose variant is its type tag.
//! Integers are split between an immediate [`term::SmallInteger`] and an arbitrary-precision
//! [`term::BigInteger`]; conversions from [`ember_number::Int`] are the only way to build either
//! one, which keeps the representation canonical. The builtins in [`bifs`] classify values and
//! perform integer arithmetic on them, returning new values and never mutating their operands.
pub mod bifs;
pub mod error;
pub mod term;

#[cfg(test)]
mod test;

pub use self::error::{BifError, BifResult, Category, Operation};
pub use self::term::{Tag, Value};
