//! Errors raised by builtins.
//!
//! Builtins reject operands of the wrong type before computing anything, and report which
//! builtin was called, what it expected and the tag of what it got. The caller decides how to
//! surface the error; [`BifError::reason`] gives the exit reason the runtime raises for it.
use std::fmt;

use log::debug;
use thiserror::Error;

use crate::term::{atoms, Atom, Tag, Value};

/// The kind of operand a builtin expected
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    /// An integer in `2..=36`
    Radix,
}
impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::Radix => f.write_str("radix"),
        }
    }
}

/// Identifies the builtin that raised an error
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Band,
    Bor,
    Bxor,
    Bnot,
    Bsl,
    Bsr,
    Add,
    Sub,
    Mul,
    Neg,
    IntegerToList,
    IntegerToListRadix,
}
impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Band => "band",
            Self::Bor => "bor",
            Self::Bxor => "bxor",
            Self::Bnot => "bnot",
            Self::Bsl => "bsl",
            Self::Bsr => "bsr",
            Self::Add => "+",
            Self::Sub | Self::Neg => "-",
            Self::Mul => "*",
            Self::IntegerToList | Self::IntegerToListRadix => "integer_to_list",
        }
    }

    pub fn arity(self) -> u8 {
        match self {
            Self::Bnot | Self::Neg | Self::IntegerToList => 1,
            _ => 2,
        }
    }

    /// Returns true for the arithmetic operators, which fail with `badarith`
    pub fn is_arithmetic(self) -> bool {
        !matches!(self, Self::IntegerToList | Self::IntegerToListRadix)
    }
}
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity())
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BifError {
    #[error("{operation}: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: Category,
        actual: Tag,
        operation: Operation,
    },
    #[error("{operation}: result would exceed the system limit")]
    SystemLimit { operation: Operation },
}
impl BifError {
    /// Rejects `value` as an operand of `operation`
    pub fn type_mismatch(expected: Category, value: &Value, operation: Operation) -> Self {
        let actual = value.tag();
        debug!(
            "{} rejected operand {}: expected {}, got {}",
            operation, value, expected, actual
        );
        Self::TypeMismatch {
            expected,
            actual,
            operation,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::TypeMismatch { operation, .. } | Self::SystemLimit { operation } => *operation,
        }
    }

    /// The exit reason raised for this error
    pub fn reason(&self) -> Atom {
        match self {
            Self::TypeMismatch { operation, .. } if operation.is_arithmetic() => atoms::Badarith,
            Self::TypeMismatch { .. } => atoms::Badarg,
            Self::SystemLimit { .. } => atoms::SystemLimit,
        }
    }
}

pub type BifResult = Result<Value, BifError>;
