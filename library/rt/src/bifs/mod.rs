//! Builtin functions over values.
//!
//! Each builtin is a plain function in the module named after the Erlang module it belongs
//! to. [`lookup`] resolves a builtin by `module:function/arity` for callers that dispatch
//! dynamically, such as an interpreter.
pub mod ember;
pub mod erlang;

use std::fmt;

use hashbrown::HashMap;
use lazy_static::lazy_static;
use log::trace;

use crate::error::BifResult;
use crate::term::Value;

#[derive(Copy, Clone)]
enum Native {
    Unary(fn(&Value) -> BifResult),
    Binary(fn(&Value, &Value) -> BifResult),
}

/// A resolved builtin
#[derive(Copy, Clone)]
pub struct Bif {
    pub module: &'static str,
    pub function: &'static str,
    native: Native,
}
impl Bif {
    const fn unary(
        module: &'static str,
        function: &'static str,
        fun: fn(&Value) -> BifResult,
    ) -> Self {
        Self {
            module,
            function,
            native: Native::Unary(fun),
        }
    }

    const fn binary(
        module: &'static str,
        function: &'static str,
        fun: fn(&Value, &Value) -> BifResult,
    ) -> Self {
        Self {
            module,
            function,
            native: Native::Binary(fun),
        }
    }

    pub fn arity(&self) -> u8 {
        match self.native {
            Native::Unary(_) => 1,
            Native::Binary(_) => 2,
        }
    }

    /// Applies this builtin to `args`
    ///
    /// Returns `None` if the number of arguments does not match the arity
    pub fn apply(&self, args: &[Value]) -> Option<BifResult> {
        match (self.native, args) {
            (Native::Unary(fun), [arg]) => Some(fun(arg)),
            (Native::Binary(fun), [left, right]) => Some(fun(left, right)),
            _ => None,
        }
    }
}
impl fmt::Debug for Bif {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bif({})", self)
    }
}
impl fmt::Display for Bif {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}/{}", self.module, self.function, self.arity())
    }
}

const BIFS: &[Bif] = &[
    Bif::unary("erlang", "is_atom", erlang::is_atom),
    Bif::unary("erlang", "is_binary", erlang::is_binary),
    Bif::unary("erlang", "is_boolean", erlang::is_boolean),
    Bif::unary("erlang", "is_float", erlang::is_float),
    Bif::unary("erlang", "is_function", erlang::is_function),
    Bif::unary("erlang", "is_integer", erlang::is_integer),
    Bif::unary("erlang", "is_list", erlang::is_list),
    Bif::unary("erlang", "is_map", erlang::is_map),
    Bif::unary("erlang", "is_number", erlang::is_number),
    Bif::unary("erlang", "is_pid", erlang::is_pid),
    Bif::unary("erlang", "is_reference", erlang::is_reference),
    Bif::unary("erlang", "is_tuple", erlang::is_tuple),
    Bif::binary("erlang", "band", erlang::band),
    Bif::binary("erlang", "bor", erlang::bor),
    Bif::binary("erlang", "bxor", erlang::bxor),
    Bif::unary("erlang", "bnot", erlang::bnot),
    Bif::binary("erlang", "bsl", erlang::bsl),
    Bif::binary("erlang", "bsr", erlang::bsr),
    Bif::binary("erlang", "+", erlang::add),
    Bif::binary("erlang", "-", erlang::sub),
    Bif::binary("erlang", "*", erlang::mul),
    Bif::unary("erlang", "-", erlang::neg),
    Bif::unary("erlang", "integer_to_list", erlang::integer_to_list),
    Bif::binary("erlang", "integer_to_list", erlang::integer_to_list_radix),
    Bif::unary("ember", "is_small_integer", ember::is_small_integer),
    Bif::unary("ember", "is_big_integer", ember::is_big_integer),
    Bif::unary("ember", "is_nil", ember::is_nil),
];

lazy_static! {
    static ref REGISTRY: HashMap<String, Bif> =
        BIFS.iter().map(|bif| (bif.to_string(), *bif)).collect();
}

/// Resolves the builtin `module:function/arity`
pub fn lookup(module: &str, function: &str, arity: u8) -> Option<Bif> {
    let mfa = format!("{}:{}/{}", module, function, arity);
    let found = REGISTRY.get(&mfa).copied();
    trace!(
        "lookup of {} {}",
        mfa,
        if found.is_some() { "resolved" } else { "failed" }
    );
    found
}

/// Returns every builtin
pub fn all() -> impl Iterator<Item = Bif> {
    BIFS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::error::{BifError, Category, Operation};
    use crate::term::{Atom, Tag};

    #[test]
    fn builtins_are_unique() {
        assert_eq!(REGISTRY.len(), BIFS.len());
    }

    #[test]
    fn lookup_resolves_by_arity() {
        let band = lookup("erlang", "band", 2).unwrap();
        assert_eq!(band.to_string(), "erlang:band/2");
        assert!(lookup("erlang", "band", 1).is_none());
        assert!(lookup("ember", "band", 2).is_none());

        let neg = lookup("erlang", "-", 1).unwrap();
        let sub = lookup("erlang", "-", 2).unwrap();
        assert_eq!(neg.apply(&[Value::small_integer(3)]), Some(Ok(Value::small_integer(-3))));
        assert_eq!(
            sub.apply(&[Value::small_integer(3), Value::small_integer(5)]),
            Some(Ok(Value::small_integer(-2)))
        );
    }

    #[test]
    fn apply_checks_argument_count() {
        let bif = lookup("ember", "is_small_integer", 1).unwrap();
        assert_eq!(bif.apply(&[]), None);
        assert_eq!(bif.apply(&[Value::Nil, Value::Nil]), None);
        assert_eq!(bif.apply(&[Value::small_integer(1)]), Some(Ok(true.into())));
    }

    #[test]
    fn apply_propagates_errors() {
        let bif = lookup("erlang", "band", 2).unwrap();
        let atom = Atom::try_from_str("apply_propagates_errors").unwrap();
        assert_eq!(
            bif.apply(&[atom.into(), Value::small_integer(1)]),
            Some(Err(BifError::TypeMismatch {
                expected: Category::Integer,
                actual: Tag::Atom,
                operation: Operation::Band,
            }))
        );
    }

    #[test]
    fn every_classifier_is_registered() {
        let classifiers = all()
            .filter(|bif| bif.function.starts_with("is_"))
            .count();
        assert_eq!(classifiers, 15);
    }
}
