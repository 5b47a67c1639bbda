use std::cmp::Ordering;
use std::fmt;

use super::{Atom, Value};

/// This struct unifies function captures and closures under a single type.
///
/// It holds the metadata needed to answer questions like what is the arity, what module was it
/// defined in, etc. A function capture (`fun m:f/a`) has an empty environment; a closure
/// additionally owns the values it closed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub module: Atom,
    pub name: Atom,
    pub arity: u8,
    env: Box<[Value]>,
}
impl Function {
    /// Creates a capture of the exported function `module:name/arity`
    pub fn new(module: Atom, name: Atom, arity: u8) -> Self {
        Self {
            module,
            name,
            arity,
            env: Box::default(),
        }
    }

    /// Creates a closure over `env`
    pub fn with_env(module: Atom, name: Atom, arity: u8, env: Vec<Value>) -> Self {
        Self {
            module,
            name,
            arity,
            env: env.into_boxed_slice(),
        }
    }

    /// Returns true if this is a function capture, i.e. it has no free variables.
    #[inline]
    pub fn is_thin(&self) -> bool {
        self.env.is_empty()
    }

    #[inline]
    pub fn env(&self) -> &[Value] {
        &self.env
    }
}
/// Functions order by module, name, arity and then environment size; closures that differ
/// only in the contents of their environments are unordered.
impl PartialOrd for Function {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ordering = self
            .module
            .cmp(&other.module)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.arity.cmp(&other.arity))
            .then_with(|| self.env.len().cmp(&other.env.len()));
        match ordering {
            Ordering::Equal if self.env != other.env => None,
            ordering => Some(ordering),
        }
    }
}
impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_thin() {
            write!(f, "fun {}:{}/{}", self.module, self.name, self.arity)
        } else {
            write!(f, "#Fun<{}.{}.{}>", self.module, self.name, self.arity)
        }
    }
}
