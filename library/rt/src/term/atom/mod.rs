mod table;

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ptr;

use thiserror::Error;

/// The maximum length of an atom, in characters
pub const MAX_ATOM_LENGTH: usize = 255;

/// Produced by operations which create atoms
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AtomError {
    #[error("invalid atom, length is {0}, maximum length is {}", MAX_ATOM_LENGTH)]
    InvalidLength(usize),
    #[error("tried to convert to an atom that doesn't exist")]
    NonExistent,
}

/// An atom is an interned string value with fast equality comparison, and only requires
/// allocation once over the lifetime of the program.
///
/// Atoms built through the table share their name storage, so equality is usually decided by
/// comparing pointers; the constants below are not in the table and fall back to comparing names.
#[derive(Copy, Clone)]
pub struct Atom(&'static str);
impl Atom {
    pub const FALSE: Atom = Atom("false");
    pub const TRUE: Atom = Atom("true");

    /// Creates a new atom from a `str`, inserting it into the atom table if needed.
    ///
    /// Returns `Err` if the name is too long
    pub fn try_from_str<S: AsRef<str>>(s: S) -> Result<Self, AtomError> {
        let name = s.as_ref();
        Self::validate(name)?;
        Ok(Self(table::get_or_insert(name)))
    }

    /// Like `try_from_str`, but requires that the atom already exists
    pub fn try_from_str_existing<S: AsRef<str>>(s: S) -> Result<Self, AtomError> {
        let name = s.as_ref();
        Self::validate(name)?;
        table::get(name)
            .map(Self)
            .ok_or(AtomError::NonExistent)
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Returns true if this atom is `true` or `false`
    #[inline]
    pub fn is_boolean(&self) -> bool {
        *self == Self::TRUE || *self == Self::FALSE
    }

    fn validate(name: &str) -> Result<(), AtomError> {
        let len = name.chars().count();
        if len > MAX_ATOM_LENGTH {
            return Err(AtomError::InvalidLength(len));
        }
        Ok(())
    }

    /// Returns true if this atom has to be quoted to be read back
    fn needs_quotes(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => {
                !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
            }
            _ => true,
        }
    }
}
impl From<bool> for Atom {
    #[inline]
    fn from(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}
impl Eq for Atom {}
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0) || self.0 == other.0
    }
}
impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(other.0)
    }
}
impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Atom({})", self)
    }
}
impl Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.needs_quotes() {
            return f.write_str(self.0);
        }
        f.write_str("'")?;
        for c in self.0.chars() {
            match c {
                '\'' => f.write_str("\\'")?,
                '\\' => f.write_str("\\\\")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("'")
    }
}

/// Atoms the runtime itself refers to
#[allow(non_upper_case_globals)]
pub mod atoms {
    use super::Atom;

    pub const Badarg: Atom = Atom("badarg");
    pub const Badarith: Atom = Atom("badarith");
    pub const SystemLimit: Atom = Atom("system_limit");
    pub const Erlang: Atom = Atom("erlang");
    pub const Ember: Atom = Atom("ember");
}
