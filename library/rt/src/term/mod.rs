mod atom;
mod binary;
mod closure;
mod integer;
mod list;
mod map;
mod pid;
mod reference;
mod tuple;

pub use self::atom::{atoms, Atom, AtomError, MAX_ATOM_LENGTH};
pub use self::binary::Binary;
pub use self::closure::Function;
pub use self::integer::{BigInteger, SmallInteger};
pub use self::list::{Cons, ImproperList};
pub use self::map::Map;
pub use self::pid::{OutOfRange, Pid};
pub use self::reference::Reference;
pub use self::tuple::Tuple;

pub use ember_number::{Float, FloatError, Int, ParseIntError, Sign};

use std::fmt;

use static_assertions::assert_impl_all;

assert_impl_all!(Value: Send, Sync, Clone);

/// Identifies the variant a [`Value`] holds.
///
/// Every value has exactly one tag, and the tag is the only thing classification looks at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
    Atom,
    SmallInteger,
    BigInteger,
    Float,
    Function,
    List,
    Map,
    Nil,
    Pid,
    Reference,
    Tuple,
    Binary,
}
impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Atom,
        Tag::SmallInteger,
        Tag::BigInteger,
        Tag::Float,
        Tag::Function,
        Tag::List,
        Tag::Map,
        Tag::Nil,
        Tag::Pid,
        Tag::Reference,
        Tag::Tuple,
        Tag::Binary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::SmallInteger => "small_integer",
            Self::BigInteger => "big_integer",
            Self::Float => "float",
            Self::Function => "function",
            Self::List => "list",
            Self::Map => "map",
            Self::Nil => "nil",
            Self::Pid => "pid",
            Self::Reference => "reference",
            Self::Tuple => "tuple",
            Self::Binary => "binary",
        }
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::SmallInteger | Self::BigInteger)
    }
}
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runtime value.
///
/// Values are immutable once built and own everything they refer to. Integers are always
/// canonical: a `BigInteger` never holds a value that fits the immediate range, which is
/// enforced by the integer wrapper types only being constructible through normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Atom(Atom),
    SmallInteger(SmallInteger),
    BigInteger(BigInteger),
    Float(Float),
    Function(Function),
    List(Box<Cons>),
    Map(Map),
    Nil,
    Pid(Pid),
    Reference(Reference),
    Tuple(Tuple),
    Binary(Binary),
}
impl Value {
    /// Builds an integer value from a machine integer.
    ///
    /// Values outside the immediate range are promoted, so the result is only a
    /// `SmallInteger` when `i` fits.
    pub fn small_integer(i: i64) -> Self {
        Int::new(i).into()
    }

    /// Builds an integer value from a sign and little-endian base-2^32 digits, demoting the
    /// result to a `SmallInteger` when the magnitude permits
    pub fn big_integer(sign: Sign, digits: &[u32]) -> Self {
        Int::from_digits(sign, digits).into()
    }

    /// Builds an integer value from the digit values of a literal, most significant first
    pub fn integer_from_literal(
        sign: Sign,
        digits: &[u8],
        radix: u32,
    ) -> Result<Self, ParseIntError> {
        Int::from_literal(sign, digits, radix).map(Self::from)
    }

    /// Builds a proper list from the given elements, or `Nil` if there are none
    pub fn list_from_slice(elements: &[Value]) -> Self {
        Self::list_from_iter(elements.iter().cloned())
    }

    pub fn list_from_iter<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        elements
            .into_iter()
            .rev()
            .fold(Self::Nil, |tail, head| Self::cons(head, tail))
    }

    /// Builds a list of character codes
    pub fn charlist(s: &str) -> Self {
        let chars: Vec<Value> = s
            .chars()
            .map(|c| Self::small_integer(i64::from(u32::from(c))))
            .collect();
        Self::list_from_iter(chars)
    }

    #[inline]
    pub fn cons(head: Value, tail: Value) -> Self {
        Self::List(Box::new(Cons::new(head, tail)))
    }

    pub fn tuple(elements: Vec<Value>) -> Self {
        Self::Tuple(Tuple::from(elements))
    }

    pub fn binary<B: Into<Vec<u8>>>(bytes: B) -> Self {
        Self::Binary(Binary::from(bytes.into()))
    }

    /// Returns the tag of this value
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Self::Atom(_) => Tag::Atom,
            Self::SmallInteger(_) => Tag::SmallInteger,
            Self::BigInteger(_) => Tag::BigInteger,
            Self::Float(_) => Tag::Float,
            Self::Function(_) => Tag::Function,
            Self::List(_) => Tag::List,
            Self::Map(_) => Tag::Map,
            Self::Nil => Tag::Nil,
            Self::Pid(_) => Tag::Pid,
            Self::Reference(_) => Tag::Reference,
            Self::Tuple(_) => Tag::Tuple,
            Self::Binary(_) => Tag::Binary,
        }
    }

    #[inline]
    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    #[inline]
    pub fn is_small_integer(&self) -> bool {
        matches!(self, Self::SmallInteger(_))
    }

    #[inline]
    pub fn is_big_integer(&self) -> bool {
        matches!(self, Self::BigInteger(_))
    }

    #[inline]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns true for a cons cell; the empty list is `Nil`
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[inline]
    pub fn is_pid(&self) -> bool {
        matches!(self, Self::Pid(_))
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    #[inline]
    pub fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(_))
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.tag().is_integer()
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_boolean(&self) -> bool {
        match self {
            Self::Atom(a) => a.is_boolean(),
            _ => false,
        }
    }

    /// Returns the integer this value holds, if it is one
    pub fn to_int(&self) -> Option<Int> {
        match self {
            Self::SmallInteger(i) => Some((*i).into()),
            Self::BigInteger(i) => Some(i.clone().into()),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<Atom> {
        match self {
            Self::Atom(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_cons(&self) -> Option<&Cons> {
        match self {
            Self::List(cons) => Some(cons),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Self::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Self::Binary(bin) => Some(bin),
            _ => None,
        }
    }
}
impl From<SmallInteger> for Value {
    fn from(i: SmallInteger) -> Self {
        Self::SmallInteger(i)
    }
}
impl From<BigInteger> for Value {
    fn from(i: BigInteger) -> Self {
        Self::BigInteger(i)
    }
}
impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Atom(b.into())
    }
}
impl From<Atom> for Value {
    #[inline]
    fn from(a: Atom) -> Self {
        Self::Atom(a)
    }
}
impl From<Float> for Value {
    #[inline]
    fn from(f: Float) -> Self {
        Self::Float(f)
    }
}
impl TryFrom<f64> for Value {
    type Error = FloatError;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        Float::new(f).map(Self::Float)
    }
}
impl From<Function> for Value {
    fn from(fun: Function) -> Self {
        Self::Function(fun)
    }
}
impl From<Cons> for Value {
    fn from(cons: Cons) -> Self {
        Self::List(Box::new(cons))
    }
}
impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}
impl From<Pid> for Value {
    fn from(pid: Pid) -> Self {
        Self::Pid(pid)
    }
}
impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}
impl From<Tuple> for Value {
    fn from(tuple: Tuple) -> Self {
        Self::Tuple(tuple)
    }
}
impl From<Binary> for Value {
    fn from(bin: Binary) -> Self {
        Self::Binary(bin)
    }
}
impl TryFrom<Value> for Int {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::SmallInteger(i) => Ok(i.into()),
            Value::BigInteger(i) => Ok(i.into()),
            other => Err(other),
        }
    }
}
impl TryFrom<Value> for bool {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Atom(a) if a == Atom::TRUE => Ok(true),
            Value::Atom(a) if a == Atom::FALSE => Ok(false),
            other => Err(other),
        }
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Atom(a) => fmt::Display::fmt(a, f),
            Self::SmallInteger(i) => fmt::Display::fmt(i, f),
            Self::BigInteger(i) => fmt::Display::fmt(i, f),
            Self::Float(x) => fmt::Display::fmt(x, f),
            Self::Function(fun) => fmt::Display::fmt(fun, f),
            Self::List(cons) => fmt::Display::fmt(cons, f),
            Self::Map(map) => fmt::Display::fmt(map, f),
            Self::Nil => f.write_str("[]"),
            Self::Pid(pid) => fmt::Display::fmt(pid, f),
            Self::Reference(r) => fmt::Display::fmt(r, f),
            Self::Tuple(tuple) => fmt::Display::fmt(tuple, f),
            Self::Binary(bin) => fmt::Display::fmt(bin, f),
        }
    }
}
