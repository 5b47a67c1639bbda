use std::fmt;
use std::ops::Deref;

/// This represents binary data, i.e. byte-aligned, with a number of bits
/// divisible by 8 evenly.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Binary(Box<[u8]>);
impl Binary {
    /// Constructs a binary holding the UTF-8 encoding of `s`
    pub fn from_utf8_str(s: &str) -> Self {
        Self(s.as_bytes().into())
    }

    /// Returns the size in bytes of the underlying data
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the data as a `str`, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns true if this binary renders as a string literal
    fn is_printable(&self) -> bool {
        match self.as_str() {
            Some(s) => {
                !s.is_empty() && s.chars().all(|c| !c.is_control() || c == '\n' || c == '\t')
            }
            None => false,
        }
    }
}
impl Deref for Binary {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}
impl From<Vec<u8>> for Binary {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}
impl From<&[u8]> for Binary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}
impl fmt::Debug for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("<<")?;
        match self.as_str() {
            Some(s) if self.is_printable() => write!(f, "{:?}", s)?,
            _ => {
                for (i, byte) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", byte)?;
                }
            }
        }
        f.write_str(">>")
    }
}
