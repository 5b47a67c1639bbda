use std::fmt;

/// A reference, `#Reference<0.number>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reference(u64);
impl Reference {
    #[inline]
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    #[inline]
    pub fn number(&self) -> u64 {
        self.0
    }
}
impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#Reference<0.{}>", self.0)
    }
}
