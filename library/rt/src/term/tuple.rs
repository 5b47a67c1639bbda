use std::fmt;
use std::ops::Deref;

use super::Value;

/// A fixed-size sequence of values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tuple(Box<[Value]>);
impl Tuple {
    /// Gets the size of this tuple
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this tuple has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at 0-based index `index`
    ///
    /// If the index is out of bounds, returns `None`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns a new tuple with the element at `index` replaced, or `None` if out of bounds
    pub fn with_element(&self, index: usize, value: Value) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut elements = self.0.to_vec();
        elements[index] = value;
        Some(Self(elements.into_boxed_slice()))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}
impl Deref for Tuple {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl From<Vec<Value>> for Tuple {
    fn from(elements: Vec<Value>) -> Self {
        Self(elements.into_boxed_slice())
    }
}
impl From<&[Value]> for Tuple {
    fn from(elements: &[Value]) -> Self {
        Self(elements.into())
    }
}
impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, element) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("}")
    }
}
