mod iter;

pub use self::iter::Iter;

use std::fmt;

use super::Value;

/// Represents the tail of an improper list
///
/// An improper list is a list which ends with any value other than `Nil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImproperList<'a> {
    pub tail: &'a Value,
}
impl fmt::Display for ImproperList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.tail, f)
    }
}

/// Represents a single element/cell in a linked list of cons cells.
///
/// Cloning, comparing and dropping walk the spine iteratively, so list length is bounded by
/// memory rather than stack depth.
pub struct Cons {
    pub head: Value,
    pub tail: Value,
}
impl Cons {
    /// Constructs a new cons cell with the given head/tail values
    #[inline]
    pub fn new(head: Value, tail: Value) -> Self {
        Self { head, tail }
    }

    /// Returns the head of this list
    #[inline]
    pub fn head(&self) -> &Value {
        &self.head
    }

    /// Returns the tail of this list
    ///
    /// NOTE: If the tail of this cell is _not_ Nil or a cons cell, it represents an improper list
    #[inline]
    pub fn tail(&self) -> &Value {
        &self.tail
    }

    /// Traverse the list, producing a `Result<&Value, ImproperList>` for each element.
    ///
    /// If the list is proper, all elements will be `Ok`, but if the list is improper, the last
    /// element produced will be `Err(ImproperList)`. The `Nil` terminating a proper list is
    /// not produced.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Returns true if this list is terminated by `Nil`
    pub fn is_proper(&self) -> bool {
        self.iter().all(|element| element.is_ok())
    }

    /// Returns the elements of a proper list, or `None` if the list is improper
    pub fn to_vec(&self) -> Option<Vec<Value>> {
        self.iter()
            .map(|element| element.ok().cloned())
            .collect()
    }
}
impl Clone for Cons {
    fn clone(&self) -> Self {
        let mut heads = Vec::new();
        let mut tail = &self.tail;
        while let Value::List(cons) = tail {
            heads.push(&cons.head);
            tail = &cons.tail;
        }
        let tail = heads
            .into_iter()
            .rev()
            .fold(tail.clone(), |tail, head| Value::cons(head.clone(), tail));
        Self::new(self.head.clone(), tail)
    }
}
impl PartialEq for Cons {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            if left.head != right.head {
                return false;
            }
            match (&left.tail, &right.tail) {
                (Value::List(l), Value::List(r)) => {
                    left = l;
                    right = r;
                }
                (l, r) => return l == r,
            }
        }
    }
}
impl Eq for Cons {}
impl fmt::Debug for Cons {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut list = f.debug_list();
        for element in self.iter() {
            match element {
                Ok(value) => list.entry(value),
                Err(improper) => list.entry(&improper),
            };
        }
        list.finish()
    }
}
impl Drop for Cons {
    // Unlinks the tail iteratively so long lists don't overflow the stack when dropped
    fn drop(&mut self) {
        let mut tail = std::mem::replace(&mut self.tail, Value::Nil);
        while let Value::List(mut cons) = tail {
            tail = std::mem::replace(&mut cons.tail, Value::Nil);
        }
    }
}
impl fmt::Display for Cons {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            match element {
                Ok(value) if i == 0 => write!(f, "{}", value)?,
                Ok(value) => write!(f, ",{}", value)?,
                Err(improper) => write!(f, "|{}", improper)?,
            }
        }
        f.write_str("]")
    }
}
