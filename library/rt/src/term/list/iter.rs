use std::iter::FusedIterator;

use super::*;

pub struct Iter<'a> {
    next: Option<Result<&'a Value, ImproperList<'a>>>,
    tail: Option<&'a Value>,
}
impl<'a> Iter<'a> {
    pub(super) fn new(cons: &'a Cons) -> Self {
        Self {
            next: Some(Ok(&cons.head)),
            tail: Some(&cons.tail),
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> Iterator for Iter<'a> {
    type Item = Result<&'a Value, ImproperList<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next.take()?;
        self.next = match self.tail.take() {
            None | Some(Value::Nil) => None,
            Some(Value::List(cons)) => {
                self.tail = Some(&cons.tail);
                Some(Ok(&cons.head))
            }
            Some(tail) => Some(Err(ImproperList { tail })),
        };
        Some(next)
    }
}
