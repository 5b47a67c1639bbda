use std::fmt;

use super::Value;

/// A map from keys to values, with unique keys.
///
/// Keys are compared with value equality. Pairs are kept in insertion order, which is also
/// the display order, but two maps holding the same pairs are equal regardless of order.
///
/// # Performance
///
/// Maps in this runtime are small, so lookups are a linear scan over the pairs.
#[derive(Debug, Clone, Default)]
pub struct Map {
    kv: Vec<(Value, Value)>,
}
impl Map {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kv.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kv.is_empty()
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.kv.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|index| &self.kv[index].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Inserts `value` under `key`, returning the value it replaced, if any
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.kv[index].1, value)),
            None => {
                self.kv.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.position(key).map(|index| self.kv.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.kv.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> + '_ {
        self.kv.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.kv.iter().map(|(_, v)| v)
    }
}
impl FromIterator<(Value, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
impl Eq for Map {}
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}
impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("#{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        f.write_str("}")
    }
}
