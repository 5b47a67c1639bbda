//! The global atom table.
//!
//! Names are leaked on insertion and never removed, so every `&'static str` handed out stays
//! valid for the rest of the program and the same name always yields the same pointer.
use hashbrown::HashSet;
use lazy_static::lazy_static;
use log::trace;
use parking_lot::RwLock;

lazy_static! {
    static ref ATOMS: RwLock<HashSet<&'static str>> = RwLock::new(HashSet::new());
}

/// Returns the interned name equal to `name`, if it has been interned
pub(super) fn get(name: &str) -> Option<&'static str> {
    ATOMS.read().get(name).copied()
}

/// Returns the interned name equal to `name`, interning it first if necessary
pub(super) fn get_or_insert(name: &str) -> &'static str {
    if let Some(interned) = get(name) {
        return interned;
    }
    let mut table = ATOMS.write();
    // Another thread may have inserted it between dropping the read lock and now
    if let Some(interned) = table.get(name) {
        return interned;
    }
    let interned: &'static str = Box::leak(name.to_owned().into_boxed_str());
    trace!("interning atom {:?}", interned);
    table.insert(interned);
    interned
}
