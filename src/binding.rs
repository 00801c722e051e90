//! The shared binding record and the arena both stores keep bindings in.

use slotmap::{DefaultKey, SlotMap};

/// One key/value binding, linked into a chain by arena key instead of a
/// raw pointer.
#[derive(Debug)]
pub(crate) struct Binding<V> {
    /// Owned copy of the caller's key, immutable for the binding's life.
    pub(crate) key: Box<str>,
    pub(crate) value: V,
    /// Next binding in the same chain.
    pub(crate) next: Option<DefaultKey>,
}

impl<V> Binding<V> {
    pub(crate) fn new(key: &str, value: V, next: Option<DefaultKey>) -> Self {
        Self {
            key: key.into(),
            value,
            next,
        }
    }
}

/// Arena of binding records; chains are threaded through it by key.
///
/// The arena's `len()` is the table's binding count: it is maintained
/// incrementally by insert/remove, and every live slot is linked into
/// exactly one chain.
pub(crate) type Bindings<V> = SlotMap<DefaultKey, Binding<V>>;
