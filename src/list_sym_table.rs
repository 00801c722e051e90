//! ListSymTable: single-chain reference store.

use core::fmt;
use core::fmt::Debug;
use core::mem;

use slotmap::DefaultKey;

use crate::binding::{Binding, Bindings};
use crate::table::{InsertError, SymTable};

/// Association-list store: one chain holding every binding, newest
/// first. Each operation is a linear scan of the chain.
///
/// This store is the correctness and performance baseline for
/// [`HashSymTable`](crate::HashSymTable); the two are interchangeable
/// behind [`SymTable`].
pub struct ListSymTable<V> {
    head: Option<DefaultKey>,
    bindings: Bindings<V>,
}

impl<V> ListSymTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            head: None,
            bindings: Bindings::with_key(),
        }
    }

    /// Iterate over `(key, value)` pairs, newest binding first.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            bindings: &self.bindings,
            cur: self.head,
        }
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let mut cur = self.head;
        while let Some(id) = cur {
            let binding = &self.bindings[id];
            if &*binding.key == key {
                return Some(id);
            }
            cur = binding.next;
        }
        None
    }
}

impl<V> Default for ListSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for ListSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> SymTable<V> for ListSymTable<V> {
    fn len(&self) -> usize {
        self.bindings.len()
    }

    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.find(key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        let id = self.bindings.insert(Binding::new(key, value, self.head));
        self.head = Some(id);
        Ok(())
    }

    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        let id = self.find(key)?;
        Some(mem::replace(&mut self.bindings[id].value, value))
    }

    fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn get(&self, key: &str) -> Option<&V> {
        let id = self.find(key)?;
        Some(&self.bindings[id].value)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let id = self.find(key)?;
        Some(&mut self.bindings[id].value)
    }

    fn remove(&mut self, key: &str) -> Option<V> {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            if &*self.bindings[id].key == key {
                let next = self.bindings[id].next;
                match prev {
                    None => self.head = next,
                    Some(p) => self.bindings[p].next = next,
                }
                return self.bindings.remove(id).map(|b| b.value);
            }
            prev = cur;
            cur = self.bindings[id].next;
        }
        None
    }

    fn for_each(&mut self, visit: &mut dyn FnMut(&str, &mut V)) {
        let mut cur = self.head;
        while let Some(id) = cur {
            let binding = &mut self.bindings[id];
            cur = binding.next;
            visit(&binding.key, &mut binding.value);
        }
    }
}

/// Iterator over immutable entries of a [`ListSymTable`], newest first.
pub struct Iter<'a, V> {
    bindings: &'a Bindings<V>,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let binding = &self.bindings[id];
        self.cur = binding.next;
        Some((&binding.key, &binding.value))
    }
}
