//! HashSymTable: bucket-array store with best-effort growth.

use core::fmt;
use core::fmt::Debug;
use core::mem;

use slotmap::DefaultKey;

use crate::binding::{Binding, Bindings};
use crate::hash::{bucket_index, BUCKET_COUNTS};
use crate::table::{InsertError, SymTable};

/// Hash-table store: a vector of bucket chains, partitioned by the
/// polynomial hash of the key modulo the current bucket count.
///
/// Binding records live in an arena; each bucket is an intrusive chain
/// threaded through the arena by `next` links, with new bindings
/// prepended at the chain head. The bucket vector starts at 509 entries
/// and grows through a fixed prime schedule once the binding count
/// exceeds the bucket count, relinking every binding into its new bucket.
///
/// Growth is best effort: the insert that triggers it has already
/// succeeded, and a capped or failed growth leaves the table fully
/// usable at its current size. The bucket count never decreases.
pub struct HashSymTable<V> {
    buckets: Vec<Option<DefaultKey>>,
    /// Index into `BUCKET_COUNTS` matching `buckets.len()`.
    schedule: usize,
    bindings: Bindings<V>,
}

impl<V> HashSymTable<V> {
    /// Create an empty table at the first bucket count of the schedule.
    pub fn new() -> Self {
        Self {
            buckets: vec![None; BUCKET_COUNTS[0]],
            schedule: 0,
            bindings: Bindings::with_key(),
        }
    }

    /// Iterate over `(key, value)` pairs in bucket order, then chain
    /// order within a bucket. The order is an implementation detail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            bindings: &self.bindings,
            bucket: 0,
            cur: None,
        }
    }

    /// Walk the chain in `bucket` for an exact key match.
    fn find_in_bucket(&self, bucket: usize, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[bucket];
        while let Some(id) = cur {
            let binding = &self.bindings[id];
            if &*binding.key == key {
                return Some(id);
            }
            cur = binding.next;
        }
        None
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        self.find_in_bucket(bucket_index(key, self.buckets.len()), key)
    }

    /// Move to the next bucket count in the schedule, relinking every
    /// binding into the bucket its key hashes to under the new count.
    /// The records themselves stay put in the arena; only chain links
    /// change.
    ///
    /// Returns false only when the new bucket vector cannot be
    /// allocated; the table is untouched in that case. Running off the
    /// end of the schedule is a no-op, not a failure.
    fn grow(&mut self) -> bool {
        let Some(&new_count) = BUCKET_COUNTS.get(self.schedule + 1) else {
            return true;
        };
        let mut grown: Vec<Option<DefaultKey>> = Vec::new();
        if grown.try_reserve_exact(new_count).is_err() {
            return false;
        }
        grown.resize(new_count, None);

        let old_buckets = mem::replace(&mut self.buckets, grown);
        for head in old_buckets {
            let mut cur = head;
            while let Some(id) = cur {
                let binding = &mut self.bindings[id];
                cur = binding.next;
                let bucket = bucket_index(&binding.key, new_count);
                binding.next = self.buckets[bucket];
                self.buckets[bucket] = Some(id);
            }
        }
        self.schedule += 1;
        debug_assert_eq!(self.buckets.len(), BUCKET_COUNTS[self.schedule]);
        true
    }
}

impl<V> Default for HashSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for HashSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> SymTable<V> for HashSymTable<V> {
    fn len(&self) -> usize {
        self.bindings.len()
    }

    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        let bucket = bucket_index(key, self.buckets.len());
        if self.find_in_bucket(bucket, key).is_some() {
            return Err(InsertError::DuplicateKey);
        }
        let id = self
            .bindings
            .insert(Binding::new(key, value, self.buckets[bucket]));
        self.buckets[bucket] = Some(id);

        // The insert has already succeeded; growth is advisory.
        if self.bindings.len() > self.buckets.len() && !self.grow() {
            log::debug!(
                "bucket array growth failed at {} buckets; continuing at current size",
                self.buckets.len()
            );
        }
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
        let bucket = bucket_index(key, self.buckets.len());
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[bucket];
        while let Some(id) = cur {
            if &*self.bindings[id].key == key {
                let next = self.bindings[id].next;
                match prev {
                    None => self.buckets[bucket] = next,
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
        for bucket in 0..self.buckets.len() {
            let mut cur = self.buckets[bucket];
            while let Some(id) = cur {
                let binding = &mut self.bindings[id];
                cur = binding.next;
                visit(&binding.key, &mut binding.value);
            }
        }
    }
}

/// Iterator over immutable entries of a [`HashSymTable`].
pub struct Iter<'a, V> {
    buckets: &'a [Option<DefaultKey>],
    bindings: &'a Bindings<V>,
    /// Next bucket to scan once the current chain runs out.
    bucket: usize,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.cur {
                let binding = &self.bindings[id];
                self.cur = binding.next;
                return Some((&binding.key, &binding.value));
            }
            let head = *self.buckets.get(self.bucket)?;
            self.bucket += 1;
            self.cur = head;
        }
    }
}
