//! symtab: a string-keyed symbol table with two interchangeable
//! backends behind one contract.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one mutable mapping contract ([`SymTable`]) from unique
//!   string keys to client-owned values, with two peer implementations
//!   callers can swap transparently.
//! - Implementations:
//!   - [`HashSymTable`]: bucket-array store. Buckets partition bindings
//!     by a fixed polynomial hash of the key modulo the bucket count;
//!     the bucket vector grows through a prime schedule (509 to 65521)
//!     with a full relink once bindings outnumber buckets.
//!   - [`ListSymTable`]: one newest-first chain of all bindings, O(n)
//!     per operation; the correctness and performance baseline.
//!
//! Constraints
//! - Single-threaded: exclusive access is enforced by `&mut self`
//!   receivers, not caller discipline.
//! - Keys are copied into the table (`Box<str>`) on insertion and are
//!   immutable afterward; the caller's buffer is not retained.
//! - Values are stored as-is: never cloned, inspected, or dropped
//!   outside ordinary ownership of `V`. Callers keeping value ownership
//!   store reference-typed values.
//! - Duplicate inserts fail and lookup misses are `None`; neither is an
//!   error condition.
//!
//! Storage
//! - Binding records live in a slotmap arena, one per store; chains are
//!   intrusive singly-linked lists threaded through the arena by
//!   generational keys instead of raw pointers. Unlinking a binding
//!   frees its slot (and key copy) and moves the value back to the
//!   caller.
//!
//! Growth policy (hash store)
//! - Best effort, trigger-after-insert: the insert that crosses the
//!   threshold has already succeeded before growth is attempted, and a
//!   failed attempt is logged at debug level and dropped. Exhausting the
//!   prime schedule is a quiet cap, not a failure. The bucket count
//!   never decreases; removals never shrink the table.
//!
//! Notes and non-goals
//! - No iteration-order guarantee beyond each binding exactly once.
//!   `for_each` on the hash store walks buckets then chains; on the
//!   list store it walks the chain newest-first.
//! - No concurrent access, no persistence, no non-string keys.
//! - Structural mutation during traversal is rejected at compile time:
//!   `for_each` holds the exclusive borrow while the visitor runs.

mod binding;
mod hash;
pub mod hash_sym_table;
pub mod list_sym_table;
mod table;

// Public surface
pub use hash::PolyHasher;
pub use hash_sym_table::HashSymTable;
pub use list_sym_table::ListSymTable;
pub use table::{InsertError, SymTable};
