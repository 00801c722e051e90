// HashSymTable integration suite.
//
// Exercises the behavior that distinguishes the hash store: bucket
// growth across the prime schedule, durability of the table's own key
// copies, and the ownership split between keys (table-owned) and values
// (caller-owned).

use std::cell::Cell;
use std::rc::Rc;

use symtab::{HashSymTable, SymTable};

// Test: growth correctness across the first threshold.
// Assumes: the table starts at 509 buckets and grows when bindings
// outnumber buckets.
// Verifies: after 510 unique inserts every key is still retrievable
// with its original value and len is exact.
#[test]
fn growth_preserves_all_bindings() {
    let mut table: HashSymTable<usize> = HashSymTable::new();
    for i in 0..510 {
        table.insert(&format!("sym-{i}"), i).unwrap();
    }
    assert_eq!(table.len(), 510);
    for i in 0..510 {
        assert_eq!(table.get(&format!("sym-{i}")), Some(&i));
    }
}

// Test: growth interleaved with removals and re-inserts.
// Verifies: crossing two thresholds with churn keeps lookups, removals,
// and the count consistent throughout.
#[test]
fn growth_with_churn_stays_consistent() {
    let mut table: HashSymTable<usize> = HashSymTable::new();
    for i in 0..1200 {
        table.insert(&format!("sym-{i}"), i).unwrap();
    }
    for i in (0..1200).step_by(2) {
        assert_eq!(table.remove(&format!("sym-{i}")), Some(i));
    }
    assert_eq!(table.len(), 600);

    for i in (0..1200).step_by(2) {
        table.insert(&format!("sym-{i}"), i + 10_000).unwrap();
    }
    assert_eq!(table.len(), 1200);
    for i in 0..1200 {
        let expected = if i % 2 == 0 { i + 10_000 } else { i };
        assert_eq!(table.get(&format!("sym-{i}")), Some(&expected));
    }
}

// Test: the key copy is durable.
// Verifies: mutating the caller's buffer after insertion does not
// affect the stored binding; lookups use the copied bytes.
#[test]
fn table_owns_its_key_copy() {
    let mut table: HashSymTable<u32> = HashSymTable::new();
    let mut key = String::from("mutable");
    table.insert(&key, 7).unwrap();

    key.push_str("-changed");
    assert!(table.contains_key("mutable"));
    assert!(!table.contains_key(&key));
    assert_eq!(table.remove("mutable"), Some(7));
}

struct DropTally(Rc<Cell<u32>>);

impl Drop for DropTally {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// Test: destruction releases keys and structure, never values.
// Assumes: callers that keep value ownership store references.
// Verifies: dropping a table of `&DropTally` runs no value drops; the
// payloads outlive the table and drop exactly once, later, with their
// owner.
#[test]
fn destruction_never_touches_borrowed_values() {
    let drops = Rc::new(Cell::new(0));
    let payloads: Vec<DropTally> = (0..4).map(|_| DropTally(drops.clone())).collect();

    {
        let mut table: HashSymTable<&DropTally> = HashSymTable::new();
        for (i, payload) in payloads.iter().enumerate() {
            table.insert(&format!("payload-{i}"), payload).unwrap();
        }
        assert_eq!(table.len(), 4);
    }
    assert_eq!(drops.get(), 0, "table drop must not reach the values");

    drop(payloads);
    assert_eq!(drops.get(), 4);
}

// Test: removal hands the value back instead of dropping it.
// Verifies: a removed owned value stays live in the caller's hands; the
// drop happens only when the caller lets go of it.
#[test]
fn remove_moves_value_to_caller() {
    let drops = Rc::new(Cell::new(0));
    let mut table: HashSymTable<DropTally> = HashSymTable::new();
    table.insert("owned", DropTally(drops.clone())).unwrap();

    let value = table.remove("owned").unwrap();
    assert_eq!(drops.get(), 0);
    drop(value);
    assert_eq!(drops.get(), 1);
}

// Test: the trait surface is enough for generic callers.
// Verifies: a caller written against `&mut dyn SymTable<_>` drives the
// hash store without naming the concrete type.
#[test]
fn usable_through_dyn_contract() {
    fn census(table: &mut dyn SymTable<u32>) -> u32 {
        let mut total = 0;
        table.for_each(&mut |_, v| total += *v);
        total
    }

    let mut table: HashSymTable<u32> = HashSymTable::new();
    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        table.insert(key, value).unwrap();
    }
    assert_eq!(census(&mut table), 6);
}
