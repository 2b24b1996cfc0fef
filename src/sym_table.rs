//! SymTable: the hash-backed symbol table.

use crate::chain::{self, Binding, Link};
use crate::growth;
use crate::hash;

/// A chained hash table mapping unique string keys to values of type `V`.
///
/// Keys are copied on insert and owned by the table; values are owned by
/// the table and handed back by move from [`SymTable::remove`] and
/// [`SymTable::replace`]. The bucket array grows through a fixed prime
/// sequence as bindings accumulate and never shrinks.
pub struct SymTable<V> {
    buckets: Vec<Link<V>>,
    len: usize,
    sequence_index: usize,
}

/// Rejected insertion.
#[derive(Debug, Eq, PartialEq)]
pub enum InsertError {
    /// The key is already bound; the table was left unchanged.
    DuplicateKey,
}

impl core::fmt::Display for InsertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InsertError::DuplicateKey => f.write_str("key is already bound"),
        }
    }
}

impl std::error::Error for InsertError {}

impl<V> SymTable<V> {
    /// Create an empty table at the smallest capacity in the growth
    /// sequence.
    pub fn new() -> Self {
        let capacity = growth::CAPACITY_SEQUENCE[0];
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            sequence_index: 0,
        }
    }

    /// Number of bindings currently in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket-array length. Starts at 509 and steps through the
    /// growth sequence; observable mainly so growth is testable.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket(&self, key: &str) -> usize {
        hash::bucket_index(key, self.buckets.len())
    }

    /// Bind `key` to `value` if `key` is not already bound.
    ///
    /// On success the table stores its own copy of `key` and the binding
    /// count rises by one. If `key` is already bound, the table is left
    /// unchanged and `Err(InsertError::DuplicateKey)` is returned.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.contains(key) {
            return Err(InsertError::DuplicateKey);
        }

        // Saturated and not yet at the ceiling: grow before inserting.
        // Growth is a performance device, never a precondition; at the
        // ceiling the insert proceeds into a lengthening chain.
        if self.len == self.buckets.len() {
            self.grow();
        }

        let idx = self.bucket(key);
        chain::push(&mut self.buckets[idx], key.into(), value);
        self.len += 1;
        Ok(())
    }

    /// Whether `key` is bound.
    pub fn contains(&self, key: &str) -> bool {
        chain::find(&self.buckets[self.bucket(key)], key).is_some()
    }

    /// The value bound to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&V> {
        chain::find(&self.buckets[self.bucket(key)], key).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket(key);
        chain::find_mut(&mut self.buckets[idx], key).map(|node| &mut node.value)
    }

    /// If `key` is bound, overwrite its value in place and return the
    /// previous value; otherwise leave the table unchanged and return
    /// `None`.
    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        self.get_mut(key)
            .map(|slot| core::mem::replace(slot, value))
    }

    /// If `key` is bound, unlink its binding and return the value;
    /// otherwise return `None`. The binding's key copy is released with
    /// the node.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.bucket(key);
        let node = chain::unlink(&mut self.buckets[idx], key)?;
        self.len -= 1;
        Some(node.value)
    }

    /// Visit every binding exactly once: bucket index ascending, then
    /// most-recently-inserted first within a bucket. The order is stable
    /// for a given table state but otherwise unspecified.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            cur: None,
        }
    }

    /// Like [`SymTable::iter`], with in-place mutable access to values.
    /// Keys stay immutable and the structure cannot be changed while the
    /// iterator borrows the table.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            cur: None,
        }
    }

    /// Step to the next capacity in the growth sequence and relink every
    /// binding into the new bucket array. Nodes are moved, not recreated;
    /// each key's index is recomputed from scratch against the new
    /// capacity (hashes are deliberately not cached). No-op at the
    /// sequence ceiling.
    fn grow(&mut self) {
        let Some(new_capacity) = growth::next_capacity(self.sequence_index) else {
            return;
        };
        let mut new_buckets = empty_buckets(new_capacity);
        for head in &mut self.buckets {
            let mut cur = head.take();
            while let Some(mut node) = cur {
                cur = node.next.take();
                let idx = hash::bucket_index(node.key(), new_capacity);
                node.next = new_buckets[idx].take();
                new_buckets[idx] = Some(node);
            }
        }
        self.buckets = new_buckets;
        self.sequence_index += 1;
        debug_assert_eq!(
            self.buckets.len(),
            growth::CAPACITY_SEQUENCE[self.sequence_index]
        );
    }
}

impl<V> Default for SymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for SymTable<V> {
    fn drop(&mut self) {
        // Chains past the growth ceiling can be arbitrarily long; tear
        // them down iteratively instead of recursing through Box drops.
        for head in &mut self.buckets {
            chain::clear(head);
        }
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Link<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, || None);
    buckets
}

/// Immutable iterator over `(key, value)` pairs of a [`SymTable`].
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Link<V>>,
    cur: Option<&'a Binding<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.cur.take() {
                self.cur = node.next.as_deref();
                return Some((node.key(), &node.value));
            }
            self.cur = self.buckets.next()?.as_deref();
        }
    }
}

/// Mutable iterator over `(key, &mut value)` pairs of a [`SymTable`].
pub struct IterMut<'a, V> {
    buckets: core::slice::IterMut<'a, Link<V>>,
    cur: Option<&'a mut Binding<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.cur.take() {
                let (key, value, next) = node.parts_mut();
                self.cur = next.as_deref_mut();
                return Some((key, value));
            }
            self.cur = self.buckets.next()?.as_deref_mut();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: a successful put makes the key visible to contains/get
    /// and raises len by exactly one.
    #[test]
    fn put_then_lookup() {
        let mut t: SymTable<i32> = SymTable::new();
        assert!(t.is_empty());
        t.put("x", 7).unwrap();
        assert_eq!(t.len(), 1);
        assert!(t.contains("x"));
        assert_eq!(t.get("x"), Some(&7));
        assert!(!t.contains("y"));
        assert_eq!(t.get("y"), None);
    }

    /// Invariant: put on a bound key is a no-op that reports DuplicateKey;
    /// len and the existing value are unchanged.
    #[test]
    fn duplicate_put_rejected() {
        let mut t: SymTable<i32> = SymTable::new();
        t.put("dup", 1).unwrap();
        assert_eq!(t.put("dup", 2), Err(InsertError::DuplicateKey));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("dup"), Some(&1));
    }

    /// Invariant: replace overwrites in place and returns the previous
    /// value; on an unbound key it changes nothing and returns None.
    #[test]
    fn replace_semantics() {
        let mut t: SymTable<&'static str> = SymTable::new();
        t.put("k", "old").unwrap();
        assert_eq!(t.replace("k", "new"), Some("old"));
        assert_eq!(t.get("k"), Some(&"new"));
        assert_eq!(t.replace("absent", "v"), None);
        assert!(!t.contains("absent"));
        assert_eq!(t.len(), 1);
    }

    /// Invariant: remove returns the bound value by move, drops the
    /// binding, and decrements len; removing an unbound key is a no-op.
    #[test]
    fn remove_semantics() {
        let mut t: SymTable<String> = SymTable::new();
        t.put("k", "v".to_string()).unwrap();
        assert_eq!(t.remove("k"), Some("v".to_string()));
        assert_eq!(t.len(), 0);
        assert!(!t.contains("k"));
        assert_eq!(t.remove("k"), None);
        assert_eq!(t.len(), 0);
    }

    /// Invariant: a removed key can be re-bound with a fresh value.
    #[test]
    fn remove_then_reinsert() {
        let mut t: SymTable<i32> = SymTable::new();
        t.put("k", 1).unwrap();
        assert_eq!(t.remove("k"), Some(1));
        t.put("k", 2).unwrap();
        assert_eq!(t.get("k"), Some(&2));
        assert_eq!(t.len(), 1);
    }

    /// Invariant: colliding keys coexist in one bucket and resolve by key
    /// equality. "a", "bA" and "A7" all hash to bucket 97 at capacity 509.
    #[test]
    fn colliding_keys_resolve_by_equality() {
        let mut t: SymTable<i32> = SymTable::new();
        t.put("a", 1).unwrap();
        t.put("bA", 2).unwrap();
        t.put("A7", 3).unwrap();
        assert_eq!(t.get("a"), Some(&1));
        assert_eq!(t.get("bA"), Some(&2));
        assert_eq!(t.get("A7"), Some(&3));

        // Unlink the middle of the shared chain; neighbors survive.
        assert_eq!(t.remove("bA"), Some(2));
        assert_eq!(t.get("a"), Some(&1));
        assert_eq!(t.get("A7"), Some(&3));
        assert_eq!(t.len(), 2);
    }

    /// Invariant: within a bucket, iteration is most-recently-inserted
    /// first (head insertion); the iterator walks buckets in ascending
    /// index order.
    #[test]
    fn iteration_order_within_a_bucket() {
        let mut t: SymTable<i32> = SymTable::new();
        t.put("a", 1).unwrap();
        t.put("bA", 2).unwrap();
        t.put("A7", 3).unwrap();
        let keys: Vec<&str> = t.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["A7", "bA", "a"]);
    }

    /// Invariant: iter_mut updates values in place without touching keys
    /// or structure.
    #[test]
    fn iter_mut_updates_values() {
        let mut t: SymTable<i32> = SymTable::new();
        for k in ["a", "b", "c"] {
            t.put(k, 0).unwrap();
        }
        for (_k, v) in t.iter_mut() {
            *v += 5;
        }
        assert_eq!(t.get("a"), Some(&5));
        assert_eq!(t.get("b"), Some(&5));
        assert_eq!(t.get("c"), Some(&5));
        assert_eq!(t.len(), 3);
    }

    /// Invariant: growth relocates every binding and loses none; the
    /// capacity steps 509 -> 1021 when the 510th binding arrives.
    #[test]
    fn growth_preserves_all_bindings() {
        let mut t: SymTable<usize> = SymTable::new();
        assert_eq!(t.capacity(), 509);
        for i in 0..600 {
            t.put(&format!("key{i}"), i).unwrap();
        }
        assert_eq!(t.len(), 600);
        assert_eq!(t.capacity(), 1021);
        for i in 0..600 {
            assert_eq!(t.get(&format!("key{i}")), Some(&i));
        }
        assert_eq!(t.iter().count(), 600);
    }

    /// Invariant: growth triggers exactly when len reaches capacity, not
    /// before.
    #[test]
    fn growth_triggers_at_saturation() {
        let mut t: SymTable<usize> = SymTable::new();
        for i in 0..509 {
            t.put(&format!("key{i}"), i).unwrap();
        }
        // 509 bindings fit the 509 buckets without growing.
        assert_eq!(t.capacity(), 509);
        t.put("one-more", 509).unwrap();
        assert_eq!(t.capacity(), 1021);
        assert_eq!(t.len(), 510);
    }

    /// Invariant: removals never shrink the bucket array.
    #[test]
    fn capacity_never_shrinks() {
        let mut t: SymTable<usize> = SymTable::new();
        for i in 0..600 {
            t.put(&format!("key{i}"), i).unwrap();
        }
        assert_eq!(t.capacity(), 1021);
        for i in 0..600 {
            assert_eq!(t.remove(&format!("key{i}")), Some(i));
        }
        assert_eq!(t.len(), 0);
        assert_eq!(t.capacity(), 1021);
    }

    /// Invariant: the table never inspects or clones values; a value
    /// without Clone/Debug is stored and returned by move.
    #[test]
    fn values_are_opaque() {
        struct Opaque(#[allow(dead_code)] u64);
        let mut t: SymTable<Opaque> = SymTable::new();
        t.put("k", Opaque(42)).unwrap();
        let got = t.remove("k").map(|o| o.0);
        assert_eq!(got, Some(42));
    }

    /// Invariant: dropping the table releases every chain without
    /// recursing (exercised with enough bindings for several resizes).
    #[test]
    fn drop_releases_everything() {
        let mut t: SymTable<String> = SymTable::new();
        for i in 0..5_000 {
            t.put(&format!("key{i}"), format!("value{i}")).unwrap();
        }
        drop(t);
    }
}
