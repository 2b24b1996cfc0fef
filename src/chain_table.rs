//! ChainTable: the single-chain backend.
//!
//! The whole table is one bucket chain — the degenerate case of the hash
//! backend with exactly one bucket, no hash function, and no growth. It
//! implements the identical public contract as [`SymTable`] and exists as
//! the structurally simple reference implementation; every lookup is a
//! linear scan of all bindings.
//!
//! [`SymTable`]: crate::SymTable

use crate::chain::{self, Binding, Link};
use crate::sym_table::InsertError;

/// A symbol table stored as one singly linked chain of bindings.
pub struct ChainTable<V> {
    head: Link<V>,
    len: usize,
}

impl<V> ChainTable<V> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bind `key` to `value` if `key` is not already bound; head insert,
    /// same duplicate-rejection contract as the hash backend.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.contains(key) {
            return Err(InsertError::DuplicateKey);
        }
        chain::push(&mut self.head, key.into(), value);
        self.len += 1;
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        chain::find(&self.head, key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        chain::find(&self.head, key).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        chain::find_mut(&mut self.head, key).map(|node| &mut node.value)
    }

    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        self.get_mut(key)
            .map(|slot| core::mem::replace(slot, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let node = chain::unlink(&mut self.head, key)?;
        self.len -= 1;
        Some(node.value)
    }

    /// Visit every binding exactly once, most recently inserted first.
    pub fn iter(&self) -> ChainIter<'_, V> {
        ChainIter {
            cur: self.head.as_deref(),
        }
    }

    pub fn iter_mut(&mut self) -> ChainIterMut<'_, V> {
        ChainIterMut {
            cur: self.head.as_deref_mut(),
        }
    }
}

impl<V> Default for ChainTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for ChainTable<V> {
    fn drop(&mut self) {
        chain::clear(&mut self.head);
    }
}

pub struct ChainIter<'a, V> {
    cur: Option<&'a Binding<V>>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur.take()?;
        self.cur = node.next.as_deref();
        Some((node.key(), &node.value))
    }
}

pub struct ChainIterMut<'a, V> {
    cur: Option<&'a mut Binding<V>>,
}

impl<'a, V> Iterator for ChainIterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur.take()?;
        let (key, value, next) = node.parts_mut();
        self.cur = next.as_deref_mut();
        Some((key, value))
    }
}
