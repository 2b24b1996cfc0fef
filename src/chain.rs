//! Singly linked bucket chain shared by both table backends.
//!
//! A chain head is `Link<V>`; each binding owns its successor, the head
//! owns the whole chain. Insertion is head-first, so within one chain the
//! most recently inserted binding comes first. Lookups compare keys by
//! exact byte equality; the table-wide uniqueness invariant means the
//! first match is the only match.

/// One key/value binding plus the link to the next binding in its bucket.
#[derive(Debug)]
pub(crate) struct Binding<V> {
    key: Box<str>, // owned, immutable copy of the caller's key
    pub(crate) value: V,
    pub(crate) next: Link<V>,
}

pub(crate) type Link<V> = Option<Box<Binding<V>>>;

impl<V> Binding<V> {
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Disjoint borrows of the three fields, for iterators that must hand
    /// out `&mut value` while still advancing along `next`.
    pub(crate) fn parts_mut(&mut self) -> (&str, &mut V, &mut Link<V>) {
        (&self.key, &mut self.value, &mut self.next)
    }
}

/// Insert a new binding at the head of the chain.
pub(crate) fn push<V>(head: &mut Link<V>, key: Box<str>, value: V) {
    let next = head.take();
    *head = Some(Box::new(Binding { key, value, next }));
}

/// Linear scan for `key`; first match wins.
pub(crate) fn find<'a, V>(head: &'a Link<V>, key: &str) -> Option<&'a Binding<V>> {
    let mut cur = head.as_deref();
    while let Some(node) = cur {
        if node.key() == key {
            return Some(node);
        }
        cur = node.next.as_deref();
    }
    None
}

pub(crate) fn find_mut<'a, V>(head: &'a mut Link<V>, key: &str) -> Option<&'a mut Binding<V>> {
    let mut cur = head.as_deref_mut();
    while let Some(node) = cur {
        if node.key() == key {
            return Some(node);
        }
        cur = node.next.as_deref_mut();
    }
    None
}

/// Splice the binding for `key` out of the chain and return it, or `None`
/// if the chain has no such binding. Handles the head like any interior
/// node: `cur` is advanced to the link *owning* the match, then the node
/// is taken and its successor re-attached in its place.
pub(crate) fn unlink<V>(head: &mut Link<V>, key: &str) -> Option<Box<Binding<V>>> {
    let mut cur = head;
    while cur.as_deref().is_some_and(|node| node.key() != key) {
        cur = &mut cur.as_mut()?.next;
    }
    let mut node = cur.take()?;
    *cur = node.next.take();
    Some(node)
}

/// Tear a chain down iteratively. The default recursive `Box` drop would
/// recurse once per binding, which overflows the stack on the unbounded
/// chains that form once the table stops growing.
pub(crate) fn clear<V>(head: &mut Link<V>) {
    let mut cur = head.take();
    while let Some(mut node) = cur {
        cur = node.next.take();
    }
}
