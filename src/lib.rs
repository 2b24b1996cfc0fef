//! symtable: a single-threaded symbol table mapping unique string keys to
//! caller-owned values, backed by a hand-built chained hash table with
//! stepped prime-capacity growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build SymTable in small, separately testable layers so the
//!   hashing, chaining, and growth logic can each be reasoned about on
//!   their own.
//! - Layers:
//!   - hash: the polynomial rolling hash mapping a key string to a bucket
//!     index for a given capacity.
//!   - chain: the singly linked bucket chain (`Binding` nodes) and the
//!     link/unlink primitives both backends share.
//!   - growth: the fixed ascending capacity sequence and the stepping
//!     rule through it.
//!   - SymTable<V>: the public hash-backed table orchestrating the three.
//!   - ChainTable<V>: an alternative backend implementing the identical
//!     contract as a single chain — a one-bucket table with no hashing
//!     and no resizing.
//!
//! Constraints
//! - Single-threaded: all mutation goes through `&mut self`; no atomics,
//!   no interior mutability, no internal synchronization.
//! - Unique keys: `put` on an already-bound key fails and changes
//!   nothing; at most one binding per key string table-wide.
//! - Keys are copied on insert (`Box<str>`) and owned by their binding;
//!   values are owned by the table and handed back by move from
//!   `remove` and `replace`.
//! - No per-operation heap traffic beyond the inserted binding itself.
//!
//! Growth policy
//! - Capacities step through a fixed sequence (509, 1021, ... 65521),
//!   one entry at a time, when an insertion finds the binding count equal
//!   to the capacity. Resizing relinks the existing nodes into the new
//!   bucket array; nodes and key copies are never reallocated.
//! - Hashes are not cached: a resize recomputes every key's bucket index
//!   from scratch against the new capacity. Resizes are geometrically
//!   rare, so the recomputation cost amortizes away.
//! - Past the final sequence entry the table stops growing and chains
//!   lengthen; performance degrades gracefully, correctness is unchanged.
//!
//! Iteration
//! - `iter`/`iter_mut` visit every binding exactly once, bucket index
//!   ascending and most-recently-inserted first within a bucket.
//!   Structural mutation during iteration is excluded by the borrow
//!   checker rather than by convention.
//!
//! Notes and non-goals
//! - No deletion-triggered shrinkage; capacity only grows.
//! - No ordered iteration, persistence, or concurrent access.
//! - ChainTable exists as the degenerate reference backend; SymTable is
//!   the intended default.

mod chain;
mod chain_table;
mod growth;
mod hash;
mod sym_table;
mod sym_table_proptest;

// Public surface
pub use chain_table::{ChainIter, ChainIterMut, ChainTable};
pub use sym_table::{InsertError, Iter, IterMut, SymTable};
