//! symtab: a single-threaded, string-keyed symbol table backed by a chained
//! hash table that grows through a fixed capacity ladder.
//!
//! Internal design:
//!
//! Summary
//! - Goal: a reusable lookup structure for host programs (compilers,
//!   interpreters) that need fast symbol resolution with fully
//!   deterministic, reproducible bucket placement.
//! - Layers:
//!   - hash: pure polynomial rolling hash (multiplier 65599, wrapping u64
//!     accumulator) reduced modulo the bucket count. No per-process seed;
//!     the same key lands in the same bucket on every run and platform.
//!   - ladder: the fixed ascending sequence of prime bucket counts
//!     (509 .. 65521) the table grows through, one rung per saturation.
//!   - SymTable<V>: the public container. Bucket heads are a plain vector;
//!     bindings live in an index-stable slotmap arena and chains are
//!     threaded through the arena by key, so growth relinks nodes without
//!     copying keys or values and removal never touches raw pointers.
//!   - ListSymTable<V>: the same contract as O(n) scans over a flat vector;
//!     a transparent reference implementation and differential-test oracle.
//!
//! Constraints
//! - Single-threaded: access is serialized by `&self`/`&mut self`; the types
//!   carry no interior mutability and are `Send`/`Sync` exactly when `V` is.
//! - Keys are copied into the table on insert (never aliased from the
//!   caller), immutable once inserted, and compared byte-for-byte.
//! - Values are moved in and out and never inspected; callers wanting
//!   non-owning semantics instantiate `V` with a reference or handle type.
//! - Growth triggers at load factor 1.0, advances exactly one rung, and
//!   rehashes stop-the-world by relinking arena nodes. Once the ladder is
//!   exhausted the table silently stops growing and chains lengthen.
//! - Duplicate inserts are rejected with a tagged error that carries the
//!   rejected value back to the caller.
//!
//! Notes and non-goals
//! - No iteration-order guarantee across implementations; `SymTable`
//!   iterates buckets in ascending index order, chains newest-first.
//! - No shrinking on deletion, no persistence, no non-string keys.
//! - Mutation during iteration is a compile error by construction, so no
//!   runtime iterator-invalidation detection exists or is needed.

mod hash;
mod ladder;
mod list_table;
mod sym_table;
mod sym_table_proptest;

// Public surface
pub use list_table::ListSymTable;
pub use sym_table::{InsertError, Iter, SymTable};
