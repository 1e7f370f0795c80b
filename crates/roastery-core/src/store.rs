//! The `CoffeeStore` trait and its in-memory implementation.
//!
//! The view controller depends on this abstraction rather than on
//! [`MemoryStore`] directly, so a host can substitute its own backing.

use crate::{coffee::CoffeeRecord, seed};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// An ordered sequence of coffee records.
///
/// Records are only ever added, never edited or removed. New records go to
/// the front of the sequence.
pub trait CoffeeStore {
  /// Insert `record` at the front of the sequence.
  ///
  /// No uniqueness check is made on the record id; the caller supplies it.
  fn append(&mut self, record: CoffeeRecord);

  /// The full sequence in current order.
  fn all(&self) -> &[CoffeeRecord];

  fn len(&self) -> usize { self.all().len() }

  fn is_empty(&self) -> bool { self.all().is_empty() }
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// A store that lives for the session and is discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  records: Vec<CoffeeRecord>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }

  /// Build a store from `records`, keeping their order.
  pub fn with_records(records: Vec<CoffeeRecord>) -> Self { Self { records } }

  /// The startup store: seed records sorted once by name.
  pub fn seeded() -> Self { Self::with_records(seed::initial_records()) }
}

impl CoffeeStore for MemoryStore {
  fn append(&mut self, record: CoffeeRecord) { self.records.insert(0, record); }

  fn all(&self) -> &[CoffeeRecord] { &self.records }
}
