//! Filtering and rendering — the derived, never-stored read side.
//!
//! [`compute_visible`] selects records; [`render`] turns them into a
//! [`ListView`] that a host surface can draw without further logic. Both are
//! pure functions of their inputs.

use serde::Serialize;

use crate::coffee::{CoffeeId, CoffeeRecord, FilterQuery, Roast};

/// Headline shown when no record passes the filters.
pub const EMPTY_MESSAGE: &str = "No coffees match your filters.";
/// Secondary line under [`EMPTY_MESSAGE`].
pub const EMPTY_HINT: &str = "Try adjusting your search or add a new coffee!";

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Select the records passing both filter predicates, in store order.
///
/// The roast filter is an exact match unless it is the `all` sentinel. The
/// name filter is a case-insensitive substring test and is skipped when the
/// query is empty. The result is always a subsequence of `records`.
pub fn compute_visible<'a>(
  records: &'a [CoffeeRecord],
  query: &FilterQuery,
) -> Vec<&'a CoffeeRecord> {
  let needle = query.name.to_lowercase();
  records
    .iter()
    .filter(|r| query.roast.matches(r.roast))
    .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
    .collect()
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Colour family of a roast badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
  /// Light roast: warm yellow.
  Warm,
  /// Medium roast.
  Blue,
  /// Dark roast: dark background, light text.
  Inverse,
}

impl From<Roast> for Badge {
  fn from(roast: Roast) -> Self {
    match roast {
      Roast::Light => Self::Warm,
      Roast::Medium => Self::Blue,
      Roast::Dark => Self::Inverse,
    }
  }
}

/// Everything a host needs to draw one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
  pub id:    CoffeeId,
  pub name:  String,
  pub roast: Roast,
  pub badge: Badge,
}

impl Card {
  /// The id line shown under the name.
  pub fn id_label(&self) -> String { format!("ID: {}", self.id) }
}

impl From<&CoffeeRecord> for Card {
  fn from(record: &CoffeeRecord) -> Self {
    Self {
      id:    record.id,
      name:  record.name.clone(),
      roast: record.roast,
      badge: record.roast.into(),
    }
  }
}

/// A complete description of the list container.
///
/// Each render produces a fresh value that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListView {
  /// No record passed the filters; show a single message and no cards.
  Empty {
    message: &'static str,
    hint:    &'static str,
  },
  /// One card per visible record, in order.
  Cards { cards: Vec<Card> },
}

impl ListView {
  pub fn cards(&self) -> &[Card] {
    match self {
      Self::Empty { .. } => &[],
      Self::Cards { cards } => cards,
    }
  }

  pub fn is_empty(&self) -> bool { matches!(self, Self::Empty { .. }) }
}

/// Describe `records` as a list of cards, or the empty state.
pub fn render<'a, I>(records: I) -> ListView
where
  I: IntoIterator<Item = &'a CoffeeRecord>,
{
  let cards: Vec<Card> = records.into_iter().map(Card::from).collect();
  if cards.is_empty() {
    ListView::Empty { message: EMPTY_MESSAGE, hint: EMPTY_HINT }
  } else {
    ListView::Cards { cards }
  }
}
