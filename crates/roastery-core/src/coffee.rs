//! Coffee records — the only entity in the store.
//!
//! A record is created either by the seed set at startup or by the add form.
//! Records are never edited or deleted afterwards.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{Error, Result};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Record identifier.
///
/// Seed records use small sequential values; user-added records use a
/// millisecond timestamp (see [`crate::controller::TimestampIds`]).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CoffeeId(pub i64);

impl fmt::Display for CoffeeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

// ─── Roast ───────────────────────────────────────────────────────────────────

/// Degree of roasting. A closed set; the text form is lowercase.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Roast {
  #[default]
  Light,
  Medium,
  Dark,
}

impl Roast {
  /// The next roast in declaration order, wrapping around.
  pub fn next(self) -> Self {
    match self {
      Self::Light => Self::Medium,
      Self::Medium => Self::Dark,
      Self::Dark => Self::Light,
    }
  }

  /// The previous roast in declaration order, wrapping around.
  pub fn prev(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Medium => Self::Light,
      Self::Dark => Self::Medium,
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single coffee entry. `name` is never empty once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeRecord {
  pub id:    CoffeeId,
  pub name:  String,
  pub roast: Roast,
}

impl CoffeeRecord {
  pub fn new(id: i64, name: impl Into<String>, roast: Roast) -> Self {
    Self { id: CoffeeId(id), name: name.into(), roast }
  }
}

// ─── Filter inputs ───────────────────────────────────────────────────────────

/// Value of the roast selector in the filter form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoastFilter {
  /// The `all` sentinel: no roast restriction.
  #[default]
  All,
  Only(Roast),
}

impl RoastFilter {
  /// Selector options in display order.
  pub const OPTIONS: [RoastFilter; 4] = [
    RoastFilter::All,
    RoastFilter::Only(Roast::Light),
    RoastFilter::Only(Roast::Medium),
    RoastFilter::Only(Roast::Dark),
  ];

  pub fn matches(self, roast: Roast) -> bool {
    match self {
      Self::All => true,
      Self::Only(r) => r == roast,
    }
  }

  pub fn next(self) -> Self { self.step(1) }

  pub fn prev(self) -> Self { self.step(Self::OPTIONS.len() - 1) }

  fn step(self, by: usize) -> Self {
    let n = Self::OPTIONS.len();
    let i = Self::OPTIONS.iter().position(|o| *o == self).unwrap_or(0);
    Self::OPTIONS[(i + by) % n]
  }
}

impl fmt::Display for RoastFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => f.write_str("all"),
      Self::Only(r) => write!(f, "{r}"),
    }
  }
}

impl FromStr for RoastFilter {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    if s == "all" {
      return Ok(Self::All);
    }
    s.parse::<Roast>()
      .map(Self::Only)
      .map_err(|_| Error::UnknownRoastFilter(s.to_string()))
  }
}

/// Both filter predicates together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
  /// Case-insensitive substring filter on the name; empty means no filter.
  pub name:  String,
  pub roast: RoastFilter,
}

impl FilterQuery {
  pub fn new(name: impl Into<String>, roast: RoastFilter) -> Self {
    Self { name: name.into(), roast }
  }
}
