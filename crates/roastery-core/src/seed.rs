//! The fixed set of records present at startup.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization as _, char::is_combining_mark};

use crate::coffee::{CoffeeRecord, Roast};

/// Seed records in their declared order (ids 1 through 7).
pub fn seed_records() -> Vec<CoffeeRecord> {
  vec![
    CoffeeRecord::new(1, "City", Roast::Medium),
    CoffeeRecord::new(2, "Cinnamon", Roast::Light),
    CoffeeRecord::new(3, "Half City", Roast::Light),
    CoffeeRecord::new(4, "Light City", Roast::Light),
    CoffeeRecord::new(5, "Full City", Roast::Medium),
    CoffeeRecord::new(6, "Vienna", Roast::Dark),
    CoffeeRecord::new(7, "French Roast", Roast::Dark),
  ]
}

/// Seed records sorted by name, as shown on first render.
///
/// This sort happens once; later additions are never re-sorted.
pub fn initial_records() -> Vec<CoffeeRecord> {
  let mut records = seed_records();
  records.sort_by(|a, b| compare_names(&a.name, &b.name));
  records
}

/// Locale-style name ordering, in three levels:
///
/// 1. base letters, ignoring case and accents (`eclair` = `Éclair`);
/// 2. accents, unaccented first (`eclair` < `éclair`);
/// 3. case, lowercase first (`apple` < `Apple`).
///
/// The raw strings break any remaining tie so the ordering stays total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  fold(a, true)
    .cmp(&fold(b, true))
    .then_with(|| fold(a, false).cmp(&fold(b, false)))
    .then_with(|| {
      a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
    })
    .then_with(|| a.cmp(b))
}

/// Lowercased canonical decomposition, optionally without combining marks.
fn fold(s: &str, strip_marks: bool) -> String {
  s.nfd()
    .filter(|c| !(strip_marks && is_combining_mark(*c)))
    .flat_map(char::to_lowercase)
    .collect()
}
