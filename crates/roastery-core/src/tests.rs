//! Tests for filtering, rendering and the view controller against the seed
//! data.

use crate::{
  AddError, Error,
  coffee::{CoffeeId, CoffeeRecord, FilterQuery, Roast, RoastFilter},
  controller::{Field, IdSource, TimestampIds, ViewController},
  seed,
  store::{CoffeeStore, MemoryStore},
  view::{Badge, EMPTY_HINT, EMPTY_MESSAGE, ListView, compute_visible, render},
};

/// Deterministic ids for add tests.
struct Counter(i64);

impl IdSource for Counter {
  fn next_id(&mut self) -> CoffeeId {
    self.0 += 1;
    CoffeeId(self.0)
  }
}

fn controller() -> ViewController<MemoryStore, Counter> {
  ViewController::new(MemoryStore::seeded(), Counter(1_000))
}

fn names(records: &[&CoffeeRecord]) -> Vec<String> {
  records.iter().map(|r| r.name.clone()).collect()
}

fn query(name: &str, roast: RoastFilter) -> FilterQuery { FilterQuery::new(name, roast) }

// ─── Seed & store ────────────────────────────────────────────────────────────

#[test]
fn initial_records_are_sorted_by_name() {
  let records = seed::initial_records();
  let got: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(got, [
    "Cinnamon",
    "City",
    "French Roast",
    "Full City",
    "Half City",
    "Light City",
    "Vienna",
  ]);
}

#[test]
fn compare_names_puts_lowercase_first() {
  use std::cmp::Ordering;
  assert_eq!(seed::compare_names("apple", "Banana"), Ordering::Less);
  assert_eq!(seed::compare_names("Apple", "apple"), Ordering::Greater);
  assert_eq!(seed::compare_names("City", "City"), Ordering::Equal);
}

#[test]
fn compare_names_folds_accents() {
  use std::cmp::Ordering;
  assert_eq!(seed::compare_names("Éclair", "Zebra"), Ordering::Less);
  assert_eq!(seed::compare_names("eclair", "Éclair"), Ordering::Less);

  let mut names = vec!["Zebra", "Éclair", "eclair"];
  names.sort_by(|a, b| seed::compare_names(a, b));
  assert_eq!(names, ["eclair", "Éclair", "Zebra"]);
}

#[test]
fn append_inserts_at_front() {
  let mut store = MemoryStore::seeded();
  let before = store.len();
  store.append(CoffeeRecord::new(42, "Nordic", Roast::Light));
  assert_eq!(store.len(), before + 1);
  assert_eq!(store.all()[0].name, "Nordic");
}

#[test]
fn append_does_not_check_id_uniqueness() {
  let mut store = MemoryStore::new();
  store.append(CoffeeRecord::new(1, "A", Roast::Dark));
  store.append(CoffeeRecord::new(1, "B", Roast::Dark));
  assert_eq!(store.len(), 2);
  assert_eq!(store.all()[0].name, "B");
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn roast_parse_is_case_sensitive() {
  assert_eq!("dark".parse::<Roast>().unwrap(), Roast::Dark);
  assert!("Dark".parse::<Roast>().is_err());
  assert!(matches!(
    "Dark".parse::<RoastFilter>(),
    Err(Error::UnknownRoastFilter(_))
  ));
}

#[test]
fn roast_filter_parses_sentinel_and_roasts() {
  assert_eq!("all".parse::<RoastFilter>().unwrap(), RoastFilter::All);
  assert_eq!(
    "medium".parse::<RoastFilter>().unwrap(),
    RoastFilter::Only(Roast::Medium)
  );
  assert!(matches!(
    "ALL".parse::<RoastFilter>(),
    Err(Error::UnknownRoastFilter(_))
  ));
  assert_eq!(RoastFilter::Only(Roast::Light).to_string(), "light");
}

#[test]
fn roast_serializes_lowercase() {
  let json = serde_json::to_string(&CoffeeRecord::new(6, "Vienna", Roast::Dark)).unwrap();
  assert_eq!(json, r#"{"id":6,"name":"Vienna","roast":"dark"}"#);
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn visible_is_subsequence_of_store() {
  let store = MemoryStore::seeded();
  let all = store.all();
  for roast in RoastFilter::OPTIONS {
    for name in ["", "c", "city", "ROAST", "zzz"] {
      let visible = compute_visible(all, &query(name, roast));
      let mut cursor = all.iter();
      for record in visible {
        assert!(
          cursor.any(|r| r == record),
          "{record:?} out of order or foreign for {name:?}/{roast}"
        );
      }
    }
  }
}

#[test]
fn roast_filter_is_exact_match() {
  let records = [CoffeeRecord::new(1, "Sample", Roast::Light)];
  let dark = compute_visible(&records, &query("", RoastFilter::Only(Roast::Dark)));
  let light = compute_visible(&records, &query("", RoastFilter::Only(Roast::Light)));
  let all = compute_visible(&records, &query("", RoastFilter::All));
  assert!(dark.is_empty());
  assert_eq!(light.len(), 1);
  assert_eq!(all.len(), 1);
}

#[test]
fn name_filter_is_case_insensitive_substring() {
  let store = MemoryStore::seeded();
  let visible = compute_visible(store.all(), &query("city", RoastFilter::All));
  assert_eq!(names(&visible), ["City", "Full City", "Half City", "Light City"]);

  let upper = compute_visible(store.all(), &query("CiTy", RoastFilter::All));
  assert_eq!(names(&upper), names(&visible));
}

#[test]
fn name_filter_matches_inside_words() {
  let store = MemoryStore::seeded();
  let visible = compute_visible(store.all(), &query("nna", RoastFilter::All));
  assert_eq!(names(&visible), ["Vienna"]);
}

#[test]
fn compute_visible_is_idempotent() {
  let store = MemoryStore::seeded();
  let q = query("i", RoastFilter::Only(Roast::Light));
  assert_eq!(compute_visible(store.all(), &q), compute_visible(store.all(), &q));
}

// ─── Rendering ───────────────────────────────────────────────────────────────

#[test]
fn render_empty_is_single_message() {
  let view = render(std::iter::empty());
  assert_eq!(view, ListView::Empty { message: EMPTY_MESSAGE, hint: EMPTY_HINT });
  assert!(view.cards().is_empty());
}

#[test]
fn render_one_card_per_record_in_order() {
  let records = seed::seed_records();
  let view = render(&records);
  let cards = view.cards();
  assert_eq!(cards.len(), records.len());
  for (card, record) in cards.iter().zip(&records) {
    assert_eq!(card.id, record.id);
    assert_eq!(card.name, record.name);
    assert_eq!(card.badge, Badge::from(record.roast));
  }
  assert_eq!(cards[0].id_label(), "ID: 1");
}

#[test]
fn badge_colours_follow_roast() {
  assert_eq!(Badge::from(Roast::Light), Badge::Warm);
  assert_eq!(Badge::from(Roast::Medium), Badge::Blue);
  assert_eq!(Badge::from(Roast::Dark), Badge::Inverse);
}

// ─── Controller ──────────────────────────────────────────────────────────────

#[test]
fn initial_view_shows_every_seed_record() {
  let c = controller();
  assert_eq!(c.view().cards().len(), 7);
  assert_eq!(c.view().cards()[0].name, "Cinnamon");
}

#[test]
fn add_blank_name_is_rejected() {
  let mut c = controller();
  let before = c.store().len();
  for blank in ["", "   ", "\t\n"] {
    assert_eq!(c.add(blank, Roast::Dark), Err(AddError::EmptyName));
  }
  assert_eq!(c.store().len(), before);
}

#[test]
fn handle_add_keeps_form_on_rejection() {
  let mut c = controller();
  c.set_focus(Field::AddRoast);
  c.set_add_name("  ");
  c.set_add_roast(Roast::Dark);
  assert_eq!(c.handle_add(), Err(AddError::EmptyName));
  assert_eq!(c.add_name(), "  ");
  assert_eq!(c.add_roast(), Roast::Dark);
  assert_eq!(c.focus(), Field::AddRoast);
}

#[test]
fn add_prepends_and_resets_form() {
  let mut c = controller();
  let before = c.store().len();
  c.set_focus(Field::AddRoast);
  c.set_add_name("  Nordic  ");
  c.set_add_roast(Roast::Dark);

  let record = c.handle_add().unwrap();
  assert_eq!(record.name, "Nordic");
  assert_eq!(record.roast, Roast::Dark);
  assert_eq!(record.id, CoffeeId(1_001));

  assert_eq!(c.store().len(), before + 1);
  assert_eq!(c.store().all()[0], record);
  assert_eq!(c.add_name(), "");
  assert_eq!(c.add_roast(), Roast::Light);
  assert_eq!(c.focus(), Field::AddName);
}

#[test]
fn add_rerenders_with_current_filters() {
  let mut c = controller();
  c.set_roast_filter(RoastFilter::Only(Roast::Dark));
  c.add("Nordic", Roast::Light).unwrap();
  assert!(c.view().cards().iter().all(|card| card.roast == Roast::Dark));

  c.add("Espresso", Roast::Dark).unwrap();
  assert_eq!(c.view().cards()[0].name, "Espresso");
}

#[test]
fn submit_filter_changes_nothing() {
  let mut c = controller();
  c.set_name_query("city");
  let before = c.view().clone();
  assert_eq!(c.submit().unwrap(), None);
  assert_eq!(c.view(), &before);
}

#[test]
fn typing_into_name_filter_refilters_each_keystroke() {
  let mut c = controller();
  c.type_char('v');
  assert_eq!(c.view().cards().len(), 1);
  c.type_char('x');
  assert!(c.view().is_empty());
  c.backspace();
  assert_eq!(c.view().cards()[0].name, "Vienna");
}

#[test]
fn cycling_selectors() {
  let mut c = controller();
  c.set_focus(Field::FilterRoast);
  c.cycle(true);
  assert_eq!(c.query().roast, RoastFilter::Only(Roast::Light));
  assert_eq!(c.view().cards().len(), 3);
  c.cycle(false);
  c.cycle(false);
  assert_eq!(c.query().roast, RoastFilter::Only(Roast::Dark));

  c.focus_next();
  c.focus_next();
  assert_eq!(c.focus(), Field::AddRoast);
  c.cycle(false);
  assert_eq!(c.add_roast(), Roast::Dark);
  c.focus_next();
  assert_eq!(c.focus(), Field::FilterName);
}

#[test]
fn timestamp_ids_never_repeat() {
  let mut ids = TimestampIds::new();
  let mut last = ids.next_id();
  for _ in 0..100 {
    let id = ids.next_id();
    assert!(id > last);
    last = id;
  }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn scenario_filter_by_name_french() {
  let mut c = controller();
  c.set_name_query("french");
  let visible = c.visible();
  assert_eq!(visible.len(), 1);
  assert_eq!(visible[0].name, "French Roast");
  assert_eq!(visible[0].roast, Roast::Dark);
}

#[test]
fn scenario_filter_light_roast() {
  let mut c = controller();
  c.set_roast_filter(RoastFilter::Only(Roast::Light));
  assert_eq!(names(&c.visible()), ["Cinnamon", "Half City", "Light City"]);
}

#[test]
fn scenario_add_then_filter_light() {
  let mut c = controller();
  c.add("Nordic", Roast::Light).unwrap();
  c.set_roast_filter(RoastFilter::Only(Roast::Light));
  assert_eq!(names(&c.visible()), [
    "Nordic",
    "Cinnamon",
    "Half City",
    "Light City"
  ]);
}

#[test]
fn scenario_no_match_shows_empty_state() {
  let mut c = controller();
  let view = c.set_name_query("xyz");
  assert!(view.is_empty());
  assert!(view.cards().is_empty());
  assert!(matches!(view, ListView::Empty { message, .. } if *message == EMPTY_MESSAGE));
}
