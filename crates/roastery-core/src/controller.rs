//! View controller — owns the store and the page inputs, and keeps the
//! rendered [`ListView`] in sync with them.
//!
//! Every operation is a synchronous callback: the host invokes it for one
//! input event and it runs to completion, re-rendering where needed, before
//! the next event is handled.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
  AddError,
  coffee::{CoffeeId, CoffeeRecord, FilterQuery, Roast, RoastFilter},
  store::{CoffeeStore, MemoryStore},
  view::{ListView, compute_visible, render},
};

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Supplies ids for records created by the add form.
pub trait IdSource {
  fn next_id(&mut self) -> CoffeeId;
}

/// Wall-clock millisecond ids.
///
/// If the clock has not advanced past the last issued id (two adds in the
/// same millisecond, or the clock stepping backwards) the previous id plus
/// one is issued instead, so ids stay unique for the session.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
  last: Option<i64>,
}

impl TimestampIds {
  pub fn new() -> Self { Self::default() }
}

impl IdSource for TimestampIds {
  fn next_id(&mut self) -> CoffeeId {
    let now = Utc::now().timestamp_millis();
    let id = match self.last {
      Some(last) if now <= last => last + 1,
      _ => now,
    };
    self.last = Some(id);
    CoffeeId(id)
  }
}

// ─── Fields ──────────────────────────────────────────────────────────────────

/// The input controls on the page, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Field {
  /// Name filter text input.
  #[default]
  FilterName,
  /// Roast filter selector (`all`, `light`, `medium`, `dark`).
  FilterRoast,
  /// Add-form name text input.
  AddName,
  /// Add-form roast selector.
  AddRoast,
}

impl Field {
  pub const ALL: [Field; 4] =
    [Field::FilterName, Field::FilterRoast, Field::AddName, Field::AddRoast];

  pub fn next(self) -> Self { self.step(1) }

  pub fn prev(self) -> Self { self.step(Self::ALL.len() - 1) }

  pub fn is_text(self) -> bool { matches!(self, Self::FilterName | Self::AddName) }

  fn step(self, by: usize) -> Self {
    let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
    Self::ALL[(i + by) % Self::ALL.len()]
  }
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Page state: filter inputs, add-form inputs, focus, and the current view.
#[derive(Debug)]
pub struct ViewController<S = MemoryStore, I = TimestampIds> {
  store:     S,
  ids:       I,
  query:     FilterQuery,
  add_name:  String,
  add_roast: Roast,
  focus:     Field,
  view:      ListView,
}

impl ViewController<MemoryStore, TimestampIds> {
  /// The startup page: sorted seed records, rendered unfiltered.
  pub fn seeded() -> Self { Self::new(MemoryStore::seeded(), TimestampIds::new()) }
}

impl<S: CoffeeStore, I: IdSource> ViewController<S, I> {
  /// Create a controller and render the whole store without filters.
  pub fn new(store: S, ids: I) -> Self {
    let view = render(store.all());
    Self {
      store,
      ids,
      query: FilterQuery::default(),
      add_name: String::new(),
      add_roast: Roast::Light,
      focus: Field::FilterName,
      view,
    }
  }

  /// Start with the given filter values already applied.
  pub fn with_query(mut self, query: FilterQuery) -> Self {
    self.query = query;
    self.refresh();
    self
  }

  // ── Accessors ─────────────────────────────────────────────────────────

  pub fn store(&self) -> &S { &self.store }

  pub fn query(&self) -> &FilterQuery { &self.query }

  /// The most recently rendered list.
  pub fn view(&self) -> &ListView { &self.view }

  pub fn focus(&self) -> Field { self.focus }

  pub fn add_name(&self) -> &str { &self.add_name }

  pub fn add_roast(&self) -> Roast { self.add_roast }

  /// Records passing the current filters, in store order.
  pub fn visible(&self) -> Vec<&CoffeeRecord> {
    compute_visible(self.store.all(), &self.query)
  }

  // ── Filter form ───────────────────────────────────────────────────────

  /// Name filter input changed (fires on every keystroke).
  pub fn set_name_query(&mut self, text: impl Into<String>) -> &ListView {
    self.query.name = text.into();
    self.refresh();
    &self.view
  }

  /// Roast filter selector changed.
  pub fn set_roast_filter(&mut self, roast: RoastFilter) -> &ListView {
    self.query.roast = roast;
    self.refresh();
    &self.view
  }

  /// Filter form submitted. Filtering is live, so this does nothing.
  pub fn submit_filter(&self) -> &ListView { &self.view }

  // ── Add form ──────────────────────────────────────────────────────────

  pub fn set_add_name(&mut self, text: impl Into<String>) { self.add_name = text.into(); }

  pub fn set_add_roast(&mut self, roast: Roast) { self.add_roast = roast; }

  /// Add form submitted with its current inputs.
  pub fn handle_add(&mut self) -> Result<CoffeeRecord, AddError> {
    let name = std::mem::take(&mut self.add_name);
    let roast = self.add_roast;
    let result = self.add(&name, roast);
    if result.is_err() {
      // Rejected submissions leave the form as the user typed it.
      self.add_name = name;
    }
    result
  }

  /// Create a record from raw form inputs.
  ///
  /// Fails with [`AddError::EmptyName`] when `name_input` is blank after
  /// trimming; nothing changes in that case. On success the record goes to
  /// the front of the store, the add form resets (empty name, `light`
  /// roast, focus on the name field) and the list re-renders with the
  /// current filters.
  pub fn add(&mut self, name_input: &str, roast: Roast) -> Result<CoffeeRecord, AddError> {
    let name = name_input.trim();
    if name.is_empty() {
      warn!("rejected add: blank name");
      return Err(AddError::EmptyName);
    }

    let record = CoffeeRecord { id: self.ids.next_id(), name: name.to_string(), roast };
    info!(id = %record.id, name = %record.name, roast = %record.roast, "coffee added");
    self.store.append(record.clone());

    self.add_name.clear();
    self.add_roast = Roast::Light;
    self.focus = Field::AddName;
    self.refresh();
    Ok(record)
  }

  // ── Generic input events ──────────────────────────────────────────────

  pub fn set_focus(&mut self, field: Field) { self.focus = field; }

  pub fn focus_next(&mut self) { self.focus = self.focus.next(); }

  pub fn focus_prev(&mut self) { self.focus = self.focus.prev(); }

  /// A character typed into the focused field. Selectors ignore it.
  pub fn type_char(&mut self, c: char) {
    match self.focus {
      Field::FilterName => {
        let mut text = self.query.name.clone();
        text.push(c);
        self.set_name_query(text);
      }
      Field::AddName => self.add_name.push(c),
      Field::FilterRoast | Field::AddRoast => {}
    }
  }

  /// Backspace in the focused field. Selectors ignore it.
  pub fn backspace(&mut self) {
    match self.focus {
      Field::FilterName => {
        let mut text = self.query.name.clone();
        if text.pop().is_some() {
          self.set_name_query(text);
        }
      }
      Field::AddName => {
        self.add_name.pop();
      }
      Field::FilterRoast | Field::AddRoast => {}
    }
  }

  /// Step the focused selector forwards or backwards. Text fields ignore it.
  pub fn cycle(&mut self, forward: bool) {
    match self.focus {
      Field::FilterRoast => {
        let roast = self.query.roast;
        self.set_roast_filter(if forward { roast.next() } else { roast.prev() });
      }
      Field::AddRoast => {
        let roast = self.add_roast;
        self.add_roast = if forward { roast.next() } else { roast.prev() };
      }
      Field::FilterName | Field::AddName => {}
    }
  }

  /// Enter pressed: submits whichever form owns the focused field.
  pub fn submit(&mut self) -> Result<Option<CoffeeRecord>, AddError> {
    match self.focus {
      Field::FilterName | Field::FilterRoast => {
        self.submit_filter();
        Ok(None)
      }
      Field::AddName | Field::AddRoast => self.handle_add().map(Some),
    }
  }

  fn refresh(&mut self) {
    let visible = compute_visible(self.store.all(), &self.query);
    debug!(
      name = %self.query.name,
      roast = %self.query.roast,
      visible = visible.len(),
      "re-rendering list"
    );
    self.view = render(visible);
  }
}
