//! Application state and key dispatcher.
//!
//! All page logic lives in [`ViewController`]; this layer maps key presses
//! onto its callbacks and owns the pieces that only exist in a terminal: the
//! blocking alert, the status line and list scrolling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roastery_core::controller::ViewController;

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Store, filters, add form and the current list view.
  pub controller: ViewController,

  /// A pending alert. While set, all other input is blocked until dismissed.
  pub alert: Option<String>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Index of the first card drawn in the list pane.
  pub list_scroll: usize,
}

impl App {
  pub fn new(controller: ViewController) -> Self {
    Self {
      controller,
      alert: None,
      status_msg: String::new(),
      list_scroll: 0,
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.alert.is_some() {
      self.handle_alert_key(key);
      return true;
    }

    let before = self.controller.view().cards().len();

    match key.code {
      KeyCode::Esc => return false,

      // Focus
      KeyCode::Tab => self.controller.focus_next(),
      KeyCode::BackTab => self.controller.focus_prev(),

      // Forms
      KeyCode::Enter => self.submit(),
      KeyCode::Backspace => self.controller.backspace(),
      KeyCode::Left => self.controller.cycle(false),
      KeyCode::Right => self.controller.cycle(true),
      KeyCode::Char(' ') if !self.controller.focus().is_text() => self.controller.cycle(true),
      KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
        self.controller.type_char(c)
      }

      // List scrolling
      KeyCode::Down | KeyCode::PageDown => {
        if self.list_scroll + 1 < before {
          self.list_scroll += 1;
        }
      }
      KeyCode::Up | KeyCode::PageUp => {
        self.list_scroll = self.list_scroll.saturating_sub(1);
      }

      _ => {}
    }

    // A re-render replaces the whole list; start it from the top.
    let after = self.controller.view().cards().len();
    if after != before || self.list_scroll >= after.max(1) {
      self.list_scroll = 0;
    }
    true
  }

  fn handle_alert_key(&mut self, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
      self.alert = None;
    }
  }

  fn submit(&mut self) {
    match self.controller.submit() {
      Ok(Some(record)) => {
        self.status_msg = format!("Added {} ({}), id {}", record.name, record.roast, record.id);
      }
      Ok(None) => {}
      Err(e) => {
        self.status_msg.clear();
        self.alert = Some(e.to_string());
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use roastery_core::{
    coffee::{Roast, RoastFilter},
    controller::Field,
    store::CoffeeStore,
  };

  use super::*;

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
      assert!(app.handle_key(key(KeyCode::Char(c))));
    }
  }

  fn app() -> App { App::new(ViewController::seeded()) }

  #[test]
  fn typing_filters_live() {
    let mut app = app();
    type_str(&mut app, "french");
    let cards = app.controller.view().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "French Roast");
  }

  #[test]
  fn enter_in_filter_form_is_suppressed() {
    let mut app = app();
    type_str(&mut app, "city");
    let before = app.controller.view().clone();
    assert!(app.handle_key(key(KeyCode::Enter)));
    assert_eq!(app.controller.view(), &before);
    assert!(app.alert.is_none());
  }

  #[test]
  fn roast_selector_cycles_with_arrows() {
    let mut app = app();
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.controller.focus(), Field::FilterRoast);
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.controller.query().roast, RoastFilter::Only(Roast::Light));
    app.handle_key(key(KeyCode::Char(' ')));
    assert_eq!(app.controller.query().roast, RoastFilter::Only(Roast::Medium));
  }

  #[test]
  fn blank_add_raises_blocking_alert() {
    let mut app = app();
    app.controller.set_focus(Field::AddName);
    type_str(&mut app, "   ");
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.alert.as_deref(), Some("Please enter a coffee name."));
    assert_eq!(app.controller.store().len(), 7);

    // Input is swallowed until the alert is dismissed.
    app.handle_key(key(KeyCode::Char('x')));
    assert_eq!(app.controller.add_name(), "   ");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.alert.is_none());
  }

  #[test]
  fn add_via_keys() {
    let mut app = app();
    app.controller.set_focus(Field::AddName);
    type_str(&mut app, "Nordic");
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Right));
    assert_eq!(app.controller.add_roast(), Roast::Medium);
    app.handle_key(key(KeyCode::Enter));

    assert!(app.alert.is_none());
    assert_eq!(app.controller.store().len(), 8);
    assert_eq!(app.controller.store().all()[0].name, "Nordic");
    assert_eq!(app.controller.focus(), Field::AddName);
    assert_eq!(app.controller.add_roast(), Roast::Light);
    assert!(app.status_msg.starts_with("Added Nordic (medium)"));
  }

  #[test]
  fn esc_and_ctrl_c_quit() {
    let mut app = app();
    assert!(!app.handle_key(key(KeyCode::Esc)));
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
  }

  #[test]
  fn chorded_keys_are_not_typed() {
    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
    app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
    assert_eq!(app.controller.query().name, "");
    assert_eq!(app.controller.view().cards().len(), 7);

    app.handle_key(KeyEvent::new(KeyCode::Char('V'), KeyModifiers::SHIFT));
    assert_eq!(app.controller.query().name, "V");
  }

  #[test]
  fn esc_dismisses_alert_before_quitting() {
    let mut app = app();
    app.alert = Some("Please enter a coffee name.".into());
    assert!(app.handle_key(key(KeyCode::Esc)));
    assert!(app.alert.is_none());
  }

  #[test]
  fn scroll_resets_when_list_changes() {
    let mut app = app();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.list_scroll, 2);
    type_str(&mut app, "v");
    assert_eq!(app.list_scroll, 0);
  }
}
