//! TUI rendering — orchestrates all panes.

pub mod coffee_list;
pub mod forms;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use roastery_core::controller::Field;

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  if let Some(message) = &app.alert {
    draw_alert(f, area, message);
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " roastery  [Tab] next field  [Esc] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(Color::Gray));

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Forms on the left at a fixed width, cards take the rest.
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Length(38), Constraint::Min(0)])
    .split(area);

  forms::draw(f, cols[0], app);
  coffee_list::draw(f, cols[1], app);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.controller.focus() {
    _ if app.alert.is_some() => ("ALERT", "Enter/Esc dismiss"),
    Field::FilterName => ("FILTER", "Type to filter by name  Tab next  ↑↓ scroll"),
    Field::FilterRoast => ("FILTER", "←→/Space change roast  Tab next  ↑↓ scroll"),
    Field::AddName => ("ADD", "Type a name  Enter add  Tab next"),
    Field::AddRoast => ("ADD", "←→/Space change roast  Enter add  Tab next"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(format!("  {status}"), Style::default().fg(Color::Gray));

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Alert ────────────────────────────────────────────────────────────────────

fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
  let popup = centered(area, 44, 6);
  let block = Block::default()
    .title(" Alert ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Yellow));

  let lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      message.to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::DarkGray))),
  ];

  f.render_widget(Clear, popup);
  f.render_widget(
    Paragraph::new(lines)
      .block(block)
      .alignment(Alignment::Center)
      .wrap(Wrap { trim: true }),
    popup,
  );
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
