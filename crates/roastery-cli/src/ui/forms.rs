//! Filter and add forms — left panel.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};
use roastery_core::{
  coffee::{Roast, RoastFilter},
  controller::Field,
};
use strum::IntoEnumIterator as _;

use crate::app::App;

// ─── Public entry ─────────────────────────────────────────────────────────────

/// Render both forms into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(4), // filter form
      Constraint::Length(4), // add form
      Constraint::Min(0),
    ])
    .split(area);

  let c = &app.controller;
  let focus = c.focus();

  let roast_filter: Vec<String> = RoastFilter::OPTIONS.iter().map(ToString::to_string).collect();
  draw_form(f, rows[0], " Filter ", focus, [
    (Field::FilterName, "Name ", text_value(&c.query().name, focus == Field::FilterName)),
    (
      Field::FilterRoast,
      "Roast",
      selector_value(&roast_filter, &c.query().roast.to_string()),
    ),
  ]);

  let roasts: Vec<String> = Roast::iter().map(|r| r.to_string()).collect();
  draw_form(f, rows[1], " Add a coffee ", focus, [
    (Field::AddName, "Name ", text_value(c.add_name(), focus == Field::AddName)),
    (Field::AddRoast, "Roast", selector_value(&roasts, &c.add_roast().to_string())),
  ]);
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn draw_form(
  f: &mut Frame,
  area: Rect,
  title: &str,
  focus: Field,
  fields: [(Field, &str, Vec<Span<'static>>); 2],
) {
  let owns_focus = fields.iter().any(|(field, _, _)| *field == focus);
  let border = if owns_focus { Color::Cyan } else { Color::DarkGray };
  let block = Block::default()
    .title(title.to_string())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let lines: Vec<Line> = fields
    .into_iter()
    .map(|(field, label, value)| {
      let label_style = if field == focus {
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::Gray)
      };
      let mut spans = vec![Span::styled(format!("{label}  "), label_style)];
      spans.extend(value);
      Line::from(spans)
    })
    .collect();

  f.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_value(text: &str, focused: bool) -> Vec<Span<'static>> {
  let mut spans = vec![Span::styled(text.to_string(), Style::default().fg(Color::White))];
  if focused {
    spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
  }
  spans
}

/// All options on one line, the selected one highlighted.
fn selector_value(options: &[String], selected: &str) -> Vec<Span<'static>> {
  let mut spans = Vec::with_capacity(options.len() * 2);
  for option in options {
    let style = if option == selected {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(option.clone(), style));
    spans.push(Span::raw(" "));
  }
  spans
}
