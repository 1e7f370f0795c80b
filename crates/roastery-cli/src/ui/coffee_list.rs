//! Coffee list pane — right panel, one card per visible record.

use ratatui::{
  Frame,
  layout::{Alignment, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use roastery_core::{
  coffee::RoastFilter,
  store::CoffeeStore as _,
  view::{Badge, Card, ListView},
};

use crate::app::App;

/// Render the current [`ListView`] into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let view = app.controller.view();
  let query = app.controller.query();
  let total = app.controller.store().len();

  // Title with count.
  let title = if !query.name.is_empty() || query.roast != RoastFilter::All {
    format!(" Coffees ({}/{}) ", view.cards().len(), total)
  } else {
    format!(" Coffees ({}) ", total)
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  match view {
    ListView::Empty { message, hint } => {
      let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
          *message,
          Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(*hint, Style::default().fg(Color::DarkGray))),
      ];
      f.render_widget(
        Paragraph::new(lines)
          .alignment(Alignment::Center)
          .wrap(Wrap { trim: true }),
        inner,
      );
    }
    ListView::Cards { cards } => {
      let items: Vec<ListItem> = cards.iter().map(card_item).collect();
      let mut state = ListState::default().with_offset(app.list_scroll);
      f.render_stateful_widget(List::new(items), inner, &mut state);
    }
  }
}

fn card_item(card: &Card) -> ListItem<'static> {
  ListItem::new(vec![
    Line::from(vec![
      Span::styled(
        card.name.clone(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(format!(" {} ", card.roast), badge_style(card.badge)),
    ]),
    Line::from(Span::styled(card.id_label(), Style::default().fg(Color::DarkGray))),
    Line::from(""),
  ])
}

/// Terminal colours for each badge family.
pub fn badge_style(badge: Badge) -> Style {
  match badge {
    Badge::Warm => Style::default().fg(Color::Black).bg(Color::LightYellow),
    Badge::Blue => Style::default().fg(Color::White).bg(Color::Blue),
    Badge::Inverse => Style::default().fg(Color::White).bg(Color::DarkGray),
  }
}
