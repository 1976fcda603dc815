//! Item list with per-row purchase state.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState as SelectionState},
    Frame,
};

use shoplist_core::{Item, ItemId};

/// List view state
#[derive(Debug, Default)]
pub struct ListView {
    /// Index of the highlighted row
    pub selected: usize,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self, count: usize) {
        self.selected = count.saturating_sub(1);
    }

    /// Keep the selection inside a list of `count` rows.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Id of the highlighted item.
    pub fn selected_id(&self, items: &[Item]) -> Option<ItemId> {
        items.get(self.selected).map(|item| item.id)
    }

    /// Render the item rows
    pub fn render(&self, frame: &mut Frame, area: Rect, items: &[Item]) {
        let block = Block::default()
            .title(format!("Shopping list ({})", items.len()))
            .borders(Borders::ALL);

        if items.is_empty() {
            let list = List::new(vec![ListItem::new(Span::styled(
                "Nothing to buy yet. Press i to add an item.",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(list, area);
            return;
        }

        let rows: Vec<ListItem> = items.iter().map(row).collect();
        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");

        let mut selection = SelectionState::default();
        selection.select(Some(self.selected.min(items.len() - 1)));
        frame.render_stateful_widget(list, area, &mut selection);
    }
}

fn row(item: &Item) -> ListItem<'static> {
    let (mark, label_style, hint) = if item.purchased {
        (
            "[x]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
            "space: restore",
        )
    } else {
        ("[ ]", Style::default(), "space: purchased")
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("#{:<4}", item.id), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{mark} ")),
        Span::styled(item.label(), label_style),
        Span::styled(format!("  ({hint})"), Style::default().fg(Color::DarkGray)),
    ]))
}
