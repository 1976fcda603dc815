//! Entry form: name, quantity and unit fields.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use shoplist_core::{EntryForm, FormField};

const LABEL_WIDTH: u16 = 10;

/// Form view state
#[derive(Debug, Default)]
pub struct FormView {
    /// Field receiving typed characters
    pub focus: FormField,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Render the form; `editing` highlights the focused field and places
    /// the cursor at the end of its text.
    pub fn render(&self, frame: &mut Frame, area: Rect, form: &EntryForm, editing: bool) {
        let lines: Vec<Line> = FormField::ALL
            .iter()
            .map(|&field| {
                let focused = editing && field == self.focus;
                let label_style = if focused {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH as usize),
                        label_style,
                    ),
                    Span::raw(form.field(field).to_string()),
                ])
            })
            .collect();

        let title = if editing {
            "Add item (Enter to add, Tab next field, Esc done)"
        } else {
            "Add item (i to edit)"
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        if editing {
            let row = FormField::ALL
                .iter()
                .position(|&f| f == self.focus)
                .unwrap_or(0) as u16;
            let text_width = form.field(self.focus).chars().count() as u16;
            let x = (area.x + 1 + LABEL_WIDTH + text_width).min(area.right().saturating_sub(2));
            let y = area.y + 1 + row;
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut view = FormView::new();
        assert_eq!(view.focus, FormField::Name);
        view.focus_prev();
        assert_eq!(view.focus, FormField::Unit);
        view.focus_next();
        assert_eq!(view.focus, FormField::Name);
    }
}
