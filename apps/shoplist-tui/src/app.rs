//! Application state and main render loop

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{debug, info};

use shoplist_core::{parse_command, Command, ListEvent, ListState};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::Mode;
use crate::views::{FormView, ListView};
use crate::widgets::{ModeIndicator, SummaryBar};

/// Main application state
pub struct App {
    /// Current mode (NORMAL, INSERT, COMMAND)
    pub mode: Mode,
    /// The shopping list for this session
    pub list: ListState,
    /// Command input buffer
    pub command_buffer: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether to show the help overlay
    pub show_help: bool,
    pub form_view: FormView,
    pub list_view: ListView,
}

impl App {
    /// Create a new application instance with an empty list
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            list: ListState::new(),
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            form_view: FormView::new(),
            list_view: ListView::new(),
        }
    }

    /// Render the application
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Length(5), // Entry form
                Constraint::Length(1), // Validation error
                Constraint::Min(3),    // Items
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Command line
            ])
            .split(size);

        self.render_status_bar(frame, chunks[0]);
        self.form_view.render(
            frame,
            chunks[1],
            self.list.form(),
            self.mode == Mode::Insert,
        );
        self.render_error(frame, chunks[2]);
        self.list_view.render(frame, chunks[3], self.list.items());
        frame.render_widget(
            SummaryBar::new(self.list.summary(), self.list.progress()),
            chunks[4],
        );
        self.render_command_line(frame, chunks[5]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let summary = self.list.summary().message().unwrap_or_default();
        let line = Line::from(vec![
            ModeIndicator::new(self.mode).as_span(),
            Span::styled(" shoplist ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| "),
            Span::styled(summary, Style::default().fg(Color::Cyan)),
        ]);
        let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(status_bar, area);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect) {
        if let Some(message) = self.list.error_message() {
            let paragraph = Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(paragraph, area);
        }
    }

    fn render_command_line(&self, frame: &mut Frame, area: Rect) {
        let content = match self.mode {
            Mode::Command => format!(":{}", self.command_buffer),
            _ => self
                .status_message
                .clone()
                .unwrap_or_else(|| "Press i to add | space to toggle | d to delete | ? for help".to_string()),
        };
        frame.render_widget(Paragraph::new(content), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
shoplist - Help

List (NORMAL mode):
  j/k     - Move down/up
  g/G     - First/last item
  Space/x - Mark purchased / restore
  d/Del   - Delete item
  i/a     - Edit the entry form
  :       - Command mode
  ?       - Toggle this help
  q       - Quit

Entry form (INSERT mode):
  Tab/Down    - Next field
  S-Tab/Up    - Previous field
  Enter       - Add item
  Esc         - Back to the list

Commands:
  :add <name> | <quantity> | <unit>
  :toggle <id>    :delete <id>
  :help           :q
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        frame.render_widget(Paragraph::new(help_text).block(block), help_area);
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Insert => self.handle_insert_key(code, modifiers),
            Mode::Command => self.handle_command_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        let Some(action) = normal_mode_action(code) else {
            return false;
        };

        match action {
            Action::Quit => return true,
            Action::EnterCommandMode => {
                self.mode = Mode::Command;
                self.command_buffer.clear();
            }
            Action::EnterInsertMode => {
                self.mode = Mode::Insert;
                self.show_help = false;
                self.status_message = Some("Insert mode".to_string());
            }
            Action::Cancel => {
                self.show_help = false;
                self.status_message = None;
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::MoveDown => self.list_view.next(self.list.len()),
            Action::MoveUp => self.list_view.prev(),
            Action::MoveFirst => self.list_view.first(),
            Action::MoveLast => self.list_view.last(self.list.len()),
            Action::TogglePurchased => {
                if let Some(id) = self.list_view.selected_id(self.list.items()) {
                    self.run(Command::TogglePurchased { id });
                }
            }
            Action::Delete => {
                if let Some(id) = self.list_view.selected_id(self.list.items()) {
                    self.run(Command::DeleteItem { id });
                }
            }
        }
        false
    }

    fn handle_insert_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.status_message = Some("Normal mode".to_string());
            }
            KeyCode::Tab | KeyCode::Down => self.form_view.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form_view.focus_prev(),
            KeyCode::Enter => self.run(Command::SubmitForm),
            KeyCode::Backspace => {
                self.list.form_mut().field_mut(self.form_view.focus).pop();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.list.form_mut().field_mut(self.form_view.focus).push(c);
            }
            _ => {}
        }
        false
    }

    fn handle_command_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                let should_quit = self.execute_command();
                self.mode = Mode::Normal;
                self.command_buffer.clear();
                if should_quit {
                    return true;
                }
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
        false
    }

    fn execute_command(&mut self) -> bool {
        let line = self.command_buffer.trim().to_string();
        match line.as_str() {
            "" => {}
            "q" | "quit" => return true,
            "help" => self.show_help = true,
            _ => match parse_command(&line) {
                Ok(command) => self.run(command),
                Err(err) => self.status_message = Some(err.to_string()),
            },
        }
        false
    }

    /// Execute a command against the list and reflect its events.
    fn run(&mut self, command: Command) {
        debug!(?command, "executing");
        let events = command.execute(&mut self.list);

        for event in &events {
            match event {
                ListEvent::ItemAdded(item) => {
                    info!(id = %item.id, name = %item.name, "item added");
                    self.form_view.focus = Default::default();
                }
                ListEvent::ItemDeleted(item) => info!(id = %item.id, "item deleted"),
                ListEvent::PurchasedToggled { id, purchased } => {
                    info!(id = %id, purchased, "purchased toggled")
                }
                ListEvent::ValidationFailed(err) => debug!(code = err.code(), "entry rejected"),
            }
        }

        self.list_view.clamp(self.list.len());
        self.status_message = events.last().map(ListEvent::describe);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
