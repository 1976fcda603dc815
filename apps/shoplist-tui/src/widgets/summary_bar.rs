//! Purchase progress gauge labelled with the list summary.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Gauge, Widget},
};

use shoplist_core::{Progress, Summary};

/// Progress gauge; renders nothing for an empty list.
pub struct SummaryBar {
    summary: Summary,
    progress: Progress,
}

impl SummaryBar {
    pub fn new(summary: Summary, progress: Progress) -> Self {
        Self { summary, progress }
    }

    fn color(&self) -> Color {
        match self.summary {
            Summary::AllPurchased => Color::Green,
            _ => Color::Cyan,
        }
    }
}

impl Widget for SummaryBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(message) = self.summary.message() else {
            return;
        };

        let label = format!(
            "{} ({}/{})",
            message, self.progress.purchased, self.progress.total
        );
        Gauge::default()
            .gauge_style(Style::default().fg(self.color()).bg(Color::Black))
            .ratio(self.progress.fraction())
            .label(label)
            .render(area, buf);
    }
}
