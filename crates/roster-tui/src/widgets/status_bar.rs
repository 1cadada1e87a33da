//! Status bar: transient notification or contextual key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use roster_app::AppState;

use crate::theme::{palette, styles};

/// Bottom status line
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let disclosure = self.state.coordinator.state();
        let mut hints = vec![("↑/↓", "move"), ("Enter", "open")];
        if self.state.coordinator.mode() == roster_app::SelectionMode::Multi {
            hints.push(("Space", "check"));
        }
        if disclosure.primary_panel_open() {
            hints.push(("Esc", "close"));
        }
        hints.push(("m", "mode"));
        if self.state.view.remove_enabled {
            hints.push(("d", "remove"));
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let line = match &self.state.notification {
            Some(note) => Line::from(Span::styled(
                format!(" {}", note.message),
                styles::notification(note.level),
            )),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in self.hints() {
                    spans.push(Span::styled(key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
                }
                Line::from(spans)
            }
        };

        Paragraph::new(line).render(area, buf);
    }
}
