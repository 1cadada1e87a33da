//! Master list of role assignments

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use roster_app::SelectionMode;
use roster_core::Record;

use super::fit;
use crate::theme::{palette, styles};

const NAME_WIDTH: usize = 24;
const DATES_WIDTH: usize = 24;
const REASON_WIDTH: usize = 24;

/// List of records with checkbox, active marker and cursor highlight
pub struct RecordList<'a> {
    records: &'a [Record],
    cursor: usize,
    mode: SelectionMode,
    date_format: &'a str,
    today: NaiveDate,
    focused: bool,
}

impl<'a> RecordList<'a> {
    pub fn new(records: &'a [Record], date_format: &'a str, today: NaiveDate) -> Self {
        Self {
            records,
            cursor: 0,
            mode: SelectionMode::default(),
            date_format,
            today,
            focused: true,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First visible row so the cursor stays on screen
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 || self.cursor < visible {
            0
        } else {
            self.cursor + 1 - visible
        }
    }

    fn row(&self, record: &Record, is_cursor: bool) -> Line<'static> {
        let status = record.status_on(self.today);

        let mut spans = Vec::with_capacity(12);
        if self.mode == SelectionMode::Multi {
            let check = if record.selected { "[x] " } else { "[ ] " };
            spans.push(Span::styled(check, styles::accent()));
        }
        spans.push(Span::styled(
            if record.active { "▶ " } else { "  " },
            styles::accent(),
        ));
        spans.push(Span::styled(
            fit(&record.name, NAME_WIDTH),
            styles::text_bright_bold(),
        ));
        spans.push(Span::styled(
            if record.team_lead { "TL " } else { "   " },
            Style::default().fg(palette::STATUS_INDIGO),
        ));
        spans.push(Span::styled(
            fit(&record.window.date_range(self.date_format), DATES_WIDTH),
            styles::text_secondary(),
        ));
        spans.push(Span::styled(
            fit(record.reason.as_deref().unwrap_or(""), REASON_WIDTH),
            styles::text_muted(),
        ));
        spans.push(Span::styled(
            if record.head_office { "HO " } else { "   " },
            Style::default().fg(palette::STATUS_YELLOW),
        ));
        spans.push(Span::styled(
            fit(
                &record
                    .utilization
                    .map(|u| format!("{u}%"))
                    .unwrap_or_default(),
                5,
            ),
            styles::text_primary(),
        ));
        spans.push(Span::styled(status.label(), styles::role_status(status)));

        let line = Line::from(spans);
        if is_cursor && self.focused {
            line.style(styles::focused_selected())
        } else if record.active {
            line.style(styles::active_row())
        } else {
            line
        }
    }
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(" Roles ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.records.is_empty() {
            Paragraph::new(Line::styled("  No roles assigned", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        let lines: Vec<Line> = self
            .records
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, record)| self.row(record, idx == self.cursor))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
