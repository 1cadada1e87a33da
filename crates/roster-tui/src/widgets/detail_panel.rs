//! Primary panel: header for the disclosed role and its edit form

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use roster_app::{FormState, PanelContent};
use roster_core::{FormField, RoleDraft};

use super::fit;
use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 18;

/// Primary panel widget
pub struct DetailPanel<'a> {
    content: &'a PanelContent,
    form: &'a FormState,
    date_format: &'a str,
    nested_open: bool,
}

impl<'a> DetailPanel<'a> {
    pub fn new(content: &'a PanelContent, form: &'a FormState, date_format: &'a str) -> Self {
        Self {
            content,
            form,
            date_format,
            nested_open: false,
        }
    }

    pub fn nested_open(mut self, open: bool) -> Self {
        self.nested_open = open;
        self
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(
            self.content.title.clone(),
            styles::text_bright_bold(),
        )];
        if let Some(subtitle) = &self.content.subtitle {
            lines.push(Line::styled(subtitle.clone(), styles::text_secondary()));
        }
        if !self.content.badges.is_empty() {
            let mut spans = Vec::new();
            for badge in &self.content.badges {
                spans.push(Span::styled(
                    format!(" {badge} "),
                    Style::default().fg(palette::CONTRAST_FG).bg(palette::STATUS_INDIGO),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    fn field_value(&self, draft: &RoleDraft, field: FormField) -> String {
        let date = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format(self.date_format).to_string())
                .unwrap_or_else(|| "(empty)".to_string())
        };
        let flag = |b: bool| String::from(if b { "[x]" } else { "[ ]" });
        match field {
            FormField::Start => date(draft.start),
            FormField::End => date(draft.end),
            FormField::Utilization => draft
                .utilization
                .map(|u| format!("{u}%"))
                .unwrap_or_else(|| "(empty)".to_string()),
            FormField::Reason => draft
                .reason
                .clone()
                .unwrap_or_else(|| "(none)".to_string()),
            FormField::HeadOffice => flag(draft.head_office),
            FormField::TeamLead => flag(draft.team_lead),
        }
    }

    fn form_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(FormField::ALL.len() + 1);
        for field in FormField::ALL {
            let focused = self.form.focus == Some(field);
            let marker = if focused { "▸ " } else { "  " };
            let value = self.field_value(&self.form.draft, field);

            let label_style = if focused {
                styles::accent()
            } else {
                styles::text_secondary()
            };
            let value_style = if focused {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(fit(field.label(), LABEL_WIDTH), label_style),
                Span::styled(format!(" {value} "), value_style),
            ]));

            if focused {
                if let Some(error) = &self.form.error {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                        Span::styled(format!("⚠ {error}"), styles::status_red()),
                    ]));
                }
            }
        }
        lines
    }

    fn footer(&self) -> Line<'static> {
        let details = if self.nested_open {
            " hide details  "
        } else {
            " details  "
        };
        Line::from(vec![
            Span::styled("s", styles::keybinding()),
            Span::styled(" save  ", styles::text_muted()),
            Span::styled("c", styles::keybinding()),
            Span::styled(" cancel  ", styles::text_muted()),
            Span::styled("e", styles::keybinding()),
            Span::styled(details, styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" field  ", styles::text_muted()),
            Span::styled("←/→", styles::keybinding()),
            Span::styled(" change", styles::text_muted()),
        ])
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(" Role ")
            .title_top(Line::styled(" [x] ", styles::text_muted()).right_aligned())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let header = self.header_lines();
        let [header_area, _, form_area, footer_area] = Layout::vertical([
            Constraint::Length(header.len() as u16),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(header).render(header_area, buf);
        Paragraph::new(self.form_lines()).render(form_area, buf);
        Paragraph::new(self.footer()).render(footer_area, buf);
    }
}
