//! Nested panel: secondary details stacked next to the primary panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use roster_app::PanelContent;

use crate::theme::{palette, styles};

/// Nested panel widget
pub struct NestedPanel<'a> {
    content: &'a PanelContent,
}

impl<'a> NestedPanel<'a> {
    pub fn new(content: &'a PanelContent) -> Self {
        Self { content }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::styled(
            self.content.title.clone(),
            styles::text_bright_bold(),
        )];
        if let Some(subtitle) = &self.content.subtitle {
            lines.push(Line::styled(subtitle.clone(), styles::text_secondary()));
        }

        for section in &self.content.sections {
            lines.push(Line::default());
            lines.push(Line::styled(section.heading.to_uppercase(), styles::accent()));
            // Facets stack key over value
            for facet in &section.facets {
                lines.push(Line::styled(facet.key.clone(), styles::text_muted()));
                lines.push(Line::from(Span::styled(
                    format!("  {}", facet.value),
                    styles::text_primary(),
                )));
            }
        }
        lines
    }
}

impl Widget for NestedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Details ")
            .title_bottom(Line::styled(" e/Esc close ", styles::text_muted()).right_aligned())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, test_records, TestTerminal};
    use roster_app::{PanelContentProvider, RolePanelProvider};

    fn render_record(idx: usize) -> TestTerminal {
        let record = &test_records()[idx];
        let content =
            RolePanelProvider::with_today("%d.%m.%Y", date(2024, 6, 1)).build_nested(record);
        let mut term = TestTerminal::with_size(40, 24);
        term.render_widget(NestedPanel::new(&content), term.area());
        term
    }

    #[test]
    fn test_renders_title_and_sections() {
        let term = render_record(0);
        assert!(term.buffer_contains("Details: Product Owner"));
        assert!(term.buffer_contains("ORGANISATION"));
        assert!(term.buffer_contains("VALIDITY"));
    }

    #[test]
    fn test_facet_value_below_key() {
        let term = render_record(0);
        let key = term.find_line("Remaining").expect("remaining facet");
        assert!(term.line_contains(key + 1, "213 days"));
    }

    #[test]
    fn test_open_ended_record() {
        let term = render_record(1);
        assert!(term.buffer_contains("Open-ended"));
        assert!(term.buffer_contains("Ongoing"));
    }
}
