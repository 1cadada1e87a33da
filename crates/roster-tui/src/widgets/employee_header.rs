//! Employee header card and the roles toolbar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use roster_app::SelectionMode;
use roster_core::Employee;

use crate::theme::{palette, styles};

/// Card showing who the listed roles belong to
pub struct EmployeeHeader<'a> {
    employee: &'a Employee,
}

impl<'a> EmployeeHeader<'a> {
    pub fn new(employee: &'a Employee) -> Self {
        Self { employee }
    }
}

impl Widget for EmployeeHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let initials = self.employee.initials();
        let avatar = if initials.is_empty() {
            " ?? ".to_string()
        } else {
            format!(" {} ", initials)
        };
        let status_style = if self.employee.status.eq_ignore_ascii_case("active") {
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::text_muted()
        };

        let name_line = Line::from(vec![
            Span::styled(avatar, styles::focused_selected()),
            Span::raw(" "),
            Span::styled(self.employee.full_name(), styles::text_bright_bold()),
            Span::raw("  "),
            Span::styled("● ", status_style),
            Span::styled(self.employee.status.clone(), status_style),
        ]);
        let detail_line = Line::from(vec![
            Span::raw("     "),
            Span::styled("Personal no. ", styles::text_muted()),
            Span::styled(self.employee.personal_number.clone(), styles::text_secondary()),
        ]);

        Paragraph::new(vec![name_line, detail_line]).render(inner, buf);
    }
}

/// One-line toolbar above the list
pub struct Toolbar {
    count: usize,
    mode: SelectionMode,
    remove_enabled: bool,
}

impl Toolbar {
    pub fn new(count: usize, mode: SelectionMode, remove_enabled: bool) -> Self {
        Self {
            count,
            mode,
            remove_enabled,
        }
    }
}

impl Widget for Toolbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let remove_style = if self.remove_enabled {
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::text_muted()
        };

        let line = Line::from(vec![
            Span::styled(" Assigned roles ", styles::text_bright_bold()),
            Span::styled(format!("({})", self.count), styles::text_muted()),
            Span::raw("   "),
            Span::styled("Mode: ", styles::text_muted()),
            Span::styled(self.mode.label(), styles::accent()),
            Span::raw("   "),
            Span::styled("[a]", styles::keybinding()),
            Span::styled(" Add  ", styles::text_secondary()),
            Span::styled("[d]", remove_style),
            Span::styled(" Remove", remove_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
