//! Screen layout definitions for the TUI
//!
//! The list takes the full width while no panel is open. Opening the primary
//! panel splits the body horizontally; the nested panel then takes a share
//! of the detail area.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Employee header card
    pub header: Rect,
    /// "Assigned roles" toolbar
    pub toolbar: Rect,
    pub list: Rect,
    pub primary: Option<Rect>,
    pub nested: Option<Rect>,
    /// Notifications and key hints
    pub status: Rect,
}

/// Panel visibility and widths driving [`create`]
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    pub primary_open: bool,
    pub nested_open: bool,
    pub master_width_percent: u16,
    pub nested_width_percent: u16,
}

pub fn create(area: Rect, panels: PanelLayout) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(4), // Header card (border + 2 rows + border)
        Constraint::Length(1), // Toolbar
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let body = rows[2];
    let (list, primary, nested) = if panels.primary_open {
        let cols = Layout::horizontal([
            Constraint::Percentage(panels.master_width_percent),
            Constraint::Percentage(100 - panels.master_width_percent),
        ])
        .split(body);

        if panels.nested_open {
            let detail = Layout::horizontal([
                Constraint::Percentage(100 - panels.nested_width_percent),
                Constraint::Percentage(panels.nested_width_percent),
            ])
            .split(cols[1]);
            (cols[0], Some(detail[0]), Some(detail[1]))
        } else {
            (cols[0], Some(cols[1]), None)
        }
    } else {
        (body, None, None)
    };

    ScreenAreas {
        header: rows[0],
        toolbar: rows[1],
        list,
        primary,
        nested,
        status: rows[3],
    }
}
