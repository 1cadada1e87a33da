//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use roster_app::{AppState, UiMode};

use crate::layout::{self, PanelLayout};
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Panels are drawn from the shell's [`PanelView`](roster_app::PanelView),
/// which only changes when the coordinator issues directives.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let ui = &state.settings.ui;
    let areas = layout::create(
        area,
        PanelLayout {
            primary_open: state.view.primary.is_some(),
            nested_open: state.view.nested.is_some(),
            master_width_percent: ui.clamped_master_width(),
            nested_width_percent: ui.clamped_nested_width(),
        },
    );

    frame.render_widget(widgets::EmployeeHeader::new(&state.employee), areas.header);

    let records = state.records();
    frame.render_widget(
        widgets::Toolbar::new(
            records.len(),
            state.coordinator.mode(),
            state.view.remove_enabled,
        ),
        areas.toolbar,
    );

    frame.render_widget(
        widgets::RecordList::new(&records, &ui.date_format, state.today)
            .cursor(state.cursor)
            .mode(state.coordinator.mode())
            .focused(state.ui_mode == UiMode::Normal),
        areas.list,
    );

    if let (Some(content), Some(panel_area)) = (&state.view.primary, areas.primary) {
        frame.render_widget(
            widgets::DetailPanel::new(content, &state.form, &ui.date_format)
                .nested_open(state.view.nested.is_some()),
            panel_area,
        );
    }

    if let (Some(content), Some(panel_area)) = (&state.view.nested, areas.nested) {
        frame.render_widget(widgets::NestedPanel::new(content), panel_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    match state.ui_mode {
        UiMode::ConfirmRemoval | UiMode::ConfirmQuit => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
        UiMode::Normal => {}
    }
}
