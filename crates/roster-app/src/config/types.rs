//! Configuration types for Roster

use serde::{Deserialize, Serialize};

use crate::selection::SelectionMode;

/// Settings from `.roster/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Selection mode the list starts in
    #[serde(default)]
    pub default_selection_mode: SelectionMode,

    /// Ask before removing selected roles
    #[serde(default = "default_true")]
    pub confirm_removal: bool,

    /// Ask before quitting
    #[serde(default)]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            default_selection_mode: SelectionMode::default(),
            confirm_removal: true,
            confirm_quit: false,
        }
    }
}

/// Layout and formatting settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Width of the record list while panels are open (percent)
    #[serde(default = "default_master_width")]
    pub master_width_percent: u16,

    /// Width of the nested panel within the detail area (percent)
    #[serde(default = "default_nested_width")]
    pub nested_width_percent: u16,

    /// chrono format string for dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Step used when adjusting utilization with arrow keys
    #[serde(default = "default_utilization_step")]
    pub utilization_step: i32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            master_width_percent: default_master_width(),
            nested_width_percent: default_nested_width(),
            date_format: default_date_format(),
            utilization_step: default_utilization_step(),
        }
    }
}

impl UiSettings {
    /// Percentages clamped to a range that leaves every area visible
    pub fn clamped_master_width(&self) -> u16 {
        self.master_width_percent.clamp(20, 80)
    }

    pub fn clamped_nested_width(&self) -> u16 {
        self.nested_width_percent.clamp(20, 80)
    }
}

fn default_true() -> bool {
    true
}

fn default_master_width() -> u16 {
    40
}

fn default_nested_width() -> u16 {
    35
}

pub(super) fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

fn default_utilization_step() -> i32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.behavior.default_selection_mode, SelectionMode::Multi);
        assert!(settings.behavior.confirm_removal);
        assert!(!settings.behavior.confirm_quit);
        assert_eq!(settings.ui.master_width_percent, 40);
        assert_eq!(settings.ui.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[behavior]
default_selection_mode = "single"

[ui]
utilization_step = 10
"#,
        )
        .unwrap();
        assert_eq!(settings.behavior.default_selection_mode, SelectionMode::Single);
        assert!(settings.behavior.confirm_removal);
        assert_eq!(settings.ui.utilization_step, 10);
        assert_eq!(settings.ui.nested_width_percent, 35);
    }

    #[test]
    fn test_width_clamping() {
        let ui = UiSettings {
            master_width_percent: 95,
            nested_width_percent: 5,
            ..UiSettings::default()
        };
        assert_eq!(ui.clamped_master_width(), 80);
        assert_eq!(ui.clamped_nested_width(), 20);
    }
}
