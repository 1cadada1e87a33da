//! Settings parser for .roster/config.toml

use super::types::{default_date_format, Settings};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use roster_core::prelude::*;
use std::fmt::Write;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
pub const ROSTER_DIR: &str = ".roster";

/// Load settings from .roster/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(ROSTER_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(mut settings) => {
                debug!("Loaded settings from {:?}", config_path);
                sanitize_date_format(&mut settings);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Whether `fmt` can render a plain date without a formatting error
fn is_valid_date_format(fmt: &str) -> bool {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    // Time specifiers parse fine but fail on a date without a time
    let mut rendered = String::new();
    write!(rendered, "{}", NaiveDate::default().format(fmt)).is_ok()
}

fn sanitize_date_format(settings: &mut Settings) {
    if !is_valid_date_format(&settings.ui.date_format) {
        warn!(
            "Invalid ui.date_format {:?}, using {:?}",
            settings.ui.date_format,
            default_date_format()
        );
        settings.ui.date_format = default_date_format();
    }
}

/// Create default config file in .roster/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let roster_dir = project_path.join(ROSTER_DIR);

    if !roster_dir.exists() {
        std::fs::create_dir_all(&roster_dir)
            .map_err(|e| Error::config(format!("Failed to create .roster dir: {}", e)))?;
    }

    let config_path = roster_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Roster Configuration

[behavior]
default_selection_mode = "multi"   # "single" or "multi"
confirm_removal = true             # Ask before removing selected roles
confirm_quit = false

[ui]
master_width_percent = 40          # List width while panels are open
nested_width_percent = 35          # Nested panel width within the detail area
date_format = "%d.%m.%Y"
utilization_step = 5               # Left/Right step for the utilization field
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}
