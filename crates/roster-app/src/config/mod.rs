//! Configuration file parsing for Roster
//!
//! Supports:
//! - `.roster/config.toml` - Global settings
//! - `.roster/records.toml` - Employee and role fixture

pub mod records;
pub mod settings;
pub mod types;

pub use records::{load_records, RecordsFile, DEFAULT_REASONS};
pub use settings::{init_config_dir, load_settings, ROSTER_DIR};
pub use types::*;
