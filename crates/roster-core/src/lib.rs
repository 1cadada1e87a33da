//! # roster-core - Core Domain Types
//!
//! Foundation crate for Roster. Provides the record model, the save-time
//! validation gate, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Records (`record`)
//! - [`Record`] - A selectable role assignment with its validity window
//! - [`RecordId`] - Opaque record identity
//! - [`ValidityWindow`] - Start date plus optional end date
//! - [`RoleStatus`] - Ongoing / Active / Completed, derived from the window
//! - [`Employee`] - The person whose roles are listed
//!
//! ### Validation (`validation`)
//! - [`RoleDraft`] - Form-level copy of a record's editable fields
//! - [`FormField`] - Identifies a form field (used for focus on failure)
//! - [`ValidationError`] - Per-field validation failure
//! - [`validate_draft()`] - The ordered, short-circuiting save gate
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`SaveError`] - Failure reported by a record store on save
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use roster_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod record;
pub mod validation;

/// Prelude for common imports used throughout all Roster crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt, SaveError};
pub use record::{Employee, Record, RecordId, RoleStatus, ValidityWindow};
pub use validation::{validate_draft, FormField, RoleDraft, ValidationError};
