//! User interface module - everything gitr prints.
//!
//! gitr has no interactive prompts; `formatter` holds the output helpers and
//! this module re-exports them.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_debug, display_diff, display_error, display_placeholder,
    format_diff,
};
