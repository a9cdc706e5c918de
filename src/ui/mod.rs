//! User-facing output for CI logs.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_release_summary, display_status,
    display_success, summary_lines,
};
