//! Pure formatting functions for UI output.
//!
//! Everything a CI log reader sees goes through here; diagnostic detail goes
//! through `tracing` instead.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::WorkflowResult;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary lines for a finished run, without styling.
pub fn summary_lines(result: &WorkflowResult) -> Vec<String> {
    let mut lines = vec![
        format!("Release:  {}", result.tag),
        format!(
            "Previous: {}",
            result.previous_tag.as_deref().unwrap_or("(none)")
        ),
        format!("Type:     {} ({})", result.label, result.release_type),
    ];
    if let Some(page_id) = &result.page_id {
        lines.push(format!("Page:     {}", page_id));
    }
    lines
}

/// Display the classification and the created page.
pub fn display_release_summary(result: &WorkflowResult) {
    println!("\n{}", style("Release summary:").bold());
    for line in summary_lines(result) {
        println!("  {}", line);
    }
}
