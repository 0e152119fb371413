//! Console output for the command line.
//!
//! Status and warnings go to stderr so stdout carries only changelog content.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{ReleaseNotes, ReleaseStatus};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One summary row per section: caption, kind, line range (1-based) and note count.
pub fn format_section_row(notes: &ReleaseNotes) -> String {
    let kind = match &notes.status {
        ReleaseStatus::Draft => "draft".to_string(),
        ReleaseStatus::Released(version) => format!("release {}", version),
    };
    format!(
        "{:<16} {:<18} lines {}-{} ({} notes)",
        notes.caption,
        kind,
        notes.start_index + 1,
        notes.end_index + 1,
        notes.lines.len()
    )
}

/// Print the section table to stdout.
pub fn display_sections(notes: &[ReleaseNotes]) {
    println!("{}", style("Release sections:").bold());
    for entry in notes {
        println!("  {}", format_section_row(entry));
    }
}

/// Print release notes to stdout, one line each.
pub fn display_notes<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}
