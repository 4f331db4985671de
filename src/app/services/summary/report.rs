//! Summary report rendering
//!
//! Two views of the same status records: a plain text report file with the
//! layout operators have used for years, and a colored console table for
//! the `summary` subcommand.

use crate::app::models::CustomerStatus;
use crate::Result;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Render the text report
///
/// One line per customer: the name padded to 30 columns, then either the
/// invoice total or a "No Invoice" comment (with ": Paid" appended when the
/// paid flag was seen), and a "(No Email)" marker for billed customers with
/// no contact email.
pub fn render_text_report(statuses: &[CustomerStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        out.push_str(&format!("{:30} ", status.name));
        match &status.total {
            None => {
                let mut comment = "No Invoice".to_string();
                if status.paid {
                    comment.push_str(": Paid");
                }
                out.push_str(&format!("{:18}\n", comment));
            }
            Some(total) => {
                out.push_str(&format!("Total=${}", total));
                if !status.has_email {
                    out.push_str(" (No Email)");
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Write the text report to a file
pub fn write_text_report(path: &Path, statuses: &[CustomerStatus]) -> Result<()> {
    fs::write(path, render_text_report(statuses))?;
    info!("Wrote summary report to {}", path.display());
    Ok(())
}

/// Print a colored status table to stdout
pub fn print_console_table(statuses: &[CustomerStatus]) {
    println!(
        "{:>10}  {:^4}  {:30}  {}",
        "Total".bold(),
        "Paid".bold(),
        "Name".bold(),
        "Email".bold()
    );

    for status in statuses {
        let total = match &status.total {
            Some(total) => format!("${}", total).green().to_string(),
            None => "--".yellow().to_string(),
        };
        let paid = if status.paid { "Y" } else { "N" };
        let email = if status.has_email { "Y" } else { "" };
        println!("{:>10}  {:^4}  {:30}  {}", total, paid, status.name, email);
    }
}
