use colored::Colorize;

use crate::mess::types::MealDefinition;

/// Format the effective claim window (official timing widened by grace)
pub fn format_claim_window(meal: &MealDefinition) -> String {
    let grace = meal.grace_minutes as i32;
    let start = meal.official_start.minutes_since_midnight() - grace;
    let end = meal.official_end.minutes_since_midnight() + grace;
    format!("{} - {}", format_minutes(start), format_minutes(end))
}

/// Render signed minutes-since-midnight without day rollover, mirroring the
/// evaluator's naive arithmetic
fn format_minutes(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}

/// Format timestamp in human-readable form
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Claim id truncated for table display
pub fn format_claim_id(claim_id: &str) -> String {
    if claim_id.len() <= 12 {
        claim_id.to_string()
    } else {
        format!("{}...{}", &claim_id[..6], &claim_id[claim_id.len() - 6..])
    }
}

/// Prompt user for yes/no confirmation
pub fn confirm_action(prompt: &str) -> bool {
    use std::io::{self, Write};

    print!("{} (y/N): ", prompt);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (i, col) in columns.iter().enumerate() {
        if i < widths.len() {
            row.push_str(&format!("{:<width$}  ", col, width = widths[i]));
        }
    }
    println!("{}", row.trim_end());
}

/// Green "Claim" / grey "Not Available" label matching the web panel
pub fn availability_label(claimable: bool) -> String {
    if claimable {
        "Claim".green().to_string()
    } else {
        "Not Available".dimmed().to_string()
    }
}
