//! Terminal output helpers

use colored::Colorize;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a capacity value as Mbps
pub fn format_mbps(value: f64) -> String {
    format!("{:.1} Mbps", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_capacity_with_one_decimal() {
        assert_eq!(format_mbps(102.44), "102.4 Mbps");
        assert_eq!(format_mbps(7.0), "7.0 Mbps");
    }
}
