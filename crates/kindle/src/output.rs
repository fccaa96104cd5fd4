//! Terminal output utilities

use console::{measure_text_width, style};
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!(
        "{} {}",
        style("✗").for_stderr().red().bold(),
        style(msg).for_stderr().red()
    );
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print lines inside a box
pub fn framed(lines: &[String]) {
    println!("{}", frame(lines));
}

/// Build a box around `lines`, padded to the widest line
///
/// Width is measured without ANSI escapes so styled lines line up.
pub fn frame(lines: &[String]) -> String {
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let border = "─".repeat(width + 4);

    let mut out = format!("{}\n", style(format!("┌{}┐", border)).cyan());
    for line in lines {
        let padding = " ".repeat(width - measure_text_width(line));
        out.push_str(&format!(
            "{}  {}{}  {}\n",
            style("│").cyan(),
            line,
            padding,
            style("│").cyan()
        ));
    }
    out.push_str(&style(format!("└{}┘", border)).cyan().to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_pads_to_widest_line() {
        let out = frame(&["kindle".to_string(), "Vite + React".to_string()]);
        let plain = console::strip_ansi_codes(&out).to_string();
        let rows: Vec<&str> = plain.lines().collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "┌────────────────┐");
        assert_eq!(rows[1], "│  kindle        │");
        assert_eq!(rows[2], "│  Vite + React  │");
        assert_eq!(rows[3], "└────────────────┘");
    }

    #[test]
    fn test_frame_ignores_ansi_width() {
        let styled = style("abc").green().force_styling(true).to_string();
        let out = frame(&[styled, "abcd".to_string()]);
        let widths: Vec<usize> = out.lines().map(measure_text_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
