//! Logging utilities with colored output.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "{} pages validated", count);
//! log!("error"; "{err:#}");
//! ```

use colored::{ColoredString, Colorize};
use std::io::{Write, stderr, stdout};

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Errors go to stderr so piped output (`folio export ... > out.json`)
/// stays clean.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let line = format_line(&prefix, message);

    if module.eq_ignore_ascii_case("error") {
        let mut stderr = stderr().lock();
        stderr.write_all(line.as_bytes()).ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        stdout.write_all(line.as_bytes()).ok();
        stdout.flush().ok();
    }
}

/// Prefix the first line; indent continuation lines under the message.
fn format_line(prefix: &ColoredString, message: &str) -> String {
    let indent = " ".repeat(prefix.chars().count() + 1);
    let mut lines = message.lines();

    let mut out = format!("{prefix} {}\n", lines.next().unwrap_or_default());
    for line in lines {
        out.push_str(&indent);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "check" => prefix.bright_green().bold(),
        "init" => prefix.bright_blue().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_single_line() {
        colored::control::set_override(false);
        let prefix = colorize_prefix("check");
        assert_eq!(format_line(&prefix, "ok"), "[check] ok\n");
    }

    #[test]
    fn test_format_multiline_indents() {
        colored::control::set_override(false);
        let prefix = colorize_prefix("error");
        let line = format_line(&prefix, "first\nsecond");
        assert_eq!(line, "[error] first\n        second\n");
    }

    #[test]
    fn test_format_empty_message() {
        colored::control::set_override(false);
        let prefix = colorize_prefix("init");
        assert_eq!(format_line(&prefix, ""), "[init] \n");
    }
}
