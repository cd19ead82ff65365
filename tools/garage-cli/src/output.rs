//! Output formatting for the CLI.

use std::time::Duration;

use console::style;
use garage_storefront::{BusyIndicator, Notice, NoticeKind};
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a storefront notice.
    pub fn notice(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Info => self.info(&notice.text),
            NoticeKind::Success => self.success(&notice.text),
            NoticeKind::Validation => self.warn(&notice.text),
            NoticeKind::Error => self.error(&notice.text),
        }
        for detail in &notice.details {
            self.list_item(detail);
        }
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Create the spinner used as the storefront busy indicator.
    pub fn spinner(&self) -> Spinner {
        let bar = if self.json {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
                bar.set_style(spinner_style);
            }
            bar
        };
        Spinner { bar }
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Terminal spinner shown while the catalog loads.
pub struct Spinner {
    bar: ProgressBar,
}

impl BusyIndicator for Spinner {
    fn show(&self, label: &str) {
        self.bar.set_message(label.to_string());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn hide(&self) {
        self.bar.finish_and_clear();
    }
}

/// Pad or truncate to a display width, counting characters.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        assert_eq!(fit("Corolla", 10), "Corolla");
        assert_eq!(fit("Land Cruiser Prado", 8), "Land Cr…");
    }

    #[test]
    fn test_hidden_spinner_in_json_mode() {
        let spinner = Output::new(false, true).spinner();
        spinner.show("loading");
        spinner.hide();
        assert!(spinner.bar.is_finished());
    }
}
