// Output formatting and styling

use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format success message
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format warning message
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format info message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format a numbered wizard step header
    pub fn step(&self, number: usize, title: &str) -> String {
        if self.use_colors {
            format!("{} {}", format!("Step {}:", number).bold(), title)
        } else {
            format!("Step {}: {}", number, title)
        }
    }

    /// Format de-emphasized text (file listings)
    pub fn dim(&self, msg: &str) -> String {
        if self.use_colors {
            msg.dimmed().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format an interactive prompt
    pub fn prompt(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} ", msg.cyan())
        } else {
            format!("{} ", msg)
        }
    }
}

/// Print an error message to stderr
pub fn print_error(msg: &str) {
    let style = OutputStyle::default();
    eprintln!("{}", style.error(msg));
}
