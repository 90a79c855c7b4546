use crate::ports::outbound::Notifier;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// ConsoleNotifier adapter writing feedback to stderr
///
/// Shows an indicatif spinner while a request is in flight and prints
/// alerts on their own lines so they never mix with results on stdout.
pub struct ConsoleNotifier {
    spinner: RefCell<Option<ProgressBar>>,
    color: bool,
}

impl ConsoleNotifier {
    pub fn new(color: bool) -> Self {
        Self {
            spinner: RefCell::new(None),
            color,
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Notifier for ConsoleNotifier {
    fn begin(&self, message: &str) {
        self.clear_spinner();
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn end(&self) {
        self.clear_spinner();
    }

    fn alert(&self, message: &str) {
        self.clear_spinner();
        if self.color {
            eprintln!("✅ {}", message.green());
        } else {
            eprintln!("✅ {}", message);
        }
    }

    fn alert_error(&self, message: &str) {
        self.clear_spinner();
        if self.color {
            eprintln!("❌ {}", message.red().bold());
        } else {
            eprintln!("❌ {}", message);
        }
    }
}
