use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StdoutProgressReporter adapter for reporting diagnostics to stdout
///
/// Progress and failure diagnostics are printed as plain lines. Long loops
/// get an indicatif progress bar; messages printed while a bar is active
/// are written above it. In quiet mode only errors and the completion line
/// are printed.
pub struct StdoutProgressReporter {
    quiet: bool,
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StdoutProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            progress_bar: RefCell::new(None),
        }
    }

    /// Returns the active bar, replacing it when a new loop starts
    fn bar_for(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        match slot.as_ref() {
            Some(pb) if pb.length() == Some(total as u64) && !pb.is_finished() => pb.clone(),
            _ => {
                if let Some(old) = slot.take() {
                    old.finish_and_clear();
                }
                let style = ProgressStyle::default_bar()
                    .template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-");
                let pb = ProgressBar::new(total as u64).with_style(style);
                *slot = Some(pb.clone());
                pb
            }
        }
    }

    fn print(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| println!("{}", message)),
            _ => println!("{}", message),
        }
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StdoutProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StdoutProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            self.print(message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.bar_for(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            self.finish_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.print(message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        println!();
        println!("{}", message);
    }
}
