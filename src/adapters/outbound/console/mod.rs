/// Console adapters for terminal diagnostics
mod progress_reporter;

pub use progress_reporter::StdoutProgressReporter;
