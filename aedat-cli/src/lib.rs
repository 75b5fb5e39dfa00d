//! Shared helpers for the AEDAT command line tools.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Creates a stderr spinner showing `message`, or a hidden one when `quiet`.
pub fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message);
    // Scans block the main thread
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Clears `progress` and passes `result` through, so no spinner frame is left
/// on stderr above an error message.
pub fn finish<T>(progress: &ProgressBar, result: T) -> T {
    progress.finish_and_clear();
    result
}
