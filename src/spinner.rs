use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Stderr spinner shown while lookups are in flight. Cleared on drop.
pub struct Spinner {
  progress: ProgressBar,
}

impl Spinner {
  pub fn new(message: &str) -> Self {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
      .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
      .template("{spinner:.cyan} {msg}")
    {
      progress.set_style(style);
    }
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(80));

    Self { progress }
  }

  pub fn set_message(&self, message: String) {
    self.progress.set_message(message);
  }
}

impl Drop for Spinner {
  fn drop(&mut self) {
    self.progress.finish_and_clear();
  }
}
