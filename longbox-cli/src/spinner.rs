//! Single-line spinner shown while an archive is extracted, looked up and
//! packed.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Cheap to clone; clones drive the same line.
#[derive(Clone)]
pub(crate) struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// When `quiet` is true the spinner is never drawn.
    pub(crate) fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");
        bar.set_style(style);
        Self { bar }
    }

    pub(crate) fn show(&self, msg: String) {
        self.bar.reset();
        self.bar.enable_steady_tick(Duration::from_millis(100));
        self.bar.set_message(msg);
    }

    /// Stop ticking and clear the line.
    pub(crate) fn hide(&self) {
        self.bar.disable_steady_tick();
        self.bar.set_message("");
        self.bar.finish_and_clear();
    }

    /// Run `f` with the line cleared, e.g. while prompting.
    pub(crate) fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }
}
