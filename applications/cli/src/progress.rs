/// Terminal progress bar for batch runs
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;
use tunesort_core::{BatchResult, ProgressReporter, ProgressState};

const TEMPLATE: &str = "{msg:>8} [{bar:40.cyan/blue}] {pos}/{len} ({eta})";

/// Progress reporter drawing one bar per batch on stderr
pub struct BarReporter {
    bar: RefCell<ProgressBar>,
}

impl BarReporter {
    pub fn new() -> Self {
        Self {
            bar: RefCell::new(ProgressBar::hidden()),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
    }
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for BarReporter {
    fn started(&self, label: &str, total: usize) {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        bar.set_style(Self::style());
        bar.set_message(label.to_string());
        *self.bar.borrow_mut() = bar;
    }

    fn progress(&self, state: ProgressState) {
        self.bar.borrow().set_position(state.processed as u64);
    }

    fn finished(&self, _result: &BatchResult) {
        self.bar.borrow().finish_and_clear();
    }
}
