use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Keeps stdout free for callers piping the generator. Step progress is
/// drawn with an indicatif bar.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} - {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }
}

/// NullProgressReporter discards everything (`--quiet`)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgressReporter;

impl NullProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
