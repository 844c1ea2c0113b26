use gloo_timers::callback::Interval;
use yew::html::Scope;

use crate::{Model, Msg};

/// Fixed boot script cycled while a request is outstanding, in order,
/// wrapping back to the first line after the last.
pub static BOOT_SEQUENCE: [&str; 9] = [
    "Initializing neural core...",
    ">> loading_modules: [vision, audio, physics]",
    "Accessing truth_lens database...",
    "Decrypting video metadata...",
    "Analyzing frame histograms...",
    "Detecting compression artifacts...",
    "Comparing biometric landmarks...",
    "Running temporal consistency check...",
    "FINALIZING VERDICT...",
];

pub const MESSAGE_INTERVAL_MS: u32 = 1200;
pub const PERCENT_INTERVAL_MS: u32 = 200;
pub const PERCENT_STEP: f32 = 1.5;

/// Cosmetic progress shown during a scan. Only mutated by simulator ticks;
/// the percentage never decreases and freezes wherever it was when the
/// request settled.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    message_tick: usize,
    percent: f32,
}

impl ProgressState {
    pub fn new() -> Self {
        Self {
            message_tick: 0,
            percent: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn advance_message(&mut self) {
        self.message_tick += 1;
    }

    pub fn advance_percent(&mut self) {
        self.percent = (self.percent + PERCENT_STEP).min(100.0);
    }

    pub fn status_message(&self) -> &'static str {
        BOOT_SEQUENCE[self.message_tick % BOOT_SEQUENCE.len()]
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Boot lines revealed so far, capped at one full pass of the script.
    pub fn visible_log(&self) -> &'static [&'static str] {
        let revealed = (self.message_tick + 1).min(BOOT_SEQUENCE.len());
        &BOOT_SEQUENCE[..revealed]
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the two periodic timers behind the boot terminal. Start is called
/// once per request cycle; stop cancels both timers immediately and is safe
/// on every exit path, including leaving the page mid-scan.
pub struct ProgressSimulator {
    message_timer: Option<Interval>,
    percent_timer: Option<Interval>,
}

impl ProgressSimulator {
    pub fn new() -> Self {
        Self {
            message_timer: None,
            percent_timer: None,
        }
    }

    pub fn start(&mut self, link: &Scope<Model>) {
        let message_link = link.clone();
        self.message_timer = Some(Interval::new(MESSAGE_INTERVAL_MS, move || {
            message_link.send_message(Msg::BootLineTick);
        }));

        let percent_link = link.clone();
        self.percent_timer = Some(Interval::new(PERCENT_INTERVAL_MS, move || {
            percent_link.send_message(Msg::ProgressTick);
        }));
    }

    pub fn stop(&mut self) {
        if let Some(timer) = self.message_timer.take() {
            timer.cancel();
        }
        if let Some(timer) = self.percent_timer.take() {
            timer.cancel();
        }
    }
}
