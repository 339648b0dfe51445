//! Scan flow as a state machine driven by decoder events.
//!
//! `Idle -> Scanning -> Result | Failed`, with `reset` back to `Idle` from
//! anywhere. Each start opens a new attempt; events tagged with an older
//! attempt are ignored.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use super::toast::Toast;

/// What the simulated decoder reports.
pub const SIMULATED_RESULT: &str = "https://example.com/scanned-url";

pub const SIMULATED_DELAY_MS: u32 = 3_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Result(String),
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    Decoded(String),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    pub phase: ScanPhase,
    attempt: u64,
}

impl ScanState {
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    #[must_use]
    pub fn result(&self) -> Option<&str> {
        match &self.phase {
            ScanPhase::Result(text) => Some(text),
            _ => None,
        }
    }

    /// Begin a new attempt. Ignored while one is already scanning.
    pub fn start(&mut self) -> Option<u64> {
        if self.is_scanning() {
            return None;
        }
        self.attempt += 1;
        self.phase = ScanPhase::Scanning;
        Some(self.attempt)
    }

    /// Apply a decoder event for `attempt`; returns the toast to show.
    pub fn handle(&mut self, attempt: u64, event: ScanEvent) -> Option<Toast> {
        if attempt != self.attempt || !self.is_scanning() {
            return None;
        }
        match event {
            ScanEvent::Decoded(text) => {
                self.phase = ScanPhase::Result(text);
                Some(Toast::success("QR Code Scanned", "Successfully scanned a QR code"))
            }
            ScanEvent::Failed(reason) => {
                let toast = Toast::error("Scan Failed", reason.clone());
                self.phase = ScanPhase::Failed(reason);
                Some(toast)
            }
        }
    }

    /// Back to idle; any in-flight attempt becomes stale.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.phase = ScanPhase::Idle;
    }
}

/// Only web links are offered for opening.
#[must_use]
pub fn can_open(result: &str) -> bool {
    result.starts_with("http")
}

#[must_use]
pub fn scanned_copy_toast() -> Toast {
    Toast::success("Copied to Clipboard", "The QR code content has been copied to your clipboard.")
}

/// Source of decode events for one scan attempt.
#[async_trait::async_trait(?Send)]
pub trait FrameDecoder {
    async fn decode(&self) -> ScanEvent;
}

/// Reports [`SIMULATED_RESULT`] after `delay_ms` in the browser, immediately
/// elsewhere.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedDecoder {
    pub delay_ms: u32,
}

impl Default for SimulatedDecoder {
    fn default() -> Self {
        Self { delay_ms: SIMULATED_DELAY_MS }
    }
}

#[async_trait::async_trait(?Send)]
impl FrameDecoder for SimulatedDecoder {
    async fn decode(&self) -> ScanEvent {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        }
        ScanEvent::Decoded(SIMULATED_RESULT.to_owned())
    }
}
