//! Busy indicator shown while the catalog fetch is outstanding.

use std::sync::{Arc, Mutex};

/// Something that can show and hide a busy indicator.
pub trait BusyIndicator {
    /// Show the indicator with a label.
    fn show(&self, label: &str);

    /// Hide the indicator.
    fn hide(&self);
}

/// Shows an indicator for as long as it lives.
///
/// Hiding happens in `Drop`, so every exit path clears the indicator,
/// including early returns and errors.
#[must_use = "the indicator is hidden as soon as the guard is dropped"]
pub struct BusyGuard<'a> {
    indicator: &'a dyn BusyIndicator,
}

impl<'a> BusyGuard<'a> {
    /// Show the indicator.
    pub fn new(indicator: &'a dyn BusyIndicator, label: &str) -> Self {
        indicator.show(label);
        Self { indicator }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// Indicator that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBusyIndicator;

impl BusyIndicator for NoBusyIndicator {
    fn show(&self, _label: &str) {}

    fn hide(&self) {}
}

/// Indicator that records its transitions.
#[derive(Debug, Clone, Default)]
pub struct RecordingBusyIndicator {
    events: Arc<Mutex<Vec<BusyEvent>>>,
}

/// A recorded indicator transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusyEvent {
    Shown(String),
    Hidden,
}

impl RecordingBusyIndicator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions so far.
    pub fn events(&self) -> Vec<BusyEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Whether the last transition left the indicator showing.
    pub fn is_active(&self) -> bool {
        matches!(self.events().last(), Some(BusyEvent::Shown(_)))
    }

    fn push(&self, event: BusyEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl BusyIndicator for RecordingBusyIndicator {
    fn show(&self, label: &str) {
        self.push(BusyEvent::Shown(label.to_string()));
    }

    fn hide(&self) {
        self.push(BusyEvent::Hidden);
    }
}
