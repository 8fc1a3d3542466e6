//! Conformance test helpers for the trellis configuration tools.
//!
//! Provides shared functions that run configuration text through the parser
//! with recording or rejecting sinks and return structured results for
//! assertion in integration tests.

#![warn(missing_docs)]

use trellis_conf::{
    read_conf_str, ActionError, ActionResult, ConfError, ConfEvent, EventHandler, EventRecorder,
};

/// A realistic ECP5 configuration covering every entry and record kind.
pub const ECP5_BLINKY: &str = include_str!("../fixtures/ecp5_blinky.config");

/// Result of parsing text into an event log.
pub struct ParseOutcome {
    /// What the parser returned.
    pub result: Result<(), ConfError>,
    /// Every event delivered before the parse finished or failed.
    pub events: Vec<ConfEvent>,
}

impl ParseOutcome {
    /// Returns the error message, panicking if the parse succeeded.
    pub fn error_message(&self) -> String {
        match &self.result {
            Ok(()) => panic!("expected parse to fail"),
            Err(e) => e.to_string(),
        }
    }

    /// Counts events matching `pred`.
    pub fn count(&self, pred: impl Fn(&ConfEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

/// Parses `text` with an [`EventRecorder`].
pub fn record_events(text: &str) -> ParseOutcome {
    let mut recorder = EventRecorder::new();
    let result = read_conf_str(&mut recorder, text);
    ParseOutcome {
        result,
        events: recorder.into_events(),
    }
}

/// A sink that rejects the first event matching a predicate and notes any
/// callback that arrives afterwards.
pub struct RejectAt<F> {
    pred: F,
    /// Events accepted before the rejection.
    pub accepted: Vec<ConfEvent>,
    /// Set once the sink has rejected an event.
    pub rejected: bool,
    /// Callbacks received after the rejection.
    pub calls_after_reject: usize,
}

impl<F: Fn(&ConfEvent) -> bool> RejectAt<F> {
    /// Creates a sink that rejects the first event for which `pred` holds.
    pub fn new(pred: F) -> Self {
        Self {
            pred,
            accepted: Vec::new(),
            rejected: false,
            calls_after_reject: 0,
        }
    }
}

impl<F: Fn(&ConfEvent) -> bool> EventHandler for RejectAt<F> {
    fn handle(&mut self, event: ConfEvent) -> ActionResult {
        if self.rejected {
            self.calls_after_reject += 1;
            return Ok(());
        }
        if (self.pred)(&event) {
            self.rejected = true;
            return Err(ActionError::new(format!("refusing '{event}'")));
        }
        self.accepted.push(event);
        Ok(())
    }
}

/// Returns the number of top-level entries in `text`: lines starting with `.`.
pub fn count_entries(text: &str) -> usize {
    text.lines()
        .filter(|line| line.trim_start().starts_with('.'))
        .count()
}
