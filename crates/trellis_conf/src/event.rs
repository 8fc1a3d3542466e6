//! Materialized callback events and a sink that records them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::ConfAction;
use crate::error::ActionResult;

/// One callback invocation, with owned copies of its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfEvent {
    /// `on_device`
    Device {
        /// Device name.
        name: String,
    },
    /// `on_comment`
    Comment {
        /// Comment text.
        text: String,
    },
    /// `on_sysconfig`
    Sysconfig {
        /// Option name.
        name: String,
        /// Option value.
        value: String,
    },
    /// `on_tile`
    Tile {
        /// Tile name.
        name: String,
    },
    /// `on_arc`
    Arc {
        /// Destination wire.
        sink: String,
        /// Driving wire.
        source: String,
    },
    /// `on_word`
    Word {
        /// Word name.
        name: String,
        /// Value text.
        value: String,
    },
    /// `on_enum`
    Enum {
        /// Enum name.
        name: String,
        /// Selected value.
        value: String,
    },
    /// `on_unknown`
    Unknown {
        /// Raw bit reference.
        value: String,
    },
    /// `on_bram`
    BramInit {
        /// Block RAM index.
        index: u32,
    },
    /// `on_data`
    BramData {
        /// Block RAM index.
        index: u32,
        /// Zero-based row.
        row: usize,
        /// Row value.
        value: u32,
    },
    /// `on_commit`
    Commit,
}

impl fmt::Display for ConfEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfEvent::Device { name } => write!(f, ".device {name}"),
            ConfEvent::Comment { text } => write!(f, ".comment {text}"),
            ConfEvent::Sysconfig { name, value } => write!(f, ".sysconfig {name} {value}"),
            ConfEvent::Tile { name } => write!(f, ".tile {name}"),
            ConfEvent::Arc { sink, source } => write!(f, "arc: {sink} {source}"),
            ConfEvent::Word { name, value } => write!(f, "word: {name} {value}"),
            ConfEvent::Enum { name, value } => write!(f, "enum: {name} {value}"),
            ConfEvent::Unknown { value } => write!(f, "unknown: {value}"),
            ConfEvent::BramInit { index } => write!(f, ".bram_init {index}"),
            ConfEvent::BramData { index, row, value } => {
                write!(f, "data: {index} {row} {value:#x}")
            }
            ConfEvent::Commit => f.write_str("commit"),
        }
    }
}

/// A sink that consumes records as owned [`ConfEvent`]s.
///
/// Every `EventHandler` is a [`ConfAction`]: each callback is converted into
/// its event and passed to [`handle`](Self::handle).
pub trait EventHandler {
    /// Consumes one event; an error aborts the parse.
    fn handle(&mut self, event: ConfEvent) -> ActionResult;
}

impl<H: EventHandler> ConfAction for H {
    fn on_device(&mut self, name: &str) -> ActionResult {
        self.handle(ConfEvent::Device { name: name.into() })
    }

    fn on_comment(&mut self, text: &str) -> ActionResult {
        self.handle(ConfEvent::Comment { text: text.into() })
    }

    fn on_sysconfig(&mut self, name: &str, value: &str) -> ActionResult {
        self.handle(ConfEvent::Sysconfig {
            name: name.into(),
            value: value.into(),
        })
    }

    fn on_tile(&mut self, name: &str) -> ActionResult {
        self.handle(ConfEvent::Tile { name: name.into() })
    }

    fn on_arc(&mut self, sink: &str, source: &str) -> ActionResult {
        self.handle(ConfEvent::Arc {
            sink: sink.into(),
            source: source.into(),
        })
    }

    fn on_word(&mut self, name: &str, value: &str) -> ActionResult {
        self.handle(ConfEvent::Word {
            name: name.into(),
            value: value.into(),
        })
    }

    fn on_enum(&mut self, name: &str, value: &str) -> ActionResult {
        self.handle(ConfEvent::Enum {
            name: name.into(),
            value: value.into(),
        })
    }

    fn on_unknown(&mut self, value: &str) -> ActionResult {
        self.handle(ConfEvent::Unknown {
            value: value.into(),
        })
    }

    fn on_bram(&mut self, index: u32) -> ActionResult {
        self.handle(ConfEvent::BramInit { index })
    }

    fn on_data(&mut self, index: u32, row: usize, value: u32) -> ActionResult {
        self.handle(ConfEvent::BramData { index, row, value })
    }

    fn on_commit(&mut self) -> ActionResult {
        self.handle(ConfEvent::Commit)
    }
}

/// An action sink that accepts everything and keeps an ordered event log.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<ConfEvent>,
}

impl EventRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events recorded so far, in callback order.
    pub fn events(&self) -> &[ConfEvent] {
        &self.events
    }

    /// Consumes the recorder, returning its events.
    pub fn into_events(self) -> Vec<ConfEvent> {
        self.events
    }
}

impl EventHandler for EventRecorder {
    fn handle(&mut self, event: ConfEvent) -> ActionResult {
        self.events.push(event);
        Ok(())
    }
}
