//! In-memory chip configurations built from trellis configuration text.
//!
//! [`ChipConfigBuilder`] implements [`trellis_conf::ConfAction`] and collects
//! parsed records into a [`ChipConfig`]; the writer renders a `ChipConfig`
//! back into the same text format.

#![warn(missing_docs)]

pub mod builder;
pub mod chip;
pub mod error;
pub mod writer;

pub use builder::ChipConfigBuilder;
pub use chip::{
    ChipConfig, ChipStats, ConfigArc, ConfigEnum, ConfigUnknown, ConfigWord, TileConfig,
};
pub use error::DbError;
pub use writer::WriteOptions;
