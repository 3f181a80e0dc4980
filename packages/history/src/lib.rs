#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Historical snapshot store and time-windowed trend computation.
//!
//! One [`Snapshot`](skywatch_models::Snapshot) is persisted per cycle
//! as an individually addressable JSON record. [`trend`] turns the
//! retained window into 24-hour/7-day deltas and rolling baselines;
//! [`diff`] partitions the current cycle's identifiers into new vs.
//! returning against the previous snapshot.
//!
//! Corrupt records are skipped, counted, and surfaced — never fatal. A
//! duplicate-timestamp append is the one hard error: it means two
//! cycles ran for the same hour, a scheduling invariant violation the
//! caller must see.

pub mod diff;
pub mod store;
pub mod trend;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub use store::{LoadedWindow, SnapshotStore};

/// Errors from snapshot persistence.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A record for this cycle timestamp already exists.
    #[error("Snapshot for {taken_at} already exists")]
    DuplicateSnapshot {
        /// The colliding cycle timestamp.
        taken_at: DateTime<Utc>,
    },
}
