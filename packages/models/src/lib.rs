#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared data model for the skywatch fusion core.
//!
//! Observations are created fresh each cycle from upstream feed data and
//! never mutated after enrichment. Snapshots are the only thing that
//! survives a cycle; everything else (trends, diffs, location strings)
//! is derived at query time.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One aircraft record as received from the tracking feed for a cycle.
///
/// The callsign is a stable identifier of convenience, not a guaranteed
/// unique key; empty callsigns occur and must be tolerated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftObservation {
    /// Broadcast callsign (e.g. "RCH4521"), uppercased, may be empty.
    pub callsign: String,
    /// ICAO24 hex address (e.g. "ae117f").
    pub hex: String,
    /// Registration / tail number, when the feed provides one.
    pub registration: Option<String>,
    /// ICAO type code (e.g. "C17", "K35R"), when the feed provides one.
    pub type_code: Option<String>,
    /// Last known position; absent for aircraft without a position fix.
    pub position: Option<Position>,
    /// Barometric altitude in feet.
    pub altitude_ft: Option<i32>,
    /// Ground speed in knots.
    pub ground_speed_kt: Option<i32>,
    /// Track over ground in degrees.
    pub track_deg: Option<i32>,
}

/// One prediction-market quote for a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketObservation {
    /// Question text; used (after normalization) as the stable key.
    pub question: String,
    /// Implied probability in integer percentage points (0-100).
    pub probability: f64,
    /// Total traded volume in USD, when reported.
    pub volume_usd: Option<f64>,
}

/// Semantic category attached to an aircraft: what it probably is and
/// what it is probably doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Airframe name (e.g. "C-17A Globemaster III").
    pub airframe: String,
    /// Mission role (e.g. "Strategic airlift").
    pub role: String,
}

impl Classification {
    #[must_use]
    pub fn new(airframe: &str, role: &str) -> Self {
        Self {
            airframe: airframe.to_string(),
            role: role.to_string(),
        }
    }
}

/// Whether an identifier was present in the previous cycle's snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    /// Not seen in the previous cycle.
    New,
    /// Also present in the previous cycle.
    Returning,
}

/// An aircraft observation after enrichment: location resolved,
/// classification attached, presence tagged against the last snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedAircraft {
    #[serde(flatten)]
    pub observation: AircraftObservation,
    /// Human-readable location (e.g. "near Al Udeid AB, Qatar").
    pub location: String,
    /// Airframe classification, when one could be determined.
    pub classification: Option<Classification>,
    /// Country of registration inferred from the hex address.
    pub origin: Option<String>,
    /// New or returning relative to the previous cycle.
    pub presence: Presence,
}

/// A keyed observation as persisted in a snapshot: the primary value
/// plus an optional secondary value (probability + volume for markets).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedValue {
    pub value: f64,
    pub secondary: Option<f64>,
}

/// The point-in-time record persisted once per cycle.
///
/// Immutable after creation. The identifier set is always a subset of
/// the identifiers actually observed in the snapshot's own cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Cycle timestamp, UTC, hour granularity.
    pub taken_at: DateTime<Utc>,
    /// Identifiers observed this cycle (callsigns).
    pub identifiers: BTreeSet<String>,
    /// Population-level scalars (e.g. "aircraftCount").
    pub scalars: BTreeMap<String, f64>,
    /// Per-key observations (normalized market question -> value).
    pub keyed: BTreeMap<String, KeyedValue>,
}

/// Scalar metric name for the per-cycle aircraft count.
pub const AIRCRAFT_COUNT_SCALAR: &str = "aircraftCount";

/// Time-windowed movement for one keyed observation.
///
/// `None` means "no comparison point landed in the lookback window",
/// which is distinct from a delta of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Signed change vs. the snapshot matched in the 24-hour window.
    pub delta_24h: Option<f64>,
    /// Signed change vs. the snapshot matched in the 7-day window.
    pub delta_7d: Option<f64>,
}

/// Rolling statistical summary of a scalar metric over past cycles.
///
/// Empty input yields `None` fields, never zeros: absence of data must
/// not read as absence of activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Arithmetic mean, rounded to one decimal.
    pub average: Option<f64>,
    pub maximum: Option<f64>,
    pub sample_count: usize,
}

/// Partition of the current cycle's identifiers against the previous
/// snapshot. Identifiers that departed since the last cycle are not
/// modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub new: BTreeSet<String>,
    pub returning: BTreeSet<String>,
}

impl DiffResult {
    /// Presence tag for a single identifier.
    #[must_use]
    pub fn presence_of(&self, identifier: &str) -> Presence {
        if self.returning.contains(identifier) {
            Presence::Returning
        } else {
            Presence::New
        }
    }
}

/// An unusual market movement flagged between two cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarketAlert {
    /// Probability moved by at least the spike threshold.
    ProbabilitySpike {
        question: String,
        previous: f64,
        current: f64,
    },
    /// Trading volume surged relative to the previous cycle.
    VolumeSurge {
        question: String,
        ratio: f64,
    },
}

/// A market observation with its derived trend attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketWithTrend {
    #[serde(flatten)]
    pub observation: MarketObservation,
    /// Normalized key used for cross-cycle continuity.
    pub key: String,
    pub trend: Trend,
}
