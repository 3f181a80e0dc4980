#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Per-cycle fusion pipeline.
//!
//! One call to [`run_cycle`] takes the raw observations the upstream
//! fetchers collected for this cycle, enriches them (location,
//! classification, new/returning tag), computes market trends and
//! aircraft baselines against the retained history window, persists
//! the cycle's snapshot, and returns everything the report layer
//! needs. The pipeline is a single sequential batch: no internal
//! concurrency, no hidden clock reads — "now" comes from the caller.

pub mod enrich;
pub mod normalize;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Duration, Utc};
use skywatch_classify::Classifier;
use skywatch_geo::GeoIndex;
use skywatch_history::{HistoryError, SnapshotStore, diff, trend};
use skywatch_models::{
    AIRCRAFT_COUNT_SCALAR, AircraftObservation, Baseline, DiffResult, EnrichedAircraft,
    KeyedValue, MarketAlert, MarketObservation, MarketWithTrend, Snapshot,
};
use thiserror::Error;

/// History loaded per cycle; covers the 7-day trend window's upper
/// bound of 192 hours.
const LOOKBACK_DAYS: i64 = 8;

/// Snapshots older than this are pruned after each cycle.
const RETENTION_DAYS: i64 = 30;

/// Errors from running a cycle.
#[derive(Debug, Error)]
pub enum FusionError {
    /// Snapshot persistence failed.
    #[error("History error: {0}")]
    History(#[from] HistoryError),
}

/// One cycle's raw upstream data plus the cycle timestamp.
#[derive(Debug, Clone)]
pub struct CycleInput {
    /// The current cycle's UTC timestamp.
    pub now: DateTime<Utc>,
    pub aircraft: Vec<AircraftObservation>,
    pub markets: Vec<MarketObservation>,
}

/// Everything a report layer needs from one cycle.
#[derive(Debug, Clone)]
pub struct CycleOutput {
    /// Enriched aircraft, classified first, then by descending altitude.
    pub aircraft: Vec<EnrichedAircraft>,
    /// Deduplicated markets with their 24h/7d trends, feed order.
    pub markets: Vec<MarketWithTrend>,
    /// Unusual market movements since the previous cycle.
    pub alerts: Vec<MarketAlert>,
    /// Rolling baseline of the aircraft count over the history window.
    pub aircraft_baseline: Baseline,
    /// New/returning partition of this cycle's callsigns.
    pub diff: DiffResult,
    /// The snapshot persisted for this cycle.
    pub snapshot: Snapshot,
    /// History records skipped as unreadable during the load; nonzero
    /// values are a data-quality signal worth surfacing.
    pub skipped_records: usize,
}

/// Runs one fusion cycle.
///
/// Enriches the observations, diffs identifiers against the previous
/// snapshot, computes trends and baselines over the retained window,
/// then appends this cycle's snapshot and prunes expired records.
///
/// # Errors
///
/// Fails if the history window cannot be listed, if the snapshot
/// cannot be persisted, or on a duplicate cycle timestamp
/// ([`HistoryError::DuplicateSnapshot`]).
pub fn run_cycle(
    geo: &GeoIndex,
    classifier: &Classifier,
    store: &SnapshotStore,
    input: CycleInput,
) -> Result<CycleOutput, FusionError> {
    let window = store.load_window(input.now, Duration::days(LOOKBACK_DAYS))?;
    if window.skipped > 0 {
        log::warn!("{} unreadable history records skipped", window.skipped);
    }

    // Empty callsigns cannot carry continuity across cycles; they are
    // enriched like everything else but stay out of the identifier set.
    let identifiers: BTreeSet<String> = input
        .aircraft
        .iter()
        .filter(|a| !a.callsign.trim().is_empty())
        .map(|a| a.callsign.clone())
        .collect();

    // New/returning and market alerts compare against the last run,
    // however old it is within retention, not just the trend window.
    let previous = store.latest_snapshot()?;
    let empty = BTreeSet::new();
    let cycle_diff = diff::partition(
        &identifiers,
        previous
            .as_ref()
            .map_or(&empty, |snapshot| &snapshot.identifiers),
    );
    log::info!(
        "{} aircraft: {} new, {} returning",
        input.aircraft.len(),
        cycle_diff.new.len(),
        cycle_diff.returning.len()
    );

    let aircraft = enrich::enrich_aircraft(geo, classifier, &cycle_diff, &input.aircraft);

    let (markets, keyed) = dedup_markets(&input.markets);
    let trends = trend::compute_deltas(&keyed, &window.snapshots, input.now);
    let empty_keyed = BTreeMap::new();
    let alerts = trend::detect_market_alerts(
        &keyed,
        previous
            .as_ref()
            .map_or(&empty_keyed, |snapshot| &snapshot.keyed),
    );

    let markets = markets
        .into_iter()
        .map(|(observation, key)| MarketWithTrend {
            trend: trends.get(&key).copied().unwrap_or_default(),
            observation,
            key,
        })
        .collect();

    let aircraft_baseline = trend::compute_baseline(&trend::scalar_samples(
        &window.snapshots,
        AIRCRAFT_COUNT_SCALAR,
    ));

    #[allow(clippy::cast_precision_loss)]
    let snapshot = Snapshot {
        taken_at: input.now,
        identifiers,
        scalars: BTreeMap::from([(
            AIRCRAFT_COUNT_SCALAR.to_string(),
            input.aircraft.len() as f64,
        )]),
        keyed,
    };
    store.append(&snapshot)?;
    store.prune(input.now, Duration::days(RETENTION_DAYS))?;

    Ok(CycleOutput {
        aircraft,
        markets,
        alerts,
        aircraft_baseline,
        diff: cycle_diff,
        snapshot,
        skipped_records: window.skipped,
    })
}

/// Deduplicates markets by normalized question key, first listing wins.
fn dedup_markets(
    markets: &[MarketObservation],
) -> (Vec<(MarketObservation, String)>, BTreeMap<String, KeyedValue>) {
    let mut ordered = Vec::new();
    let mut keyed = BTreeMap::new();

    for market in markets {
        let key = normalize::market_key(&market.question);
        if key.is_empty() || keyed.contains_key(&key) {
            log::debug!("Dropping duplicate market listing: {}", market.question);
            continue;
        }
        keyed.insert(
            key.clone(),
            KeyedValue {
                value: market.probability,
                secondary: market.volume_usd,
            },
        );
        ordered.push((market.clone(), key));
    }

    (ordered, keyed)
}
