//! Time-windowed deltas, rolling baselines, and movement alerts.
//!
//! Lookback windows are tolerant ranges rather than exact offsets:
//! cycle cadence drifts (manual runs, delayed triggers, missed
//! cycles), so "24 hours ago" means the most recent snapshot aged
//! between 20 and 30 hours. A window with no snapshot in it yields
//! `None` — a missing comparison point is never reported as zero.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use skywatch_models::{Baseline, KeyedValue, MarketAlert, Snapshot, Trend};

/// Tolerant window for the 24-hour delta: [20h, 30h].
const WINDOW_24H: (i64, i64) = (20, 30);

/// Tolerant window for the 7-day delta: [144h, 192h] (6-8 days).
const WINDOW_7D: (i64, i64) = (144, 192);

/// Probability moves of at least this many points raise an alert.
const PROBABILITY_SPIKE_PTS: f64 = 5.0;

/// Volume at this multiple of the previous cycle raises an alert.
const VOLUME_SURGE_RATIO: f64 = 3.0;

/// Volume surges below this floor are noise, not signal.
const VOLUME_FLOOR_USD: f64 = 10_000.0;

/// Computes per-key 24-hour and 7-day deltas for the current values.
///
/// For each key, history is scanned in reverse chronological order and
/// the first snapshot whose age from `now` lands in the tolerant
/// window — and which carries the key — supplies the comparison value.
/// Deltas are signed: positive means the value increased.
#[must_use]
pub fn compute_deltas(
    current: &BTreeMap<String, KeyedValue>,
    history: &[Snapshot],
    now: DateTime<Utc>,
) -> BTreeMap<String, Trend> {
    current
        .iter()
        .map(|(key, value)| {
            let trend = Trend {
                delta_24h: matched_value(key, history, now, WINDOW_24H)
                    .map(|past| value.value - past),
                delta_7d: matched_value(key, history, now, WINDOW_7D)
                    .map(|past| value.value - past),
            };
            (key.clone(), trend)
        })
        .collect()
}

/// The keyed value from the most recent snapshot whose age lands in
/// `window` (hours, inclusive) and which contains `key`.
fn matched_value(
    key: &str,
    history: &[Snapshot],
    now: DateTime<Utc>,
    window: (i64, i64),
) -> Option<f64> {
    let (min_hours, max_hours) = window;
    history.iter().rev().find_map(|snapshot| {
        let age = now - snapshot.taken_at;
        if age < Duration::hours(min_hours) || age > Duration::hours(max_hours) {
            return None;
        }
        snapshot.keyed.get(key).map(|v| v.value)
    })
}

/// Computes the rolling baseline of a scalar metric.
///
/// An empty sample list yields `None` average and maximum — absence of
/// data must not be reported as zero activity.
#[must_use]
pub fn compute_baseline(samples: &[f64]) -> Baseline {
    if samples.is_empty() {
        return Baseline {
            average: None,
            maximum: None,
            sample_count: 0,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    let maximum = samples.iter().copied().fold(f64::MIN, f64::max);

    Baseline {
        average: Some((mean * 10.0).round() / 10.0),
        maximum: Some(maximum),
        sample_count: samples.len(),
    }
}

/// Extracts one scalar metric from a history window, in order.
#[must_use]
pub fn scalar_samples(history: &[Snapshot], metric: &str) -> Vec<f64> {
    history
        .iter()
        .filter_map(|snapshot| snapshot.scalars.get(metric).copied())
        .collect()
}

/// Flags unusual market movements between the previous cycle and now.
///
/// A probability move of ±5 points or a volume surge of 3x (above a
/// $10k floor) is worth surfacing to the report layer.
#[must_use]
pub fn detect_market_alerts(
    current: &BTreeMap<String, KeyedValue>,
    previous: &BTreeMap<String, KeyedValue>,
) -> Vec<MarketAlert> {
    let mut alerts = Vec::new();

    for (key, value) in current {
        let Some(prior) = previous.get(key) else {
            continue;
        };

        let move_pts = value.value - prior.value;
        if move_pts.abs() >= PROBABILITY_SPIKE_PTS {
            log::warn!(
                "Market alert: \"{key}\" moved {move_pts:+.0} pts ({} -> {})",
                prior.value,
                value.value
            );
            alerts.push(MarketAlert::ProbabilitySpike {
                question: key.clone(),
                previous: prior.value,
                current: value.value,
            });
        }

        if let (Some(volume), Some(prior_volume)) = (value.secondary, prior.secondary) {
            if prior_volume > 0.0 && volume > VOLUME_FLOOR_USD {
                let ratio = (volume / prior_volume * 10.0).round() / 10.0;
                if ratio >= VOLUME_SURGE_RATIO {
                    log::warn!("Market alert: \"{key}\" volume surge {ratio}x");
                    alerts.push(MarketAlert::VolumeSurge {
                        question: key.clone(),
                        ratio,
                    });
                }
            }
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 21, 5, 0, 0).unwrap()
    }

    fn snapshot_with(key: &str, value: f64, age_hours: i64) -> Snapshot {
        Snapshot {
            taken_at: now() - Duration::hours(age_hours),
            identifiers: BTreeSet::new(),
            scalars: BTreeMap::new(),
            keyed: BTreeMap::from([(
                key.to_string(),
                KeyedValue {
                    value,
                    secondary: None,
                },
            )]),
        }
    }

    fn keyed(value: f64, secondary: Option<f64>) -> BTreeMap<String, KeyedValue> {
        BTreeMap::from([("Q1".to_string(), KeyedValue { value, secondary })])
    }

    #[test]
    fn delta_24h_from_a_snapshot_25_hours_old() {
        let history = vec![snapshot_with("Q1", 40.0, 25)];
        let trends = compute_deltas(&keyed(55.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, Some(15.0));
        assert_eq!(trends["Q1"].delta_7d, None);
    }

    #[test]
    fn delta_is_signed() {
        let history = vec![snapshot_with("Q1", 60.0, 22)];
        let trends = compute_deltas(&keyed(45.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, Some(-15.0));
    }

    #[test]
    fn snapshot_outside_the_window_is_not_extrapolated() {
        // 19h is too recent, 31h too old; neither lands in [20h, 30h].
        let history = vec![snapshot_with("Q1", 40.0, 19), snapshot_with("Q1", 30.0, 31)];
        let trends = compute_deltas(&keyed(55.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, None);
    }

    #[test]
    fn most_recent_snapshot_in_the_window_wins() {
        let history = vec![snapshot_with("Q1", 30.0, 29), snapshot_with("Q1", 40.0, 21)];
        let trends = compute_deltas(&keyed(55.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, Some(15.0));
    }

    #[test]
    fn seven_day_window_matches_independently() {
        let history = vec![snapshot_with("Q1", 20.0, 150), snapshot_with("Q1", 40.0, 25)];
        let trends = compute_deltas(&keyed(55.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, Some(15.0));
        assert_eq!(trends["Q1"].delta_7d, Some(35.0));
    }

    #[test]
    fn snapshot_in_window_without_the_key_is_passed_over() {
        let history = vec![snapshot_with("Q1", 40.0, 28), snapshot_with("OTHER", 1.0, 22)];
        let trends = compute_deltas(&keyed(55.0, None), &history, now());
        assert_eq!(trends["Q1"].delta_24h, Some(15.0));
    }

    #[test]
    fn empty_baseline_is_null_not_zero() {
        let baseline = compute_baseline(&[]);
        assert_eq!(baseline.average, None);
        assert_eq!(baseline.maximum, None);
        assert_eq!(baseline.sample_count, 0);
    }

    #[test]
    fn baseline_mean_rounds_to_one_decimal() {
        let baseline = compute_baseline(&[10.0, 11.0, 13.0]);
        assert_eq!(baseline.average, Some(11.3));
        assert_eq!(baseline.maximum, Some(13.0));
        assert_eq!(baseline.sample_count, 3);
    }

    #[test]
    fn probability_spike_raises_an_alert() {
        let alerts = detect_market_alerts(&keyed(55.0, None), &keyed(48.0, None));
        assert_eq!(alerts.len(), 1);
        assert!(matches!(
            &alerts[0],
            MarketAlert::ProbabilitySpike { previous, current, .. }
                if *previous == 48.0 && *current == 55.0
        ));
    }

    #[test]
    fn small_moves_are_quiet() {
        let alerts = detect_market_alerts(&keyed(52.0, None), &keyed(50.0, None));
        assert!(alerts.is_empty());
    }

    #[test]
    fn volume_surge_respects_the_floor() {
        // 5x surge but only $5k of volume: noise.
        let quiet = detect_market_alerts(&keyed(50.0, Some(5_000.0)), &keyed(50.0, Some(1_000.0)));
        assert!(quiet.is_empty());

        let loud =
            detect_market_alerts(&keyed(50.0, Some(60_000.0)), &keyed(50.0, Some(15_000.0)));
        assert!(matches!(
            &loud[0],
            MarketAlert::VolumeSurge { ratio, .. } if (*ratio - 4.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn unknown_previous_market_has_no_alert() {
        let alerts = detect_market_alerts(&keyed(90.0, None), &BTreeMap::new());
        assert!(alerts.is_empty());
    }
}
