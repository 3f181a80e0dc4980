//! File-per-cycle snapshot persistence.
//!
//! Each cycle writes one JSON record named after its UTC timestamp at
//! hour granularity (`snapshot-20260321T050000Z.json`), so a window
//! can be selected from filenames alone without deserializing the
//! whole history. Appends go through a temp file and rename, so a
//! concurrent reader sees either the old state or the complete new
//! record, never a partial one.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};
use skywatch_models::Snapshot;

use crate::HistoryError;

const FILE_PREFIX: &str = "snapshot-";
const FILE_SUFFIX: &str = ".json";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Snapshots read back from disk plus a data-quality signal.
#[derive(Debug, Clone, Default)]
pub struct LoadedWindow {
    /// Snapshots inside the lookback window, ascending by timestamp.
    pub snapshots: Vec<Snapshot>,
    /// Records skipped because they could not be read or parsed.
    pub skipped: usize,
}

impl LoadedWindow {
    /// The most recent snapshot in the window.
    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

/// Append-only store of one snapshot record per cycle.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Persists one cycle's snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::DuplicateSnapshot`] if a record for the
    /// same cycle hour already exists — cycles are serialized, so a
    /// collision means the scheduling invariant was violated. Also
    /// fails on I/O or serialization errors.
    pub fn append(&self, snapshot: &Snapshot) -> Result<(), HistoryError> {
        let taken_at = truncate_to_hour(snapshot.taken_at);
        let path = self.record_path(taken_at);
        if path.exists() {
            return Err(HistoryError::DuplicateSnapshot { taken_at });
        }

        // The persisted record carries the same hour-truncated timestamp
        // as its filename; window selection keys off filenames alone.
        let mut record = snapshot.clone();
        record.taken_at = taken_at;
        let json = serde_json::to_vec(&record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &path)?;

        log::info!(
            "Saved snapshot {taken_at}: {} identifiers, {} keyed observations",
            snapshot.identifiers.len(),
            snapshot.keyed.len()
        );
        Ok(())
    }

    /// Loads all snapshots with `taken_at >= now - lookback`, ascending.
    ///
    /// Records that cannot be read or parsed are skipped and counted in
    /// [`LoadedWindow::skipped`]; a single bad record never aborts the
    /// load.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store directory itself cannot be
    /// listed.
    pub fn load_window(
        &self,
        now: DateTime<Utc>,
        lookback: Duration,
    ) -> Result<LoadedWindow, HistoryError> {
        let cutoff = now - lookback;
        let mut window = LoadedWindow::default();
        let mut timestamped = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let Ok(entry) = entry else {
                window.skipped += 1;
                continue;
            };
            let path = entry.path();
            let Some(taken_at) = parse_record_timestamp(&path) else {
                // Not a snapshot record (temp files, stray content).
                continue;
            };
            if taken_at < cutoff {
                continue;
            }
            timestamped.push((taken_at, path));
        }

        timestamped.sort_by_key(|(taken_at, _)| *taken_at);

        for (_, path) in timestamped {
            match read_record(&path) {
                Ok(snapshot) => window.snapshots.push(snapshot),
                Err(error) => {
                    log::warn!("Skipping unreadable snapshot {}: {error}", path.display());
                    window.skipped += 1;
                }
            }
        }

        log::debug!(
            "Loaded {} snapshots ({} skipped) within {lookback} of {now}",
            window.snapshots.len(),
            window.skipped
        );
        Ok(window)
    }

    /// Reads back the most recent snapshot on record, regardless of any
    /// lookback window.
    ///
    /// Cycle diffing compares against the last run even when it is far
    /// older than the trend windows, so this lookup is bounded by
    /// retention alone. Unreadable records are skipped in favor of the
    /// next most recent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store directory itself cannot be
    /// listed.
    pub fn latest_snapshot(&self) -> Result<Option<Snapshot>, HistoryError> {
        let mut timestamped = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            let Some(taken_at) = parse_record_timestamp(&path) else {
                continue;
            };
            timestamped.push((taken_at, path));
        }
        timestamped.sort_by_key(|(taken_at, _)| *taken_at);

        while let Some((_, path)) = timestamped.pop() {
            match read_record(&path) {
                Ok(snapshot) => return Ok(Some(snapshot)),
                Err(error) => {
                    log::warn!("Skipping unreadable snapshot {}: {error}", path.display());
                }
            }
        }
        Ok(None)
    }

    /// Deletes records strictly older than the retention threshold.
    ///
    /// Best-effort: records that cannot be deleted are logged and
    /// skipped. Returns the number of records removed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store directory itself cannot be
    /// listed.
    pub fn prune(&self, now: DateTime<Utc>, retention: Duration) -> Result<usize, HistoryError> {
        let cutoff = now - retention;
        let mut removed = 0;

        for entry in fs::read_dir(&self.dir)? {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            let Some(taken_at) = parse_record_timestamp(&path) else {
                continue;
            };
            if taken_at >= cutoff {
                continue;
            }
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(error) => {
                    log::warn!("Failed to prune snapshot {}: {error}", path.display());
                }
            }
        }

        if removed > 0 {
            log::info!("Pruned {removed} snapshots older than {cutoff}");
        }
        Ok(removed)
    }

    fn record_path(&self, taken_at: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!(
            "{FILE_PREFIX}{}{FILE_SUFFIX}",
            taken_at.format(TIMESTAMP_FORMAT)
        ))
    }
}

/// Cycle timestamps are hour-granular.
fn truncate_to_hour(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(timestamp)
}

/// Extracts the cycle timestamp from a record filename, or `None` for
/// files that are not snapshot records.
fn parse_record_timestamp(path: &Path) -> Option<DateTime<Utc>> {
    let name = path.file_name()?.to_str()?;
    let stamp = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    let naive = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some(naive.and_utc())
}

fn read_record(path: &Path) -> Result<Snapshot, HistoryError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
