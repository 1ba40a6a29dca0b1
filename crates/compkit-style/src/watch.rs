//! Watch mode: re-validate CSS modules as they change.
//!
//! Changes are detected by polling file fingerprints (modification time,
//! size and an xxh64 content hash) on a fixed interval. Each change is
//! validated synchronously and handed to the caller before the next one is
//! looked at; there is no debouncing.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::time::MissedTickBehavior;
use walkdir::WalkDir;
use xxhash_rust::xxh64::xxh64;

use compkit_core::{CompkitError, CompkitResult};

use crate::validator::{ValidationIssue, is_css_module, validate_file};

/// Default polling interval.
pub const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_WATCH_INTERVAL,
        }
    }
}

/// Something observed during a watch pass.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A file was created or modified and has been re-validated.
    Changed {
        path: PathBuf,
        issues: Vec<ValidationIssue>,
    },
    /// A previously seen file disappeared.
    Removed { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
    // Catches same-size rewrites that keep the old mtime.
    hash: u64,
}

/// A change reported by [`ChangeTracker::poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Modified(PathBuf),
    Removed(PathBuf),
}

/// Tracks CSS module fingerprints under a file or directory.
pub struct ChangeTracker {
    root: PathBuf,
    known: BTreeMap<PathBuf, Fingerprint>,
}

impl ChangeTracker {
    /// Start tracking `root`, taking the current state as the baseline.
    pub fn new(root: &Path) -> CompkitResult<Self> {
        if !root.exists() {
            return Err(CompkitError::WatchTarget(root.to_path_buf()));
        }

        let mut tracker = Self {
            root: root.to_path_buf(),
            known: BTreeMap::new(),
        };
        tracker.known = tracker.scan();
        Ok(tracker)
    }

    /// Number of files currently tracked.
    pub fn tracked(&self) -> usize {
        self.known.len()
    }

    /// Rescan and return changes since the previous scan, in path order.
    pub fn poll(&mut self) -> Vec<Change> {
        let current = self.scan();
        let mut changes = Vec::new();

        for (path, fingerprint) in &current {
            if self.known.get(path) != Some(fingerprint) {
                changes.push(Change::Modified(path.clone()));
            }
        }

        for path in self.known.keys() {
            if !current.contains_key(path) {
                changes.push(Change::Removed(path.clone()));
            }
        }

        self.known = current;
        changes
    }

    fn scan(&self) -> BTreeMap<PathBuf, Fingerprint> {
        let mut files = BTreeMap::new();

        for entry in WalkDir::new(&self.root).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() || !is_css_module(entry.path()) {
                continue;
            }
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            let Ok(bytes) = std::fs::read(entry.path()) else {
                continue;
            };
            files.insert(
                entry.path().to_path_buf(),
                Fingerprint {
                    modified: metadata.modified().ok(),
                    len: metadata.len(),
                    hash: xxh64(&bytes, 0),
                },
            );
        }

        files
    }
}

/// Watch `root` until `shutdown` resolves.
///
/// Fails only if `root` does not exist when the watch starts. Files present
/// at start are not validated until they change.
pub async fn watch<S, F>(
    root: &Path,
    options: &WatchOptions,
    shutdown: S,
    mut on_event: F,
) -> CompkitResult<()>
where
    S: Future<Output = ()>,
    F: FnMut(WatchEvent),
{
    let mut tracker = ChangeTracker::new(root)?;
    tracing::info!(
        root = %root.display(),
        files = tracker.tracked(),
        interval_ms = options.interval.as_millis() as u64,
        "watching for changes"
    );

    let mut ticker = tokio::time::interval(options.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the baseline is already taken.
    ticker.tick().await;

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!("watch stopped");
                break;
            }
            _ = ticker.tick() => {
                for change in tracker.poll() {
                    let event = match change {
                        Change::Modified(path) => {
                            let issues = validate_file(&path);
                            WatchEvent::Changed { path, issues }
                        }
                        Change::Removed(path) => {
                            tracing::debug!(path = %path.display(), "file removed");
                            WatchEvent::Removed { path }
                        }
                    };
                    on_event(event);
                }
            }
        }
    }

    Ok(())
}
