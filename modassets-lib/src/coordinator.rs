//! Directory registration coordinator.
//!
//! One coordinator exists per asset kind. It remembers which directories it
//! has already scanned, drives each matching file through the kind's
//! extractor, admits candidates into its [`Registry`], and forwards each newly
//! admitted entry to the publish sink exactly once.
//!
//! Every registration call holds the coordinator's lock for the whole
//! check-scan-admit-publish sequence, so concurrent callers never interleave
//! partial updates. Coordinators of different kinds never contend.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use modassets_core::{AssetExtractor, AssetKind, Candidate, ExtractError, PublishSink, SourceUnit};

use crate::registry::Registry;

/// How a registration call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The directory (or single unit) was processed.
    Scanned,
    /// The directory was registered before; nothing was done.
    AlreadyRegistered,
    /// The path or input was invalid; nothing was done.
    Invalid,
}

/// Counters describing one registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReport {
    pub outcome: RegistrationOutcome,
    /// Source units handed to the extractor (or skipped as known duplicates)
    pub units: usize,
    /// Units that failed extraction
    pub failed: usize,
    /// Entries newly admitted and published
    pub admitted: usize,
    /// Candidates rejected because their key was already admitted
    pub duplicates: usize,
}

impl RegistrationReport {
    pub(crate) fn new(outcome: RegistrationOutcome) -> Self {
        Self {
            outcome,
            units: 0,
            failed: 0,
            admitted: 0,
            duplicates: 0,
        }
    }
}

struct CoordinatorState<V> {
    directories: BTreeSet<PathBuf>,
    registry: Registry<V>,
}

/// Generic registration pipeline for one asset kind.
pub struct Coordinator<E: AssetExtractor> {
    extractor: E,
    sink: Box<dyn PublishSink<E::Value>>,
    state: Mutex<CoordinatorState<E::Value>>,
}

impl<E: AssetExtractor> Coordinator<E> {
    pub fn new(extractor: E, sink: impl PublishSink<E::Value> + 'static) -> Self {
        Self {
            extractor,
            sink: Box::new(sink),
            state: Mutex::new(CoordinatorState {
                directories: BTreeSet::new(),
                registry: Registry::new(),
            }),
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.extractor.kind()
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    /// Register a directory and load every matching unit in it.
    ///
    /// Invalid paths are logged and ignored. A directory that was already
    /// registered is a no-op, even if its contents changed since.
    pub fn register_directory(&self, path: &Path) -> RegistrationReport {
        let kind = self.kind();
        let mut state = self.lock();

        let Some(dir) = validate_directory(path) else {
            log::warn!("Invalid or missing {kind} path: {}", path.display());
            return RegistrationReport::new(RegistrationOutcome::Invalid);
        };

        if !state.directories.insert(dir.clone()) {
            log::debug!("{kind} directory already registered: {}", dir.display());
            return RegistrationReport::new(RegistrationOutcome::AlreadyRegistered);
        }

        let mut report = RegistrationReport::new(RegistrationOutcome::Scanned);
        let files = match list_units(&dir, &self.extractor) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Failed to read {kind} directory {}: {e}", dir.display());
                return report;
            }
        };

        for file in files {
            self.process_unit(&mut state, SourceUnit::from_file(file), &mut report);
        }

        log::info!(
            "Registered {kind} directory {}: {} admitted, {} duplicates, {} failed",
            dir.display(),
            report.admitted,
            report.duplicates,
            report.failed,
        );
        report
    }

    /// Process one unit outside any directory scan.
    ///
    /// Runs under the same lock as directory registration.
    pub fn register_unit(&self, unit: SourceUnit) -> RegistrationReport {
        let mut state = self.lock();
        let mut report = RegistrationReport::new(RegistrationOutcome::Scanned);
        self.process_unit(&mut state, unit, &mut report);
        report
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().registry.contains(key)
    }

    pub fn get(&self, key: &str) -> Option<E::Value> {
        self.lock().registry.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().registry.keys()
    }

    /// Canonical paths of every directory registered so far, sorted.
    pub fn registered_directories(&self) -> Vec<PathBuf> {
        self.lock().directories.iter().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, CoordinatorState<E::Value>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn process_unit(
        &self,
        state: &mut CoordinatorState<E::Value>,
        unit: SourceUnit,
        report: &mut RegistrationReport,
    ) {
        let kind = self.kind();
        report.units += 1;

        if let Some(key) = self.extractor.unit_key(&unit) {
            if state.registry.contains(&key) {
                log::debug!("Skipped duplicate {kind} key: {key}");
                report.duplicates += 1;
                return;
            }
        }

        let candidates = match self.extract(&unit) {
            Ok(candidates) => candidates,
            Err(e) => {
                log::warn!("Error processing {}: {e}", unit.origin());
                report.failed += 1;
                return;
            }
        };

        for candidate in candidates {
            self.admit(state, candidate, report);
        }
    }

    fn extract(&self, unit: &SourceUnit) -> Result<Vec<Candidate<E::Value>>, ExtractError> {
        let mut reader = unit.open()?;
        self.extractor.extract(unit, &mut *reader)
    }

    fn admit(
        &self,
        state: &mut CoordinatorState<E::Value>,
        candidate: Candidate<E::Value>,
        report: &mut RegistrationReport,
    ) {
        let kind = self.kind();
        let Candidate { key, value } = candidate;

        if !state.registry.try_admit(key.clone(), value.clone()) {
            log::debug!("Skipped duplicate {kind} key: {key}");
            report.duplicates += 1;
            return;
        }

        report.admitted += 1;
        log::debug!("Added {kind}: {key}");
        if let Err(e) = self.sink.publish(&key, value) {
            log::warn!("{e}");
        }
    }
}

/// Resolve a registration path to its canonical directory, or `None` if it is
/// blank, missing, or not a directory.
fn validate_directory(path: &Path) -> Option<PathBuf> {
    let blank = path
        .to_str()
        .map(|s| s.trim().is_empty())
        .unwrap_or(false);
    if blank || !path.is_dir() {
        return None;
    }
    std::fs::canonicalize(path).ok()
}

/// Files in `dir` accepted by the extractor, sorted by path.
fn list_units<E: AssetExtractor>(dir: &Path, extractor: &E) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && extractor.accepts(p))
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
