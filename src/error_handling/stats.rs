//! Processing statistics tracking.
//!
//! Counts status page warnings and merge outcomes for the end-of-run summary.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{InfoType, WarningType};

/// Warning and info counters for one run.
///
/// Every variant is present from construction, so increments and reads never
/// miss. Counters are atomic so the tracker can be shared by reference.
pub struct ProcessingStats {
    warnings: HashMap<WarningType, AtomicUsize>,
    info: HashMap<InfoType, AtomicUsize>,
}

impl ProcessingStats {
    /// All counters at zero.
    pub fn new() -> Self {
        ProcessingStats {
            warnings: WarningType::iter()
                .map(|w| (w, AtomicUsize::new(0)))
                .collect(),
            info: InfoType::iter().map(|i| (i, AtomicUsize::new(0))).collect(),
        }
    }

    /// Increment a warning counter.
    pub fn increment_warning(&self, warning: WarningType) {
        self.bump(self.warnings.get(&warning), 1);
    }

    /// Increment an info counter.
    pub fn increment_info(&self, info_type: InfoType) {
        self.bump(self.info.get(&info_type), 1);
    }

    /// Add `count` to an info counter.
    pub fn add_info(&self, info_type: InfoType, count: usize) {
        self.bump(self.info.get(&info_type), count);
    }

    fn bump(&self, counter: Option<&AtomicUsize>, count: usize) {
        match counter {
            Some(counter) => {
                counter.fetch_add(count, Ordering::Relaxed);
            }
            None => log::error!("Counter missing from ProcessingStats; increment dropped"),
        }
    }

    /// Get the count for a warning type.
    pub fn get_warning_count(&self, warning: WarningType) -> usize {
        self.warnings
            .get(&warning)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for an info type.
    pub fn get_info_count(&self, info_type: InfoType) -> usize {
        self.info
            .get(&info_type)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total warning count across all warning types.
    pub fn total_warnings(&self) -> usize {
        WarningType::iter().map(|w| self.get_warning_count(w)).sum()
    }

    /// Get total info count across all info types.
    pub fn total_info(&self) -> usize {
        InfoType::iter().map(|i| self.get_info_count(i)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
