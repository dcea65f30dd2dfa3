//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{InfoType, ProcessingStats, WarningType};

/// Prints warning and info counters to the log.
///
/// Zero counters are omitted; the warning section is skipped entirely on a
/// clean run.
pub fn print_run_statistics(stats: &ProcessingStats) {
    for line in statistics_lines(stats) {
        info!("{}", line);
    }
}

fn statistics_lines(stats: &ProcessingStats) -> Vec<String> {
    let mut lines = Vec::new();

    let total_warnings = stats.total_warnings();
    if total_warnings > 0 {
        lines.push(format!("Warning Counts ({} total):", total_warnings));
        for warning_type in WarningType::iter() {
            let count = stats.get_warning_count(warning_type);
            if count > 0 {
                lines.push(format!("   {}: {}", warning_type.as_str(), count));
            }
        }
    }

    if stats.total_info() > 0 {
        lines.push("Merge Counts:".to_string());
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                lines.push(format!("   {}: {}", info_type.as_str(), count));
            }
        }
    }

    lines
}
