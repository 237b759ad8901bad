//! Adjuster time stats

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_time_expense::{CaptureType, EntryStatus, TimeEntry};

use crate::accumulate;

/// Dashboard figures for the time-entry screen
///
/// `week_hours` and `month_hours` both total the whole filtered set; they
/// are not windowed by calendar week or month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    pub today_hours: Decimal,
    pub week_hours: Decimal,
    pub month_hours: Decimal,
    /// Entries still in DRAFT
    pub pending_entries: usize,
    pub auto_captured: usize,
}

impl Default for TimeStats {
    fn default() -> Self {
        Self {
            today_hours: Decimal::ZERO,
            week_hours: Decimal::ZERO,
            month_hours: Decimal::ZERO,
            pending_entries: 0,
            auto_captured: 0,
        }
    }
}

/// Computes time stats, optionally for a single adjuster
///
/// An adjuster with no entries gets all-zero stats.
pub fn compute_time_entry_stats(entries: &[TimeEntry], today: NaiveDate, adjuster_id: Option<&str>) -> TimeStats {
    let mut stats = TimeStats::default();

    for entry in entries
        .iter()
        .filter(|e| adjuster_id.map_or(true, |id| e.adjuster_id == id))
    {
        if entry.entry_date == today {
            stats.today_hours = accumulate(stats.today_hours, entry.duration);
        }
        stats.week_hours = accumulate(stats.week_hours, entry.duration);
        if entry.status == EntryStatus::Draft {
            stats.pending_entries += 1;
        }
        if entry.capture_type == CaptureType::Auto {
            stats.auto_captured += 1;
        }
    }

    stats.month_hours = stats.week_hours;
    stats
}
