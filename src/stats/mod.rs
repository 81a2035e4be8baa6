//! Trailing-window activity summary
//!
//! Buckets tasks by creation day and by completion day over the last N
//! calendar days (UTC), today included.
use chrono::{Days, NaiveDate};

use crate::models::Dataset;

/// Window size used by the `stats` command unless configured otherwise
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Largest window accepted from configuration, about ten years
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// Activity counters for a single calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    /// Tasks created on this day
    pub added: usize,
    /// Tasks completed on this day, whenever they were created
    pub completed: usize,
    /// Sum of estimates of the tasks created on this day
    pub est_minutes: u64,
}

impl DayBucket {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            added: 0,
            completed: 0,
            est_minutes: 0,
        }
    }
}

/// Summarize `days` days ending at `today`, oldest first.
///
/// Every day in the window gets a bucket, including days with no activity.
/// `days == 0`, or a window reaching before chrono's earliest date, yields an
/// empty summary.
pub fn summarize(dataset: &Dataset, today: NaiveDate, days: u32) -> Vec<DayBucket> {
    let Some(start) = days
        .checked_sub(1)
        .and_then(|back| today.checked_sub_days(Days::new(u64::from(back))))
    else {
        return Vec::new();
    };

    let mut buckets: Vec<DayBucket> = start
        .iter_days()
        .take(days as usize)
        .map(DayBucket::empty)
        .collect();

    let index_of = |date: NaiveDate| -> Option<usize> {
        if date < start || date > today {
            return None;
        }
        usize::try_from((date - start).num_days()).ok()
    };

    for task in &dataset.tasks {
        if let Some(i) = index_of(task.created_on()) {
            buckets[i].added += 1;
            buckets[i].est_minutes += u64::from(task.est_minutes);
        }
        if let Some(i) = task.completed_on().and_then(index_of) {
            buckets[i].completed += 1;
        }
    }

    buckets
}

/// One right-aligned line per bucket
pub fn render(buckets: &[DayBucket]) -> String {
    buckets
        .iter()
        .map(|b| {
            format!(
                "{}  added {:>3}  completed {:>3}  est_minutes {:>5}",
                b.date.format("%Y-%m-%d"),
                b.added,
                b.completed,
                b.est_minutes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
