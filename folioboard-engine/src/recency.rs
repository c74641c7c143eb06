/// Trailing time-window filtering
///
/// Selects entities whose timestamp falls inside a trailing window of
/// whole days, used for "recent activity" panels. The boundary is
/// inclusive: an entity stamped exactly `window_days` ago still counts.
///
/// Entities with a missing timestamp are excluded from the result, not
/// treated as an error.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default window for "recent activity" panels
pub const DEFAULT_ACTIVITY_WINDOW_DAYS: i64 = 30;

/// Filters items to those within the trailing window
///
/// Lazy, order-preserving, and restartable: calling this again with the
/// same inputs yields the same sequence. `timestamp_of` may return None
/// for entities with no usable timestamp; those are skipped.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use folioboard_engine::recency::recent_items;
/// use folioboard_shared::models::Project;
///
/// fn recent<'a>(projects: &'a [Project]) -> Vec<&'a Project> {
///     recent_items(projects, |p| Some(p.created_at), 30, Utc::now()).collect()
/// }
/// ```
pub fn recent_items<'a, T, F>(
    items: &'a [T],
    timestamp_of: F,
    window_days: i64,
    now: DateTime<Utc>,
) -> impl Iterator<Item = &'a T>
where
    F: Fn(&T) -> Option<DateTime<Utc>> + 'a,
{
    let cutoff = now - Duration::days(window_days);
    items
        .iter()
        .filter(move |item| matches!(timestamp_of(item), Some(ts) if ts >= cutoff))
}

/// Time range selector offered by the analytics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    /// No window, everything counts
    #[serde(rename = "all")]
    All,

    /// Trailing 30 days
    #[serde(rename = "30d")]
    Days30,

    /// Trailing 90 days
    #[serde(rename = "90d")]
    Days90,

    /// Trailing 365 days
    #[serde(rename = "1y")]
    LastYear,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::All
    }
}

impl TimeRange {
    /// Window size in days; None means unbounded
    pub fn window_days(&self) -> Option<i64> {
        match self {
            TimeRange::All => None,
            TimeRange::Days30 => Some(30),
            TimeRange::Days90 => Some(90),
            TimeRange::LastYear => Some(365),
        }
    }

    /// Converts the range to its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::All => "all",
            TimeRange::Days30 => "30d",
            TimeRange::Days90 => "90d",
            TimeRange::LastYear => "1y",
        }
    }
}
