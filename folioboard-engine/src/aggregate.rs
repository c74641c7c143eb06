/// Grouped counts and rate computations
///
/// These are the building blocks behind every distribution chart and
/// completion figure on the dashboard. All of them are O(n) single
/// passes and total: zero items produce zero-valued results, never a
/// division by zero.
///
/// # Example
///
/// ```
/// use folioboard_engine::aggregate::{aggregate_by, completion_rate};
/// use folioboard_shared::models::{Project, ProjectStatus};
///
/// fn status_counts(projects: &[Project]) {
///     let counts = aggregate_by(projects, |p| p.status);
///     let rate = completion_rate(projects, |p| p.status.is_done());
///     assert!(counts.values().sum::<usize>() == projects.len());
///     assert!(rate <= 100);
/// }
/// ```

use std::collections::HashMap;
use std::hash::Hash;

/// Counts items grouped by a selected field
///
/// Deterministic and insertion-order-irrelevant; the sum of all counts
/// equals the number of items.
pub fn aggregate_by<T, K, F>(items: &[T], field: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(field(item)).or_insert(0) += 1;
    }
    counts
}

/// Share of `count` in `total` as a percentage, one decimal place
///
/// Returns 0.0 when `total` is zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Completion rate over a collection, rounded to the nearest integer
///
/// `round(100 * done / total)`, half rounding up; 0 when the collection
/// is empty. The same rounding applies to project and task rates.
pub fn completion_rate<T, F>(items: &[T], is_done: F) -> u32
where
    F: Fn(&T) -> bool,
{
    if items.is_empty() {
        return 0;
    }
    let done = items.iter().filter(|item| is_done(item)).count();
    (done as f64 * 100.0 / items.len() as f64).round() as u32
}
