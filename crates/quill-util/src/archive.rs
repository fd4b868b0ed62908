use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Post count for one calendar month, used for the archive sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub count: u64,
}

/// Neighbors of an item in its ordering: the closest strictly-earlier and
/// closest strictly-later items, either of which may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent<T> {
    pub previous: Option<T>,
    pub next: Option<T>,
}

/// Group items by the (year, month) of their date, most recent month first.
///
/// Operates on an already-fetched snapshot so the aggregation stays pure and
/// matches whatever listing the snapshot was drawn from.
pub fn monthly_counts<T>(items: &[T], date: impl Fn(&T) -> DateTime<Utc>) -> Vec<MonthBucket> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for item in items {
        let when = date(item);
        *buckets.entry((when.year(), when.month())).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .rev()
        .map(|((year, month), count)| MonthBucket { year, month, count })
        .collect()
}

/// Find the items adjacent to `current` in the ordering induced by `key`.
///
/// `previous` is the item with the largest key strictly below `current`;
/// `next` the item with the smallest key strictly above. Ties between the
/// two lookups are impossible since each compares strictly.
pub fn adjacent_by<'a, T, K: Ord>(
    items: &'a [T],
    current: &K,
    key: impl Fn(&T) -> K,
) -> Adjacent<&'a T> {
    let mut previous: Option<(&T, K)> = None;
    let mut next: Option<(&T, K)> = None;
    for item in items {
        let k = key(item);
        if k < *current {
            if previous.as_ref().is_none_or(|(_, best)| k > *best) {
                previous = Some((item, k));
            }
        } else if k > *current && next.as_ref().is_none_or(|(_, best)| k < *best) {
            next = Some((item, k));
        }
    }
    Adjacent {
        previous: previous.map(|(item, _)| item),
        next: next.map(|(item, _)| item),
    }
}
