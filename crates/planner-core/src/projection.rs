//! Read-only projections used by the calendar and feed renderings.
//!
//! These never reorder the stored collection; they return borrowed views.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::domain::Post;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a post's scheduled date. Empty or invalid dates yield `None`.
pub fn scheduled_on(post: &Post) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(post.scheduled_date.trim(), DATE_FORMAT).ok()
}

/// Posts scheduled within the given month, grouped by day.
pub fn calendar_month(posts: &[Post], year: i32, month: u32) -> BTreeMap<NaiveDate, Vec<&Post>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Post>> = BTreeMap::new();
    for post in posts {
        if let Some(date) = scheduled_on(post) {
            if date.year() == year && date.month() == month {
                days.entry(date).or_default().push(post);
            }
        }
    }
    days
}

/// Feed ordering: newest scheduled date first, then unscheduled posts in
/// insertion order.
pub fn feed_order(posts: &[Post]) -> Vec<&Post> {
    let mut dated: Vec<(NaiveDate, &Post)> = Vec::new();
    let mut undated = Vec::new();

    for post in posts {
        match scheduled_on(post) {
            Some(date) => dated.push((date, post)),
            None => undated.push(post),
        }
    }

    // stable sort keeps insertion order for equal dates
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, p)| p).chain(undated).collect()
}
