//! Filtering and ordering behind the listing page controls.

use std::cmp::Reverse;

use crate::availability::seats_left;
use crate::dates::{compare_dates, date_prefix};
use crate::types::{EventRecord, ListingFilters, RegistrationSet, SortOrder};

/// Distinct non-empty categories in order of first appearance
pub fn category_options(events: &[EventRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    for category in events.iter().filter_map(EventRecord::category) {
        if !categories.iter().any(|known| known == category) {
            categories.push(category.to_string());
        }
    }

    categories
}

/// Search, date and category must all match
pub fn matches(event: &EventRecord, filters: &ListingFilters) -> bool {
    let term = filters.search_term();
    let title = event.title.as_deref().unwrap_or_default().to_lowercase();
    let location = event.location.as_deref().unwrap_or_default().to_lowercase();
    let matches_search = title.contains(&term) || location.contains(&term);

    let matches_date = filters
        .date_filter()
        .is_none_or(|date| date_prefix(event.date.as_deref()) == date);

    let matches_category = filters
        .category_filter()
        .is_none_or(|category| event.category.as_deref() == Some(category));

    matches_search && matches_date && matches_category
}

/// Events passing the filters, in the selected order
pub fn apply<'a>(
    events: &'a [EventRecord],
    filters: &ListingFilters,
    registrations: &RegistrationSet,
) -> Vec<&'a EventRecord> {
    let mut filtered: Vec<&EventRecord> = events
        .iter()
        .filter(|event| matches(event, filters))
        .collect();

    match filters.sort {
        SortOrder::Soonest => sort_by_date(&mut filtered),
        SortOrder::Latest => {
            sort_by_date(&mut filtered);
            filtered.reverse();
        }
        SortOrder::Availability => {
            filtered.sort_by_key(|event| Reverse(seats_left(event, registrations)))
        }
    }

    filtered
}

/// Stable ascending date order, unparseable dates last
pub fn sort_by_date(events: &mut [&EventRecord]) {
    events.sort_by(|a, b| compare_dates(a.date.as_deref(), b.date.as_deref()));
}

pub fn results_count_text(count: usize) -> String {
    if count == 1 {
        "1 event".to_string()
    } else {
        format!("{count} events")
    }
}
