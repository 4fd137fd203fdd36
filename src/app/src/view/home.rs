use crate::availability::seats_left;
use crate::listing::sort_by_date;
use crate::model::Model;
use crate::types::{EventRecord, HomeStats, RegistrationSet};

use super::card::card_grid;
use super::markup::empty_state;

const FEATURED_COUNT: usize = 3;

pub fn render_upcoming(model: &Model) -> String {
    let mut sorted: Vec<&EventRecord> = model.events.iter().collect();
    sort_by_date(&mut sorted);
    sorted.truncate(FEATURED_COUNT);

    if sorted.is_empty() {
        return empty_state("No upcoming events available right now.");
    }

    card_grid(
        sorted,
        &model.registrations,
        &model.config,
        "col-md-6 col-lg-4",
    )
}

pub fn stats(events: &[EventRecord], registrations: &RegistrationSet) -> HomeStats {
    let seats: Vec<i64> = events
        .iter()
        .map(|event| seats_left(event, registrations))
        .collect();

    HomeStats {
        total_events: events.len(),
        open_events: seats.iter().filter(|seats| **seats > 0).count(),
        seats_left: seats.iter().copied().fold(0, i64::saturating_add),
    }
}
