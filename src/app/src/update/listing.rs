use crux_core::Command;

use crate::events::{Event, ListingEvent};
use crate::model::Model;
use crate::types::{ListingFilters, SortOrder};
use crate::update::registration::read_store;
use crate::Effect;

/// Handle listing filter changes.
///
/// Every change re-reads the registration set before the listing is
/// repainted, so availability reflects the latest toggle.
pub fn handle(event: ListingEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ListingEvent::SearchChanged(search) => model.filters.search = search,
        ListingEvent::DateChanged(date) => model.filters.date = date,
        ListingEvent::CategoryChanged(category) => model.filters.category = category,
        ListingEvent::SortChanged(sort) => model.filters.sort = SortOrder::from_value(&sort),
        ListingEvent::ClearFilters => model.filters = ListingFilters::default(),
    }

    read_store(model)
}
