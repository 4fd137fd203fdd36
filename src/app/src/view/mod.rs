//! View model construction
//!
//! Each region is rendered in full from the model on every render; a region
//! the page does not contain stays `None`.

mod card;
mod detail;
mod home;
mod listing;
mod markup;
mod registrations;

pub use markup::{escape_html, image_src};

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::{CatalogState, HomeStats, ListingFilters, Region};

pub const LOADING_MESSAGE: &str = "Loading events...";
pub const CATALOG_UNAVAILABLE_MESSAGE: &str =
    "Unable to load events at the moment. Please try again later.";

/// Everything the shell paints, as markup per page region
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    /// Navigation link to highlight
    pub active_nav: Option<String>,
    pub header_html: Option<String>,
    pub footer_html: Option<String>,

    pub upcoming_events: Option<String>,
    pub stats: Option<HomeStats>,

    pub events: Option<String>,
    pub category_options: Vec<String>,
    /// Values the filter controls should show
    pub filters: ListingFilters,
    pub results_count: Option<String>,

    pub event_details: Option<String>,
    pub my_registrations: Option<String>,
}

pub fn view(model: &Model) -> ViewModel {
    let page = &model.page;
    let mut view = ViewModel {
        active_nav: page.nav_marker.clone(),
        header_html: model.header_html.clone().filter(|_| page.has(Region::Header)),
        footer_html: model.footer_html.clone().filter(|_| page.has(Region::Footer)),
        filters: model.filters.clone(),
        ..Default::default()
    };

    let placeholder = match model.catalog {
        CatalogState::Loading => Some(markup::loading_state(LOADING_MESSAGE)),
        CatalogState::Unavailable => Some(markup::alert_state(CATALOG_UNAVAILABLE_MESSAGE)),
        CatalogState::Ready => None,
    };

    if let Some(placeholder) = placeholder {
        let fill = |region| page.has(region).then(|| placeholder.clone());
        view.upcoming_events = fill(Region::UpcomingEvents);
        view.events = fill(Region::Events);
        view.event_details = fill(Region::EventDetails);
        view.my_registrations = fill(Region::MyRegistrations);
        return view;
    }

    if page.has(Region::UpcomingEvents) {
        view.upcoming_events = Some(home::render_upcoming(model));
        view.stats = Some(home::stats(&model.events, &model.registrations));
    }

    if page.has(Region::Events) {
        let listing = listing::render(model);
        view.events = Some(listing.markup);
        view.results_count = Some(listing.results_count);
        view.category_options = crate::listing::category_options(&model.events);
    }

    if page.has(Region::EventDetails) {
        view.event_details = Some(detail::render(model));
    }

    if page.has(Region::MyRegistrations) {
        view.my_registrations = Some(registrations::render(model));
    }

    view
}
