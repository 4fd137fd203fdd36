mod bootstrap;
mod listing;
mod registration;

pub use registration::{toggle, ToggleOutcome};

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Bootstrap chain
        Event::Initialize { page } => bootstrap::initialize(page, model),
        Event::HeaderLoaded(result) => bootstrap::header_loaded(result, model),
        Event::FooterLoaded(result) => bootstrap::footer_loaded(result, model),
        Event::CatalogLoaded(result) => bootstrap::catalog_loaded(result, model),

        // Listing controls domain
        Event::Listing(event) => listing::handle(event, model),

        // Registration domain
        Event::Registration(event) => registration::handle(event, model),
    }
}
