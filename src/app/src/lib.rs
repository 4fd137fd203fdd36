pub mod availability;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod dates;
pub mod events;
pub mod http_helpers;
pub mod listing;
pub mod model;
pub mod registration_store;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    availability::seats_left,
    commands::storage::{StorageOperation, StorageOutput},
    config::{SiteConfig, REGISTRATION_STORAGE_KEY},
    events::{Event, ListingEvent, RegistrationEvent},
    http_helpers::{build_url, BASE_URL},
    model::Model,
    types::*,
    view::ViewModel,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Storage(StorageOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type StorageCmd = crate::commands::storage::Storage<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        view::view(model)
    }
}
