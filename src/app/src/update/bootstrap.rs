//! Page start-up: layout partials, then the catalog, then the registration
//! set. Every step waits for the previous response.

use crux_core::{render::render, Command};
use log::{debug, error, info};

use crate::catalog::parse_catalog;
use crate::events::Event;
use crate::http_helpers::{build_url, process_body_response, process_text_response, NO_STORE};
use crate::model::Model;
use crate::types::{CatalogState, EventRecord, PageContext, Region};
use crate::update::registration::read_store;
use crate::{Effect, HttpCmd};

/// Handle a page load: paint the loading state and start the chain
pub fn initialize(page: PageContext, model: &mut Model) -> Command<Effect, Event> {
    debug!("initialize: {page:?}");
    model.reset(page);

    Command::all([render(), fetch_header(model)])
}

pub fn header_loaded(result: Result<String, String>, model: &mut Model) -> Command<Effect, Event> {
    match result {
        Ok(html) => model.header_html = Some(html),
        Err(e) => error!("Error loading reusable layout components: {e}"),
    }

    Command::all([render(), fetch_footer(model)])
}

pub fn footer_loaded(result: Result<String, String>, model: &mut Model) -> Command<Effect, Event> {
    match result {
        Ok(html) => model.footer_html = Some(html),
        Err(e) => error!("Error loading reusable layout components: {e}"),
    }

    Command::all([render(), fetch_catalog(model)])
}

/// An empty catalog, for whatever reason, makes the whole page unavailable
pub fn catalog_loaded(
    result: Result<Vec<EventRecord>, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    let events = result.unwrap_or_else(|e| {
        error!("Error fetching events: {e}");
        Vec::new()
    });

    if events.is_empty() {
        model.catalog = CatalogState::Unavailable;
        model.events.clear();
        return render();
    }

    info!("loaded {} events", events.len());
    model.catalog = CatalogState::Ready;
    model.events = events;

    read_store(model)
}

fn fetch_header(model: &Model) -> Command<Effect, Event> {
    if !model.page.has(Region::Header) {
        return fetch_footer(model);
    }

    HttpCmd::get(build_url(&model.config.header_path))
        .header(NO_STORE.0, NO_STORE.1)
        .build()
        .then_send(|result| Event::HeaderLoaded(process_text_response("Load header", result)))
}

fn fetch_footer(model: &Model) -> Command<Effect, Event> {
    if !model.page.has(Region::Footer) {
        return fetch_catalog(model);
    }

    HttpCmd::get(build_url(&model.config.footer_path))
        .header(NO_STORE.0, NO_STORE.1)
        .build()
        .then_send(|result| Event::FooterLoaded(process_text_response("Load footer", result)))
}

fn fetch_catalog(model: &Model) -> Command<Effect, Event> {
    HttpCmd::get(build_url(&model.config.catalog_path))
        .header(NO_STORE.0, NO_STORE.1)
        .build()
        .then_send(|result| {
            Event::CatalogLoaded(
                process_body_response("Load events", result).and_then(|body| parse_catalog(&body)),
            )
        })
}
