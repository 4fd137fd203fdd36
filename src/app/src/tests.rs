use crux_core::{Command, Request};
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult as ProtocolResult};

use super::*;
use crate::update::update;

const CATALOG: &str = r#"{
    "events": [
        {"id": 1, "title": "Robotics Demo", "category": "Tech", "date": "2026-03-20T10:00:00",
         "location": "Engineering Block", "capacity": 10, "registered": 9, "tags": ["robots"]},
        {"id": 2, "title": "Choir Concert", "category": "Music", "date": "2026-03-10T18:00:00",
         "location": "Great Hall", "capacity": 5, "registered": 5}
    ]
}"#;

fn page(query: &str, regions: &[Region]) -> PageContext {
    PageContext {
        nav_marker: Some("events".to_string()),
        query: query.to_string(),
        regions: regions.to_vec(),
    }
}

fn ready_model(query: &str, regions: &[Region]) -> Model {
    let mut model = Model::default();
    model.reset(page(query, regions));
    model.catalog = CatalogState::Ready;
    model.events = catalog::parse_catalog(CATALOG.as_bytes()).unwrap();
    model
}

fn http_request(cmd: &mut Command<Effect, Event>) -> Option<Request<HttpRequest>> {
    cmd.effects().find_map(|effect| match effect {
        Effect::Http(request) => Some(request),
        _ => None,
    })
}

fn storage_request(cmd: &mut Command<Effect, Event>) -> Option<Request<StorageOperation>> {
    cmd.effects().find_map(|effect| match effect {
        Effect::Storage(request) => Some(request),
        _ => None,
    })
}

fn renders(cmd: &mut Command<Effect, Event>) -> bool {
    cmd.effects()
        .any(|effect| matches!(effect, Effect::Render(_)))
}

fn has_no_store(request: &HttpRequest) -> bool {
    request.headers.iter().any(|header| {
        header.name.eq_ignore_ascii_case("cache-control") && header.value == "no-store"
    })
}

#[test]
fn initialize_renders_loading_and_fetches_catalog() {
    let mut model = Model::default();
    let mut cmd = update(
        Event::Initialize {
            page: page("", &[Region::Events, Region::EventDetails]),
        },
        &mut model,
    );

    let request = http_request(&mut cmd).expect("catalog request");
    assert_eq!(request.operation.url, "https://relative/events.json");
    assert!(has_no_store(&request.operation));

    let view = view::view(&model);
    assert_eq!(view.active_nav.as_deref(), Some("events"));
    assert!(view.events.unwrap().contains(view::LOADING_MESSAGE));
    assert!(view.event_details.unwrap().contains(view::LOADING_MESSAGE));
    assert_eq!(view.upcoming_events, None);
    assert_eq!(view.my_registrations, None);
}

#[test]
fn layout_partials_load_before_catalog() {
    let mut model = Model::default();
    let mut cmd = update(
        Event::Initialize {
            page: page("", &[Region::Header, Region::Footer, Region::Events]),
        },
        &mut model,
    );

    let mut request = http_request(&mut cmd).expect("header request");
    assert_eq!(request.operation.url, "https://relative/components/header.html");

    request
        .resolve(ProtocolResult::Ok(
            HttpResponse::ok().body("<nav>menu</nav>").build(),
        ))
        .expect("resolve header");

    let event = cmd.events().next().expect("header event");
    assert_eq!(event, Event::HeaderLoaded(Ok("<nav>menu</nav>".to_string())));

    let mut cmd = update(event, &mut model);
    let request = http_request(&mut cmd).expect("footer request");
    assert_eq!(request.operation.url, "https://relative/components/footer.html");
    assert_eq!(
        view::view(&model).header_html.as_deref(),
        Some("<nav>menu</nav>")
    );
}

#[test]
fn failed_partial_is_skipped() {
    let mut model = Model::default();
    model.reset(page("", &[Region::Header, Region::Footer]));

    let mut cmd = update(Event::HeaderLoaded(Err("offline".to_string())), &mut model);

    let request = http_request(&mut cmd).expect("footer request");
    assert_eq!(request.operation.url, "https://relative/components/footer.html");
    assert_eq!(model.header_html, None);
}

#[test]
fn loaded_catalog_reads_registrations_then_renders() {
    let mut model = Model::default();
    model.reset(page("", &[Region::UpcomingEvents, Region::MyRegistrations]));

    let mut cmd = update(Event::Initialize { page: model.page.clone() }, &mut model);
    let mut request = http_request(&mut cmd).expect("catalog request");
    request
        .resolve(ProtocolResult::Ok(HttpResponse::ok().body(CATALOG).build()))
        .expect("resolve catalog");

    let event = cmd.events().next().expect("catalog event");
    let mut cmd = update(event, &mut model);
    assert_eq!(model.catalog, CatalogState::Ready);
    assert_eq!(model.events.len(), 2);

    let mut request = storage_request(&mut cmd).expect("store read");
    assert_eq!(
        request.operation,
        StorageOperation::Get {
            key: REGISTRATION_STORAGE_KEY.to_string()
        }
    );
    request
        .resolve(StorageOutput::Value(Some("[1]".to_string())))
        .expect("resolve store read");

    let event = cmd.events().next().expect("registrations event");
    let mut cmd = update(event, &mut model);
    assert!(renders(&mut cmd));

    let view = view::view(&model);
    assert_eq!(
        view.stats,
        Some(HomeStats {
            total_events: 2,
            open_events: 0,
            seats_left: 0,
        })
    );
    let registrations = view.my_registrations.unwrap();
    assert!(registrations.contains("Robotics Demo"));
    assert!(!registrations.contains("Choir Concert"));
}

#[test]
fn failed_catalog_shows_global_message_everywhere() {
    let mut model = Model::default();
    model.reset(page(
        "?id=1",
        &[
            Region::UpcomingEvents,
            Region::Events,
            Region::EventDetails,
            Region::MyRegistrations,
        ],
    ));

    let mut cmd = update(Event::CatalogLoaded(Err("HTTP 404".to_string())), &mut model);
    assert!(renders(&mut cmd));
    assert_eq!(model.catalog, CatalogState::Unavailable);

    let view = view::view(&model);
    for region in [
        view.upcoming_events,
        view.events,
        view.event_details,
        view.my_registrations,
    ] {
        assert!(region.unwrap().contains(view::CATALOG_UNAVAILABLE_MESSAGE));
    }
    assert_eq!(view.stats, None);
    assert_eq!(view.results_count, None);
}

#[test]
fn empty_catalog_is_unavailable() {
    let mut model = Model::default();
    model.reset(page("", &[Region::Events]));

    let _cmd = update(Event::CatalogLoaded(Ok(Vec::new())), &mut model);

    assert_eq!(model.catalog, CatalogState::Unavailable);
}

#[test]
fn register_for_event_with_one_seat_left() {
    let mut model = ready_model("?id=1", &[Region::EventDetails]);

    let details = view::view(&model).event_details.unwrap();
    assert!(details.contains("1 seats left"));
    assert!(details.contains(r#"data-event-id="1">Register</button>"#));

    let mut cmd = update(Event::Registration(RegistrationEvent::Toggle), &mut model);
    let mut request = storage_request(&mut cmd).expect("store read");
    request
        .resolve(StorageOutput::Value(None))
        .expect("resolve store read");
    let event = cmd.events().next().expect("toggle event");

    let mut cmd = update(event, &mut model);
    let mut request = storage_request(&mut cmd).expect("store write");
    assert_eq!(
        request.operation,
        StorageOperation::Set {
            key: REGISTRATION_STORAGE_KEY.to_string(),
            value: "[1]".to_string(),
        }
    );
    request
        .resolve(StorageOutput::Saved)
        .expect("resolve store write");
    let event = cmd.events().next().expect("saved event");

    let mut cmd = update(event, &mut model);
    assert!(renders(&mut cmd));

    assert!(model.registrations.contains(1));
    assert_eq!(seats_left(&model.events[0], &model.registrations), 0);

    let details = view::view(&model).event_details.unwrap();
    assert!(details.contains("Cancel Registration"));
    assert!(details.contains("text-success"));
    assert!(details.contains("You are registered!"));
}

#[test]
fn register_for_full_event_is_refused() {
    let mut model = ready_model("?id=2", &[Region::EventDetails]);

    let details = view::view(&model).event_details.unwrap();
    assert!(details.contains("Full Capacity"));
    assert!(details.contains(" disabled>Register</button>"));

    let mut cmd = update(
        Event::Registration(RegistrationEvent::ToggleLoaded(StorageOutput::Value(Some(
            "[7]".to_string(),
        )))),
        &mut model,
    );

    assert!(renders(&mut cmd));
    assert!(storage_request(&mut cmd).is_none());
    assert_eq!(model.registrations, [7].into_iter().collect());
    assert_eq!(
        model.flash,
        Some(FlashMessage::error("Sorry, this event is already full."))
    );
}

#[test]
fn cancelling_writes_the_reduced_set() {
    let mut model = ready_model("?id=1", &[Region::EventDetails]);

    let mut cmd = update(
        Event::Registration(RegistrationEvent::ToggleLoaded(StorageOutput::Value(Some(
            "[1,2]".to_string(),
        )))),
        &mut model,
    );

    let request = storage_request(&mut cmd).expect("store write");
    assert_eq!(
        request.operation,
        StorageOperation::Set {
            key: REGISTRATION_STORAGE_KEY.to_string(),
            value: "[2]".to_string(),
        }
    );
    assert_eq!(
        model.flash,
        Some(FlashMessage::error("Registration cancelled successfully."))
    );
}

#[test]
fn failed_save_rereads_the_store() {
    let mut model = ready_model("?id=1", &[Region::EventDetails]);

    let mut cmd = update(
        Event::Registration(RegistrationEvent::Saved(StorageOutput::Error {
            message: "quota exceeded".to_string(),
        })),
        &mut model,
    );

    let request = storage_request(&mut cmd).expect("store read");
    assert!(matches!(request.operation, StorageOperation::Get { .. }));
    assert_eq!(
        model.flash,
        Some(FlashMessage::error(
            "Unable to save your registration. Please try again."
        ))
    );
}

#[test]
fn refresh_clears_previous_feedback() {
    let mut model = ready_model("?id=1", &[Region::EventDetails]);
    model.registrations = [1].into_iter().collect();
    model.flash = Some(FlashMessage::success(
        "You are registered! A confirmation has been saved locally.",
    ));

    let mut cmd = update(Event::Registration(RegistrationEvent::Refresh), &mut model);
    let mut request = storage_request(&mut cmd).expect("store read");
    request
        .resolve(StorageOutput::Value(Some("[]".to_string())))
        .expect("resolve store read");
    let event = cmd.events().next().expect("registrations event");

    let mut cmd = update(event, &mut model);
    assert!(renders(&mut cmd));

    let details = view::view(&model).event_details.unwrap();
    assert!(details.contains(
        r#"<p id="registration-feedback" class="registration-feedback mt-3" role="status"></p>"#
    ));
    assert!(!details.contains("You are registered!"));
    assert!(details.contains(r#"data-event-id="1">Register</button>"#));
}

#[test]
fn toggle_without_selected_event_does_nothing() {
    let mut model = ready_model("", &[Region::EventDetails]);

    let mut cmd = update(Event::Registration(RegistrationEvent::Toggle), &mut model);

    assert!(cmd.effects().next().is_none());
    assert!(model.registrations.is_empty());
}

#[test]
fn filter_change_rereads_store_before_rendering() {
    let mut model = ready_model("", &[Region::Events]);

    let mut cmd = update(
        Event::Listing(ListingEvent::SearchChanged("great hall".to_string())),
        &mut model,
    );
    let mut request = storage_request(&mut cmd).expect("store read");
    request
        .resolve(StorageOutput::Value(Some("not json".to_string())))
        .expect("resolve store read");
    let event = cmd.events().next().expect("registrations event");
    let _cmd = update(event, &mut model);

    let view = view::view(&model);
    assert_eq!(view.results_count.as_deref(), Some("1 event"));
    assert!(view.events.unwrap().contains("Choir Concert"));
    assert_eq!(view.category_options, vec!["Tech", "Music"]);
    assert_eq!(view.filters.search, "great hall");
}

#[test]
fn clear_filters_restores_defaults() {
    let mut model = ready_model("", &[Region::Events]);
    model.filters = ListingFilters {
        search: "nothing matches".to_string(),
        date: "2026-01-01".to_string(),
        category: "Music".to_string(),
        sort: SortOrder::Latest,
    };
    assert_eq!(
        view::view(&model).results_count.as_deref(),
        Some("0 events")
    );

    let _cmd = update(Event::Listing(ListingEvent::ClearFilters), &mut model);

    assert_eq!(model.filters, ListingFilters::default());
    assert_eq!(
        view::view(&model).results_count.as_deref(),
        Some("2 events")
    );
}

#[test]
fn sort_change_accepts_control_values() {
    let mut model = ready_model("", &[Region::Events]);

    let _cmd = update(
        Event::Listing(ListingEvent::SortChanged("availability".to_string())),
        &mut model,
    );

    assert_eq!(model.filters.sort, SortOrder::Availability);
}
