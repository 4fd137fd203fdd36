use crate::availability::seats_left;
use crate::dates::format_event_date;
use crate::model::Model;
use crate::types::{DetailSelection, EventRecord, FeedbackKind, FlashMessage};

use super::markup::{escape_html, image_src, tags};

pub fn render(model: &Model) -> String {
    match model.page.detail_selection() {
        DetailSelection::None => info_panel(
            "No event selected",
            "Please choose an event from the events page to view details.",
            "Go to Events",
            &model.config.events_page,
        ),
        DetailSelection::Id(_) | DetailSelection::Unmatched => match model.detail_event() {
            Some(event) => event_details(event, model),
            None => info_panel(
                "Event not found",
                "The event you are looking for does not exist or has been removed.",
                "Back to Events",
                &model.config.events_page,
            ),
        },
    }
}

fn info_panel(heading: &str, text: &str, link_text: &str, href: &str) -> String {
    format!(
        r#"<div class="content-card text-center">
    <h1 class="h3">{heading}</h1>
    <p>{text}</p>
    <a href="{href}" class="btn btn-brand">{link_text}</a>
</div>"#,
        heading = escape_html(heading),
        text = escape_html(text),
        href = escape_html(href),
        link_text = escape_html(link_text),
    )
}

fn event_details(event: &EventRecord, model: &Model) -> String {
    let registrations = &model.registrations;
    let is_registered = registrations.contains_event(event);
    let seats_left = seats_left(event, registrations);
    let is_full = seats_left <= 0;

    let (seat_class, seat_text) = if is_full {
        ("full", "Full Capacity".to_string())
    } else {
        ("open", format!("{seats_left} seats left"))
    };
    let (button_class, button_text) = if is_registered {
        ("btn-outline-danger", "Cancel Registration")
    } else {
        ("btn-brand", "Register")
    };
    let disabled = if !is_registered && is_full {
        " disabled"
    } else {
        ""
    };
    let alt = event.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Event image");
    let id = event.id.map(|id| id.to_string()).unwrap_or_default();

    format!(
        r#"<article class="event-detail-card">
    <img src="{image}" class="event-detail-image" alt="{alt}">
    <div class="event-detail-content">
        <div class="d-flex flex-wrap gap-2 mb-3">
            <span class="pill">{category}</span>
            <span class="seat-status {seat_class}">{seat_text}</span>
        </div>
        <h1 class="mb-3">{title}</h1>
        <p class="meta mb-2"><strong>Date:</strong> {date}</p>
        <p class="meta mb-2"><strong>Location:</strong> {location}</p>
        <p class="meta mb-3"><strong>Organizer:</strong> {organizer}</p>
        <p class="lead mb-3">{description}</p>
        <div class="d-flex flex-wrap gap-2 mb-4">{tags}</div>
        <div class="d-flex flex-wrap gap-3">
            <button id="register-button" class="btn {button_class}" data-event-id="{id}"{disabled}>{button_text}</button>
            <a href="{events_href}" class="btn btn-outline-brand">Back to Events</a>
        </div>
        {feedback}
    </div>
</article>"#,
        image = escape_html(&image_src(event, &model.config)),
        alt = escape_html(alt),
        category = escape_html(event.category_or_default()),
        title = escape_html(event.title_or_default()),
        date = escape_html(&format_event_date(event.date.as_deref())),
        location = escape_html(event.location_or_default()),
        organizer = escape_html(event.organizer_or_default()),
        description = escape_html(event.description_or_default()),
        tags = tags(&event.tags),
        events_href = escape_html(&model.config.events_page),
        feedback = feedback(model.flash.as_ref()),
    )
}

fn feedback(flash: Option<&FlashMessage>) -> String {
    let (tone, text) = match flash {
        Some(FlashMessage {
            kind: FeedbackKind::Success,
            text,
        }) => (" text-success", text.as_str()),
        Some(FlashMessage {
            kind: FeedbackKind::Error,
            text,
        }) => (" text-danger", text.as_str()),
        None => ("", ""),
    };

    format!(
        r#"<p id="registration-feedback" class="registration-feedback{tone} mt-3" role="status">{}</p>"#,
        escape_html(text)
    )
}
