use crate::availability::seats_left;
use crate::config::SiteConfig;
use crate::dates::format_event_date;
use crate::types::{EventRecord, RegistrationSet};

use super::markup::{details_href, escape_html, image_src, tags};

/// Tags shown on a card; the detail page shows all of them
const CARD_TAG_LIMIT: usize = 3;

/// Summary card used by the home and listing pages
pub fn event_card(event: &EventRecord, registrations: &RegistrationSet, config: &SiteConfig) -> String {
    let seats_left = seats_left(event, registrations);
    let is_full = seats_left <= 0;
    let is_registered = registrations.contains_event(event);

    let (seat_class, seat_text) = if is_full {
        ("full", "Full".to_string())
    } else {
        ("open", format!("{seats_left} seats left"))
    };
    let registered_class = if is_registered { " is-registered" } else { "" };
    let registered_indicator = if is_registered {
        r#"<p class="registered-indicator mb-2">✓ Registered</p>"#
    } else {
        ""
    };
    let alt = event.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Event image");
    let card_tags = &event.tags[..event.tags.len().min(CARD_TAG_LIMIT)];

    format!(
        r#"<article class="event-card h-100{registered_class}">
    <img src="{image}" class="event-card-image" alt="{alt}">
    <div class="event-card-body">
        <div class="d-flex justify-content-between align-items-start gap-2 mb-2">
            <span class="pill">{category}</span>
            <span class="seat-status {seat_class}">{seat_text}</span>
        </div>
        {registered_indicator}
        <h3 class="h5 mb-2">{title}</h3>
        <p class="meta mb-1"><strong>Date:</strong> {date}</p>
        <p class="meta mb-1"><strong>Location:</strong> {location}</p>
        <p class="meta mb-3"><strong>Organizer:</strong> {organizer}</p>
        <div class="d-flex flex-wrap gap-2 mb-3">{tags}</div>
        <a href="{href}" class="btn btn-brand w-100">View Details</a>
    </div>
</article>"#,
        image = escape_html(&image_src(event, config)),
        alt = escape_html(alt),
        category = escape_html(event.category_or_default()),
        title = escape_html(event.title_or_default()),
        date = escape_html(&format_event_date(event.date.as_deref())),
        location = escape_html(event.location_or_default()),
        organizer = escape_html(event.organizer_or_default()),
        tags = tags(card_tags),
        href = escape_html(&details_href(event, config)),
    )
}

/// Cards wrapped in grid columns
pub fn card_grid<'a>(
    events: impl IntoIterator<Item = &'a EventRecord>,
    registrations: &RegistrationSet,
    config: &SiteConfig,
    column_class: &str,
) -> String {
    events
        .into_iter()
        .map(|event| {
            format!(
                r#"<div class="{column_class}">{}</div>"#,
                event_card(event, registrations, config)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> EventRecord {
        EventRecord {
            id: Some(8),
            title: Some("Tech <Summit>".to_string()),
            category: Some("Tech".to_string()),
            date: Some("not a date".to_string()),
            capacity: 20,
            registered: 4,
            tags: vec!["ai", "web", "cloud", "data"]
                .into_iter()
                .map(String::from)
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn shows_seats_and_first_three_tags() {
        let card = event_card(&event(), &RegistrationSet::new(), &SiteConfig::default());

        assert!(card.contains("16 seats left"));
        assert!(card.contains("#ai") && card.contains("#web") && card.contains("#cloud"));
        assert!(!card.contains("#data"));
        assert!(card.contains("Date TBA"));
        assert!(card.contains("Tech &lt;Summit&gt;"));
        assert!(card.contains(r#"href="eventdetails.html?id=8""#));
        assert!(!card.contains("Registered"));
    }

    #[test]
    fn marks_registered_events() {
        let registrations: RegistrationSet = [8].into_iter().collect();
        let card = event_card(&event(), &registrations, &SiteConfig::default());

        assert!(card.contains("15 seats left"));
        assert!(card.contains("✓ Registered"));
        assert!(card.contains("is-registered"));
    }

    #[test]
    fn full_events_say_full() {
        let mut event = event();
        event.registered = 20;
        let card = event_card(&event, &RegistrationSet::new(), &SiteConfig::default());

        assert!(card.contains(r#"<span class="seat-status full">Full</span>"#));
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let card = event_card(
            &EventRecord::default(),
            &RegistrationSet::new(),
            &SiteConfig::default(),
        );

        assert!(card.contains("Untitled Event"));
        assert!(card.contains("Location TBA"));
        assert!(card.contains("KNUST Community"));
        assert!(card.contains(r#"<span class="pill">General</span>"#));
        assert!(card.contains(r#"alt="Event image""#));
    }
}
