use crate::dates::format_event_date;
use crate::listing::sort_by_date;
use crate::model::Model;
use crate::types::EventRecord;

use super::markup::{details_href, empty_state, escape_html};

pub const NO_REGISTRATIONS_MESSAGE: &str =
    "You have not registered for any event yet. Explore events to get started.";

/// Events this browser registered for, soonest first
pub fn render(model: &Model) -> String {
    let mut registered: Vec<&EventRecord> = model
        .events
        .iter()
        .filter(|event| model.registrations.contains_event(event))
        .collect();
    sort_by_date(&mut registered);

    if registered.is_empty() {
        return empty_state(NO_REGISTRATIONS_MESSAGE);
    }

    registered
        .into_iter()
        .map(|event| {
            format!(
                r#"<div class="col-md-6">
    <article class="registration-item h-100">
        <h3 class="h6 mb-1">{title}</h3>
        <p class="meta mb-1"><strong>Date:</strong> {date}</p>
        <p class="meta mb-3"><strong>Location:</strong> {location}</p>
        <a href="{href}" class="btn btn-sm btn-outline-brand">Manage Registration</a>
    </article>
</div>"#,
                title = escape_html(event.title_or_default()),
                date = escape_html(&format_event_date(event.date.as_deref())),
                location = escape_html(event.location_or_default()),
                href = escape_html(&details_href(event, &model.config)),
            )
        })
        .collect()
}
