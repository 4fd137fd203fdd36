use serde::{Deserialize, Serialize};

/// Page areas the core can paint into
///
/// The shell reports which of them exist on the current page; renderers for
/// absent regions are skipped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// `#header-placeholder`
    Header,
    /// `#footer-placeholder`
    Footer,
    /// `#upcoming-events-container` together with the home statistics
    UpcomingEvents,
    /// `#events-container` together with its filter controls
    Events,
    /// `#event-details-container`
    EventDetails,
    /// `#my-registrations-container`
    MyRegistrations,
}

/// Static facts about the page the core is running in
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageContext {
    /// Value of the page's navigation marker (`data-page`)
    pub nav_marker: Option<String>,
    /// URL query string, with or without the leading `?`
    pub query: String,
    pub regions: Vec<Region>,
}

impl PageContext {
    pub fn has(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    /// Resolve the `id` query parameter of the detail page
    pub fn detail_selection(&self) -> DetailSelection {
        let query = self.query.trim_start_matches('?');
        let Some(raw) = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
        else {
            return DetailSelection::None;
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return DetailSelection::None;
        }

        match raw.parse::<f64>() {
            Ok(id) if id.is_finite() && id.fract() == 0.0 => match raw.parse::<i64>() {
                Ok(id) => DetailSelection::Id(id),
                Err(_) => DetailSelection::Id(id as i64),
            },
            // a finite id that is not an integer can never match an event
            Ok(id) if id.is_finite() => DetailSelection::Unmatched,
            _ => DetailSelection::None,
        }
    }
}

/// Outcome of reading the detail page's `id` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSelection {
    /// Missing or not a number
    None,
    Id(i64),
    /// A number no event can carry
    Unmatched,
}
