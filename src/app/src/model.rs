use crate::config::SiteConfig;
use crate::types::*;

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: SiteConfig,
    pub page: PageContext,

    // Layout partials, verbatim
    pub header_html: Option<String>,
    pub footer_html: Option<String>,

    // Catalog state
    pub catalog: CatalogState,
    pub events: Vec<EventRecord>,

    /// Registration set as of the latest store read
    pub registrations: RegistrationSet,

    // UI state
    pub filters: ListingFilters,
    pub flash: Option<FlashMessage>,
}

impl Model {
    /// The event the detail page asks for, if it exists
    pub fn detail_event(&self) -> Option<&EventRecord> {
        match self.page.detail_selection() {
            DetailSelection::Id(id) => self.events.iter().find(|event| event.id == Some(id)),
            DetailSelection::None | DetailSelection::Unmatched => None,
        }
    }

    /// Start over for a freshly loaded page
    pub fn reset(&mut self, page: PageContext) {
        *self = Self {
            config: self.config.clone(),
            page,
            ..Default::default()
        };
    }
}
