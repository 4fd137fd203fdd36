use serde::{Deserialize, Serialize};

use crate::commands::storage::StorageOutput;
use crate::types::{EventRecord, PageContext};

/// Listing page filter controls
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    SearchChanged(String),
    DateChanged(String),
    CategoryChanged(String),
    SortChanged(String),
    ClearFilters,
}

/// Registration state of the current browser
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// Register for, or cancel, the event shown on the detail page
    Toggle,
    /// Re-read the store, e.g. after another tab changed it
    Refresh,

    // Storage responses (internal events, skipped from serialization)
    #[serde(skip)]
    Loaded(StorageOutput),
    #[serde(skip)]
    ToggleLoaded(StorageOutput),
    #[serde(skip)]
    Saved(StorageOutput),
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Page load
    Initialize { page: PageContext },

    Listing(ListingEvent),
    Registration(RegistrationEvent),

    // Bootstrap responses (internal events, skipped from serialization)
    #[serde(skip)]
    HeaderLoaded(Result<String, String>),
    #[serde(skip)]
    FooterLoaded(Result<String, String>),
    #[serde(skip)]
    CatalogLoaded(Result<Vec<EventRecord>, String>),
}
