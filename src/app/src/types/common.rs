use serde::{Deserialize, Serialize};

/// Tone of a flash message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient feedback shown on the detail page after a registration change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FeedbackKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

/// Aggregates shown on the home page
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeStats {
    pub total_events: usize,
    /// Events with at least one seat left
    pub open_events: usize,
    pub seats_left: i64,
}

/// Progress of the catalog download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready,
    /// Nothing to show, either because loading failed or the catalog is empty
    Unavailable,
}
