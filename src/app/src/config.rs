//! Site-wide constants shared by the update handlers and the renderers.

/// Key under which the registration set is persisted in the shell's storage.
pub const REGISTRATION_STORAGE_KEY: &str = "knustEventHubRegistrations";

/// Static locations and fallbacks of the hosting site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Catalog document, relative to the site root
    pub catalog_path: String,
    pub header_path: String,
    pub footer_path: String,
    pub storage_key: String,
    /// Image used for events that do not declare one
    pub default_image: String,
    pub events_page: String,
    pub details_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_path: "/events.json".to_string(),
            header_path: "/components/header.html".to_string(),
            footer_path: "/components/footer.html".to_string(),
            storage_key: REGISTRATION_STORAGE_KEY.to_string(),
            default_image: "images/campus image.jpg".to_string(),
            events_page: "events.html".to_string(),
            details_page: "eventdetails.html".to_string(),
        }
    }
}
