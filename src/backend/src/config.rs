use anyhow::{Context, Result};
use std::{env, path::PathBuf, sync::OnceLock};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP server configuration
    pub ui: UiConfig,

    /// Static site configuration
    pub site: SiteConfig,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Root of the static site (HTML shell, CSS, images, compiled core)
    pub site_dir: PathBuf,
    /// Event catalog document served as `/events.json`
    pub catalog_path: PathBuf,
    /// Directory holding the `header.html` and `footer.html` partials
    pub components_dir: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables.
    ///
    /// # Panics
    /// Panics if configuration loading fails. This is intentional as the
    /// application cannot function without valid configuration.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| Self::load().expect("failed to load application configuration"))
    }

    /// Load and validate all configuration from environment variables
    pub fn load() -> Result<Self> {
        let ui = UiConfig::load()?;
        let site = SiteConfig::load()?;

        Ok(Self { ui, site })
    }
}

impl UiConfig {
    fn load() -> Result<Self> {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("UI_PORT")
            .unwrap_or_else(|_| "1977".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        Ok(Self { bind_address, port })
    }
}

impl SiteConfig {
    fn load() -> Result<Self> {
        let site_dir = PathBuf::from(env::var("SITE_DIR").unwrap_or_else(|_| "./site".to_string()));

        anyhow::ensure!(
            site_dir.is_dir(),
            "failed to find site directory: {} is missing",
            site_dir.display()
        );

        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| site_dir.join("events.json"));

        Ok(Self::new(site_dir, catalog_path))
    }

    pub fn new(site_dir: PathBuf, catalog_path: PathBuf) -> Self {
        let components_dir = site_dir.join("components");

        Self {
            site_dir,
            catalog_path,
            components_dir,
        }
    }
}
