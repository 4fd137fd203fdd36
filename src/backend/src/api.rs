use crate::config::SiteConfig;
use actix_files::Files;
use actix_web::{
    HttpResponse, Responder,
    http::header::{CacheControl, CacheDirective, ContentType},
    web,
};
use anyhow::{Context, Result};
use event_hub_core::catalog::parse_catalog;
use log::{debug, error, warn};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthcheckInfo {
    pub version: String,
    pub catalog_events: usize,
}

#[derive(Clone, Debug)]
pub struct Api {
    pub site: SiteConfig,
}

impl Api {
    pub fn new(site: SiteConfig) -> Self {
        Api { site }
    }

    /// Parse the catalog the way the browser will and return its event count
    pub async fn validate_catalog(&self) -> Result<usize> {
        let body = tokio::fs::read(&self.site.catalog_path)
            .await
            .with_context(|| {
                format!(
                    "failed to read catalog {}",
                    self.site.catalog_path.display()
                )
            })?;

        let events = parse_catalog(&body).map_err(|e| anyhow::anyhow!(e))?;
        Ok(events.len())
    }

    pub async fn catalog(api: web::Data<Self>) -> actix_web::Result<HttpResponse> {
        debug!("catalog() called");

        let body = tokio::fs::read(&api.site.catalog_path).await.map_err(|e| {
            error!("failed to read catalog: {e:#}");
            actix_web::error::ErrorNotFound("catalog not available")
        })?;

        Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .insert_header(no_store())
            .body(body))
    }

    pub async fn component(
        api: web::Data<Self>,
        name: web::Path<String>,
    ) -> actix_web::Result<HttpResponse> {
        debug!("component() called: {name}");

        if !is_component_name(&name) {
            return Err(actix_web::error::ErrorNotFound("unknown component"));
        }

        let path = api.site.components_dir.join(format!("{name}.html"));
        let body = tokio::fs::read(&path).await.map_err(|e| {
            error!("failed to read component {}: {e:#}", path.display());
            actix_web::error::ErrorNotFound("unknown component")
        })?;

        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header(no_store())
            .body(body))
    }

    pub async fn healthcheck(api: web::Data<Self>) -> impl Responder {
        debug!("healthcheck() called");

        match api.validate_catalog().await {
            Ok(catalog_events) => HttpResponse::Ok().json(HealthcheckInfo {
                version: env!("CARGO_PKG_VERSION").to_string(),
                catalog_events,
            }),
            Err(e) => {
                warn!("healthcheck failed: {e:#}");
                HttpResponse::ServiceUnavailable().body(format!("{e:#}"))
            }
        }
    }

    pub async fn version() -> impl Responder {
        HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
    }

    /// Register all routes; the static site is the fallback service
    pub fn configure(self, cfg: &mut web::ServiceConfig) {
        let site_dir = self.site.site_dir.clone();

        cfg.app_data(web::Data::new(self))
            .route("/events.json", web::get().to(Self::catalog))
            .route("/components/{name}.html", web::get().to(Self::component))
            .route("/healthcheck", web::get().to(Self::healthcheck))
            .route("/version", web::get().to(Self::version))
            .service(Files::new("/", site_dir).index_file("index.html"));
    }
}

/// Data documents must always be revalidated by the browser
fn no_store() -> CacheControl {
    CacheControl(vec![CacheDirective::NoStore])
}

fn is_component_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
