use crate::config::SiteConfig;
use crate::types::EventRecord;

/// Escape text for use inside element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Image URL with a cache-busting key derived from id and date
pub fn image_src(event: &EventRecord, config: &SiteConfig) -> String {
    let base = event
        .image
        .as_deref()
        .filter(|image| !image.is_empty())
        .unwrap_or(&config.default_image);
    let id = event
        .id
        .filter(|id| *id != 0)
        .map_or_else(|| "x".to_string(), |id| id.to_string());
    let cache_key = format!("{id}-{}", event.date.as_deref().unwrap_or_default());

    format!("{base}?v={}", urlencoding::encode(&cache_key))
}

pub fn details_href(event: &EventRecord, config: &SiteConfig) -> String {
    let id = event.id.map(|id| id.to_string()).unwrap_or_default();
    format!("{}?id={id}", config.details_page)
}

pub fn tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">#{}</span>"#, escape_html(tag)))
        .collect()
}

pub fn loading_state(message: &str) -> String {
    format!(
        r#"<div class="loading-state" role="status" aria-live="polite">{}</div>"#,
        escape_html(message)
    )
}

pub fn alert_state(message: &str) -> String {
    format!(
        r#"<div class="empty-state" role="alert">{}</div>"#,
        escape_html(message)
    )
}

pub fn empty_state(message: &str) -> String {
    format!(
        r#"<div class="col-12"><div class="empty-state">{}</div></div>"#,
        escape_html(message)
    )
}
