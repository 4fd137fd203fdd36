//! HTTP helper functions for the Crux Core
//!
//! Response handling shared by the catalog and layout requests.

use crux_http::Response;

/// Prefix for site-relative request URLs.
///
/// `crux_http` requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase`). The shell strips this prefix before calling
/// `fetch()`, so requests go to the origin that served the page.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a site path.
///
/// # Example
/// ```
/// use event_hub_core::http_helpers::build_url;
/// let url = build_url("/events.json");
/// assert_eq!(url, "https://relative/events.json");
/// ```
pub fn build_url(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// Header pair that makes the shell revalidate instead of using its cache
pub const NO_STORE: (&str, &str) = ("Cache-Control", "no-store");

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts error message from HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
        },
        Some(_) => format!("{action} failed: HTTP {status} (Empty body)"),
        None => format!("{action} failed: HTTP {status} (No body)"),
    }
}

/// Raw body of a successful response.
pub fn take_body(action: &str, response: &mut Response<Vec<u8>>) -> Result<Vec<u8>, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    response
        .take_body()
        .ok_or_else(|| format!("{action}: Empty response body"))
}

/// Process HTTP response result into the raw body
pub fn process_body_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<Vec<u8>, String> {
    match result {
        Ok(mut response) => take_body(action, &mut response),
        Err(e) => Err(format!("{action} failed: {e}")),
    }
}

/// Process HTTP response result into text.
///
/// For documents injected verbatim (e.g. layout partials).
pub fn process_text_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<String, String> {
    process_body_response(action, result).and_then(|body| {
        String::from_utf8(body).map_err(|_| format!("{action}: Invalid UTF-8 in response"))
    })
}

// Note: `crux_http::Response` has a private constructor, so these helpers are
// exercised through the update tests, which resolve HTTP effects end to end.
