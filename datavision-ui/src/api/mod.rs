//! Backend Access
//!
//! Fetch transport for the shared API client and base URL resolution.

pub mod transport;

pub use transport::GlooTransport;

use datavision::client::DEFAULT_API_BASE;

/// `localStorage` key overriding the backend URL
pub const API_URL_KEY: &str = "datavision_api_url";

/// Base URL baked in at build time
const BUILD_API_BASE: Option<&str> = option_env!("DATAVISION_API_URL");

/// Get the API base URL from local storage, the build environment or the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    resolve_api_base(stored, BUILD_API_BASE)
}

fn resolve_api_base(stored: Option<String>, build: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| build.unwrap_or(DEFAULT_API_BASE).to_string());
    // Normalize: remove trailing slash
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_url_wins() {
        let url = resolve_api_base(Some("https://uccp.example/".into()), Some("http://build:5000"));
        assert_eq!(url, "https://uccp.example");
    }

    #[test]
    fn test_build_url_then_default() {
        assert_eq!(resolve_api_base(None, Some("http://build:5000")), "http://build:5000");
        assert_eq!(resolve_api_base(Some("  ".into()), None), "http://localhost:5000");
    }
}
