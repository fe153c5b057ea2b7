//! API URL construction for frontend-backend communication

use super::config::config;

/// Base URL for API requests.
///
/// An absolute `api.base_url` from the config wins; otherwise the backend is
/// assumed to run on the page's host at `api.port`.
pub fn api_base() -> String {
    let api = &config().api;
    if let Some(base_url) = &api.base_url {
        return base_url.clone();
    }

    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    compose_api_base(&protocol, &hostname, api.port)
}

/// `"https:", "erp.local", 3000` → `"https://erp.local:3000"`
pub fn compose_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_api_base() {
        assert_eq!(compose_api_base("https:", "erp.local", 3000), "https://erp.local:3000");
        assert_eq!(compose_api_base("http:", "127.0.0.1", 8080), "http://127.0.0.1:8080");
    }
}
