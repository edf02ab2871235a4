//! API utilities for frontend-backend communication
//!
//! Builds the backend URLs. The backend listens on [`BACKEND_PORT`] of the
//! host serving the app, unless `AACEAC_API_BASE` was set at build time.

pub const BACKEND_PORT: u16 = 8000;

/// Prefix of every employee-tracker resource.
pub const EMPLOYEE_TRACKER_PATH: &str = "/api/employee-tracker/";

/// Get the base URL (scheme, host and port) for API requests
///
/// # Returns
/// - `AACEAC_API_BASE` when set at build time
/// - otherwise e.g. "http://localhost:8000", derived from the window location
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("AACEAC_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path such as "/api/accounts/login/".
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Base URL of the employee-tracker resources, with a trailing slash.
pub fn employee_tracker_base() -> String {
    api_url(EMPLOYEE_TRACKER_PATH)
}

/// Joins `base` and `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/accounts/login/"),
            "http://localhost:8000/api/accounts/login/"
        );
        assert_eq!(
            join_url("http://localhost:8000/api/employee-tracker/", "woredas/3/"),
            "http://localhost:8000/api/employee-tracker/woredas/3/"
        );
        assert_eq!(join_url("http://h/", ""), "http://h/");
    }
}
