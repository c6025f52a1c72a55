//! Client configuration tests (environment-driven defaults)

use causa_core::config::{DEFAULT_API_URL, DEFAULT_PAGE_ORIGIN, DEFAULT_REFRESH_INTERVAL, LOCAL_API_URL};
use causa_core::ClientConfig;
use serial_test::serial;
use std::time::Duration;

const VARS: [&str; 4] = [
    "CAUSA_PAGE_ORIGIN",
    "CAUSA_API_URL",
    "CAUSA_REFRESH_SECS",
    "CAUSA_REQUEST_TIMEOUT_MS",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn config_loads_from_defaults() {
    clear_env();

    let cfg = ClientConfig::default();
    assert_eq!(cfg.page_origin, DEFAULT_PAGE_ORIGIN);
    assert_eq!(cfg.api_override, None);
    assert_eq!(cfg.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    assert_eq!(cfg.request_timeout, None);
    // Default origin is a development host
    assert_eq!(cfg.base_url(), LOCAL_API_URL);
}

#[test]
#[serial]
fn config_loads_from_env() {
    clear_env();
    std::env::set_var("CAUSA_PAGE_ORIGIN", "https://causa.example.com");
    std::env::set_var("CAUSA_API_URL", "https://api.causa.example.com");
    std::env::set_var("CAUSA_REFRESH_SECS", "60");
    std::env::set_var("CAUSA_REQUEST_TIMEOUT_MS", "2500");

    let cfg = ClientConfig::from_env();
    assert_eq!(cfg.base_url(), "https://api.causa.example.com");
    assert_eq!(cfg.refresh_interval, Duration::from_secs(60));
    assert_eq!(cfg.request_timeout, Some(Duration::from_millis(2500)));

    clear_env();
}

#[test]
#[serial]
fn invalid_env_values_fall_back() {
    clear_env();
    std::env::set_var("CAUSA_REFRESH_SECS", "0");
    std::env::set_var("CAUSA_REQUEST_TIMEOUT_MS", "soon");
    std::env::set_var("CAUSA_API_URL", "");

    let cfg = ClientConfig::for_origin("https://causa.example.com");
    assert_eq!(cfg.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    assert_eq!(cfg.request_timeout, None);
    assert_eq!(cfg.base_url(), DEFAULT_API_URL);

    clear_env();
}
