use std::collections::HashMap;
use weed_identifier::config::{Config, DEFAULT_MODEL};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn api_key_alone_gets_defaults() {
    let cfg = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_MODEL);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
}

#[test]
fn missing_api_key_is_an_error() {
    let err = Config::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.to_string().contains("GEMINI_API_KEY"));
}

#[test]
fn explicit_values_override_defaults() {
    let cfg = Config::from_lookup(lookup(&[
        ("GEMINI_API_KEY", "secret"),
        ("GEMINI_MODEL", "gemini-1.5-flash"),
        ("BIND_ADDR", "127.0.0.1:8080"),
        ("MAX_UPLOAD_BYTES", "5242880"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gemini-1.5-flash");
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.max_upload_bytes, 5 * 1024 * 1024);
}

#[test]
fn malformed_bind_addr_is_an_error() {
    let err = Config::from_lookup(lookup(&[
        ("GEMINI_API_KEY", "secret"),
        ("BIND_ADDR", "not-an-address"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("BIND_ADDR"));
}

#[test]
fn malformed_upload_limit_is_an_error() {
    let err = Config::from_lookup(lookup(&[
        ("GEMINI_API_KEY", "secret"),
        ("MAX_UPLOAD_BYTES", "ten megabytes"),
    ]))
    .unwrap_err();
    assert!(err.to_string().contains("MAX_UPLOAD_BYTES"));
}
