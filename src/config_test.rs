use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SITE_ROOT", "/srv/avotonix"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/avotonix")));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_root.is_none());
}

#[test]
fn from_lookup_accepts_ipv6_bind() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    let ConfigError::Invalid { var, value, .. } = err;
    assert_eq!(var, "PORT");
    assert_eq!(value, "70000");
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid BIND_ADDR: \"localhost\""), "{err}");
}
