use std::time::Duration;

use agroml_core::config::{AgromlConfig, DedupConfig, GatewayConfig};

#[test]
fn default_gateway_endpoints_match_documented_values() {
    let gw = GatewayConfig::default();
    assert_eq!(gw.crop.base_url, "http://localhost:5000");
    assert_eq!(gw.crop.timeout(), Duration::from_secs(10));
    assert_eq!(gw.disease.base_url, "http://localhost:8000");
    assert_eq!(gw.disease.timeout(), Duration::from_secs(15));
    assert_eq!(gw.crop.predict_url(), "http://localhost:5000/predict");
    assert_eq!(gw.disease.predict_url(), "http://localhost:8000/predict");
}

#[test]
fn default_dedup_window_is_one_hour() {
    let dedup = DedupConfig::default();
    assert_eq!(dedup.window(), chrono::Duration::hours(1));
}

#[test]
fn empty_toml_yields_all_defaults() {
    let config = AgromlConfig::from_toml_str("").unwrap();
    assert_eq!(config.gateway, GatewayConfig::default());
    assert_eq!(config.dedup, DedupConfig::default());
    assert_eq!(config.storage.read_pool_size, 4);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let toml = r#"
        [gateway.crop]
        base_url = "http://ml-crop.internal:9000"

        [dedup]
        window_secs = 120
    "#;
    let config = AgromlConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.gateway.crop.base_url, "http://ml-crop.internal:9000");
    // Unset keys in an overridden section keep their defaults.
    assert_eq!(config.gateway.crop.timeout_secs, 10);
    assert_eq!(config.gateway.disease.base_url, "http://localhost:8000");
    assert_eq!(config.dedup.window_secs, 120);
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agroml.toml");
    std::fs::write(&path, "[dedup]\nwindow_secs = 60\n").unwrap();

    let config = AgromlConfig::from_toml_file(&path).unwrap();
    assert_eq!(config.dedup.window_secs, 60);
}
