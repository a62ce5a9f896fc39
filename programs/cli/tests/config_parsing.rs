use cookie_jar_cli::config::{parse_config, MinterConfig};
use cookie_jar_minter::donation::DonationArgument;
use serde_json::json;
use tracing::Level;

/// Build a minimal valid configuration so that we can tweak it in each test.
fn base_config_json() -> serde_json::Value {
    json!({
        "rpc_url": "http://localhost:8545",
        "private_key": "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
        "deployment": "./deployment.json",
        "donation_argument": "wei",
        "tracing": { "level": "debug" }
    })
}

#[test]
fn parses_full_config() {
    let config: MinterConfig = parse_config(base_config_json()).expect("config should parse");

    assert_eq!(config.rpc_url, "http://localhost:8545");
    assert!(config.private_key.is_some());
    assert_eq!(config.deployment.to_str(), Some("./deployment.json"));
    assert_eq!(config.donation_argument, DonationArgument::Wei);
    assert_eq!(config.tracing.level(), Level::DEBUG);
}

#[test]
fn applies_defaults() {
    let config: MinterConfig = parse_config(json!({
        "rpc_url": "http://localhost:8545",
        "deployment": "./deployment.json"
    }))
    .expect("config should parse");

    assert!(config.private_key.is_none());
    assert_eq!(config.donation_argument, DonationArgument::Raw);
    assert_eq!(config.tracing.level(), Level::INFO);
}

#[test]
fn unknown_level_falls_back_to_info() {
    let mut value = base_config_json();
    value["tracing"]["level"] = json!("chatty");

    let config: MinterConfig = parse_config(value).expect("config should parse");
    assert_eq!(config.tracing.level(), Level::INFO);
}

#[test]
fn missing_rpc_url_is_reported() {
    let mut value = base_config_json();
    value.as_object_mut().unwrap().remove("rpc_url");

    let err = parse_config::<MinterConfig>(value).unwrap_err().to_string();
    assert!(err.contains("rpc_url"), "unexpected error: {err}");
}

#[test]
fn reports_path_of_invalid_field() {
    let mut value = base_config_json();
    value["donation_argument"] = json!("ether");

    let err = parse_config::<MinterConfig>(value).unwrap_err().to_string();
    assert!(
        err.starts_with("config error at donation_argument"),
        "unexpected error: {err}"
    );
}

#[test]
fn reports_path_of_nested_field() {
    let mut value = base_config_json();
    value["tracing"]["level"] = json!(3);

    let err = parse_config::<MinterConfig>(value).unwrap_err().to_string();
    assert!(
        err.starts_with("config error at tracing.level"),
        "unexpected error: {err}"
    );
}

#[test]
fn parses_demo_config() {
    let value: serde_json::Value =
        serde_json::from_str(include_str!("../../../demos/config.json")).unwrap();

    let config: MinterConfig = parse_config(value).expect("demo config should parse");
    assert_eq!(config.donation_argument, DonationArgument::Raw);
    assert!(config.private_key.is_none());
}
