use cookie_jar_cli::config::parse_form;
use serde_json::json;

#[test]
fn parses_demo_form() {
    let value = serde_json::from_str(include_str!("../../../demos/erc20-form.json")).unwrap();
    let form = parse_form(value).expect("demo form should parse");

    assert_eq!(form.cookie_jar, "ERC20CookieJar6551");
    assert_eq!(form.erc20_threshold, "5");
    assert!(!form.donation);
}

#[test]
fn reports_path_of_invalid_form_field() {
    let err = parse_form(json!({ "cookieJar": "ERC20CookieJar6551", "donation": "yes" }))
        .expect_err("donation must be a boolean");

    let message = err.to_string();
    assert!(message.starts_with("form error at donation"), "{message}");
    assert!(!message.contains("config error"), "{message}");
}

#[test]
fn reports_index_of_invalid_allowlist_entry() {
    let err = parse_form(json!({ "allowlist": ["0x1111111111111111111111111111111111111111", 7] }))
        .expect_err("allowlist entries must be strings");

    assert!(err.to_string().contains("allowlist[1]"), "{err}");
}
