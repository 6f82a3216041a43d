//! Raw text in, SKU JSON out, through the public API only.

use serde_json::{Value, json};
use skuforge_products::{Product, Validation, validate};

fn description(attributes: Value) -> String {
    json!({ "name": "T-shirt", "attributes": attributes }).to_string()
}

fn skus_json(raw: &str) -> Value {
    assert_eq!(validate(raw), Validation::valid());
    let product = Product::parse(raw).expect("validated input must build");
    serde_json::to_value(product.skus()).unwrap()
}

#[test]
fn single_active_pair() {
    let raw = description(json!([
        { "name": "color", "values": [{ "name": "red", "active": true }] },
        { "name": "size", "values": [{ "name": "S", "active": true }] }
    ]));
    assert_eq!(
        skus_json(&raw),
        json!([{ "color": "red", "size": "S", "active": true }])
    );
}

#[test]
fn inactive_size_disables_the_sku() {
    let raw = description(json!([
        { "name": "color", "values": [{ "name": "red", "active": true }] },
        { "name": "size", "values": [{ "name": "S", "active": false }] }
    ]));
    assert_eq!(
        skus_json(&raw),
        json!([{ "color": "red", "size": "S", "active": false }])
    );
}

#[test]
fn two_by_two_grid() {
    let raw = description(json!([
        { "name": "color", "values": [
            { "name": "red", "active": true },
            { "name": "green", "active": true }
        ] },
        { "name": "size", "values": [
            { "name": "S", "active": false },
            { "name": "M", "active": true }
        ] }
    ]));
    assert_eq!(
        skus_json(&raw),
        json!([
            { "color": "red", "size": "S", "active": false },
            { "color": "red", "size": "M", "active": true },
            { "color": "green", "size": "S", "active": false },
            { "color": "green", "size": "M", "active": true },
        ])
    );
}

#[test]
fn rejected_text_never_reaches_generation() {
    for (raw, message) in [
        ("", "Empty String"),
        ("{abc:1", "Invalid JSON"),
        (r#"{"abc":1,"attributes":[]}"#, "Product Name not Found"),
        (
            r#"{"name":"T-shirt","attributes":[{"name":"color"}]}"#,
            "Product Attribute Values not Found",
        ),
    ] {
        let validation = validate(raw);
        assert!(!validation.is_valid);
        assert_eq!(validation.message, message);

        let err = Product::parse(raw).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}
