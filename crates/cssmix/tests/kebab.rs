//! Integration tests for merging with hyphenated property names.

use cssmix::prelude::*;
use serde_json::json;

fn kebab() -> StyleMerger {
    StyleMerger::new(MergeOptions::kebab())
}

fn merge_json(values: impl IntoIterator<Item = serde_json::Value>) -> StyleMap {
    kebab().merge(values)
}

#[test]
fn handles_strings() {
    assert_eq!(
        merge_json([json!("color: red; font-size: 16px;")]),
        StyleMap::from_iter([("color", "red"), ("font-size", "16px")])
    );
}

#[test]
fn handles_objects() {
    assert_eq!(
        merge_json([json!({ "display": false, "margin": "10px", "padding": "5px" })]),
        StyleMap::from_iter([("margin", "10px"), ("padding", "5px")])
    );
}

#[test]
fn handles_mixed_inputs() {
    let merged = merge_json([
        json!("font-size: 12px;"),
        json!({ "display": "flex" }),
        json!(["margin: 5px;", { "padding": "10px" }]),
        json!(null),
        json!(false),
    ]);

    assert_eq!(
        merged,
        StyleMap::from_iter([
            ("display", "flex"),
            ("font-size", "12px"),
            ("margin", "5px"),
            ("padding", "10px"),
        ])
    );
}

#[test]
fn same_keys_last_one_wins() {
    let merged = merge_json([
        json!({ "color": "red", "padding": "10px" }),
        json!("color: blue; margin: 5px;"),
        json!({ "margin": "10px" }),
    ]);

    assert_eq!(
        merged,
        StyleMap::from_iter([("color", "blue"), ("margin", "10px"), ("padding", "10px")])
    );
}

#[test]
fn camel_case_keys_are_hyphenated() {
    let merged = merge_json([json!([
        "color: red;",
        [[[{ "fontSize": "12px" }]]],
        { "margin": { "top": "10px" }, "padding": "5px" }
    ])]);

    assert_eq!(
        merged,
        StyleMap::from_iter([
            ("color", "red"),
            ("font-size", "12px"),
            ("margin-top", "10px"),
            ("padding", "5px"),
        ])
    );
}

#[test]
fn string_and_object_forms_collide() {
    let merged = merge_json([json!("font-size: 12px"), json!({ "fontSize": "14px" })]);
    assert_eq!(merged, StyleMap::from_iter([("font-size", "14px")]));
}

#[test]
fn vendor_prefixes() {
    let merged = merge_json([json!({ "WebkitTransition": "none", "MozAppearance": "none" })]);
    assert_eq!(
        merged,
        StyleMap::from_iter([("-webkit-transition", "none"), ("-moz-appearance", "none")])
    );
}

#[test]
fn custom_properties_are_preserved() {
    let merged = merge_json([json!({ "--brandColor": "teal" }), json!("--spacing_Unit: 4px")]);
    assert_eq!(
        merged,
        StyleMap::from_iter([("--brandColor", "teal"), ("--spacing_Unit", "4px")])
    );
}

#[test]
fn inline_css_matches_kebab_keys() {
    let merged = merge_json([json!("color: red"), json!({ "margin": { "left": "2px" } })]);
    assert_eq!(merged.to_inline_css(), "color: red; margin-left: 2px;");
}
