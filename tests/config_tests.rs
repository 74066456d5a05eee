// Host-side tests for container config, labels and class names.

use facet_core::constants::DEFAULT_ROWS;
use facet_core::{container_class_name, merge_props, Config, Labels};

#[test]
fn missing_props_yield_defaults() {
    for input in ["", "null", "undefined", "  "] {
        let config: Config = merge_props(input).unwrap();
        assert_eq!(config, Config::default());
    }
    let labels: Labels = merge_props("{}").unwrap();
    assert_eq!(labels, Labels::default());
}

#[test]
fn config_props_merge_over_defaults() {
    let config: Config = merge_props(r#"{"rows": 51, "test": 3}"#).unwrap();
    assert_eq!(config.rows, 51);
    assert!(config.facet_list.is_empty());
    assert_eq!(config.extra.get("test"), Some(&serde_json::json!(3)));

    let config: Config = merge_props(r#"{"facetList": ["foo", "bar"]}"#).unwrap();
    assert_eq!(config.rows, DEFAULT_ROWS);
    assert_eq!(config.facet_list, vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn label_props_merge_over_defaults() {
    let labels: Labels =
        merge_props(r#"{"newSearch": "Noaw seersh", "facetTitles": {"someFacet": "Some facet"}}"#)
            .unwrap();
    assert_eq!(labels.new_search, "Noaw seersh");
    assert_eq!(labels.show_all, Labels::default().show_all);
    assert_eq!(labels.facet_title("someFacet"), "Some facet");
    assert_eq!(labels.facet_title("other"), "other");
}

#[test]
fn malformed_props_are_an_error() {
    assert!(merge_props::<Config>(r#"{"rows": "many"}"#).is_err());
    assert!(merge_props::<Labels>("{").is_err());
}

#[test]
fn class_name_appends_custom_class() {
    assert_eq!(container_class_name(None), "hire-faceted-search");
    assert_eq!(container_class_name(Some("  ")), "hire-faceted-search");
    assert_eq!(
        container_class_name(Some("custom-classname")),
        "hire-faceted-search custom-classname"
    );
}
