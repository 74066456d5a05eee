//! Container config and labels props, merged key by key over the defaults.

use anyhow::Context;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{BASE_CLASS_NAME, DEFAULT_ROWS};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub rows: usize,
    pub facet_list: Vec<String>,
    /// Keys the widget does not interpret; carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            facet_list: Vec::new(),
            extra: Map::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub new_search: String,
    pub show_all: String,
    pub facet_titles: FnvHashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            new_search: "New search".to_string(),
            show_all: "Show all".to_string(),
            facet_titles: FnvHashMap::default(),
            extra: Map::new(),
        }
    }
}

impl Labels {
    /// Display title for a facet, falling back to its name.
    pub fn facet_title<'a>(&'a self, facet: &'a str) -> &'a str {
        self.facet_titles
            .get(facet)
            .map(String::as_str)
            .unwrap_or(facet)
    }
}

/// Parse a JSON props object over `T`'s defaults. Empty input, `null` and
/// `undefined` all yield the defaults.
pub fn merge_props<T>(json: &str) -> anyhow::Result<T>
where
    T: Default + for<'de> Deserialize<'de>,
{
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
        return Ok(T::default());
    }
    serde_json::from_str(trimmed)
        .with_context(|| format!("invalid {} props", std::any::type_name::<T>()))
}

/// Root class for the container, with an optional caller-supplied class.
pub fn container_class_name(custom: Option<&str>) -> String {
    match custom.map(str::trim) {
        Some(c) if !c.is_empty() => format!("{BASE_CLASS_NAME} {c}"),
        _ => BASE_CLASS_NAME.to_string(),
    }
}
