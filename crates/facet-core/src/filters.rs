//! Which result facets the filter column shows, and how.

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetKind {
    #[serde(rename = "LIST")]
    List,
    #[serde(rename = "RANGE")]
    Range,
}

/// A facet as it arrives in search results. Unknown or missing types are
/// kept as `None` so the facet can be hidden rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFacet {
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_kind")]
    pub kind: Option<FacetKind>,
}

fn lenient_kind<'de, D>(deserializer: D) -> Result<Option<FacetKind>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "facet")]
pub enum FacetSlot {
    #[serde(rename = "list")]
    List(ResultFacet),
    #[serde(rename = "range")]
    Range(ResultFacet),
}

impl FacetSlot {
    pub fn facet(&self) -> &ResultFacet {
        match self {
            FacetSlot::List(f) | FacetSlot::Range(f) => f,
        }
    }
}

/// One slot per `facet_list` entry whose result facet exists with a known
/// type, in `facet_list` order.
pub fn layout(facet_list: &[String], results: &[ResultFacet]) -> Vec<FacetSlot> {
    let by_name: FnvHashMap<&str, &ResultFacet> =
        results.iter().map(|f| (f.name.as_str(), f)).collect();
    facet_list
        .iter()
        .filter_map(|name| by_name.get(name.as_str()))
        .filter_map(|facet| match facet.kind {
            Some(FacetKind::List) => Some(FacetSlot::List((*facet).clone())),
            Some(FacetKind::Range) => Some(FacetSlot::Range((*facet).clone())),
            None => None,
        })
        .collect()
}
