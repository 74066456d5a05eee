//! Query snapshots and reconciliation of incoming query props.
//!
//! All equality here is structural: two facet lists built independently
//! compare equal when their names and values match in order. The derived
//! `PartialEq` impls are the comparison the reconciler relies on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl FacetValue {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTextSearchParameter {
    pub name: String,
    pub term: String,
}

impl FullTextSearchParameter {
    pub fn new(name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            term: term.into(),
        }
    }
}

/// The last-applied query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySnapshot {
    pub facet_values: Vec<FacetValue>,
    pub full_text_search_parameters: Vec<FullTextSearchParameter>,
    pub term: String,
}

/// A desired query handed in from outside. Missing fields request no change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryProps {
    pub facet_values: Option<Vec<FacetValue>>,
    pub full_text_search_parameters: Option<Vec<FullTextSearchParameter>>,
}

impl QueryProps {
    pub fn full_text(&self) -> FullTextRequest<'_> {
        match self.full_text_search_parameters.as_deref() {
            None => FullTextRequest::Absent,
            Some([]) => FullTextRequest::Empty,
            Some(params) => FullTextRequest::Populated(params),
        }
    }
}

impl From<&QuerySnapshot> for QueryProps {
    fn from(snapshot: &QuerySnapshot) -> Self {
        Self {
            facet_values: Some(snapshot.facet_values.clone()),
            full_text_search_parameters: Some(snapshot.full_text_search_parameters.clone()),
        }
    }
}

/// How an incoming full-text field reads: not given, explicitly cleared, or set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FullTextRequest<'a> {
    Absent,
    Empty,
    Populated(&'a [FullTextSearchParameter]),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ChangeEvent {
    #[serde(rename = "facetValues")]
    FacetValues(Vec<FacetValue>),
    #[serde(rename = "setFullText")]
    SetFullText(Vec<FullTextSearchParameter>),
    #[serde(rename = "removeFullText")]
    RemoveFullText,
}

/// Every change accepted by one reconcile call, delivered as one notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryUpdate {
    pub changes: SmallVec<[ChangeEvent; 2]>,
}

impl QueryUpdate {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Apply the changes on top of `snapshot`, returning the new snapshot.
    pub fn applied_to(&self, snapshot: &QuerySnapshot) -> QuerySnapshot {
        let mut next = snapshot.clone();
        for change in &self.changes {
            match change {
                ChangeEvent::FacetValues(values) => next.facet_values = values.clone(),
                ChangeEvent::SetFullText(params) => {
                    next.full_text_search_parameters = params.clone()
                }
                ChangeEvent::RemoveFullText => next.full_text_search_parameters.clear(),
            }
        }
        next
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled {
    pub snapshot: QuerySnapshot,
    pub update: Option<QueryUpdate>,
}

/// Diff `incoming` against `current` by content and build the resulting
/// snapshot plus, when anything differs, a single combined update.
pub fn reconcile(current: &QuerySnapshot, incoming: &QueryProps) -> Reconciled {
    let mut update = QueryUpdate::default();

    if let Some(values) = &incoming.facet_values {
        if *values != current.facet_values {
            update.changes.push(ChangeEvent::FacetValues(values.clone()));
        }
    }

    match incoming.full_text() {
        FullTextRequest::Absent => {}
        FullTextRequest::Empty => {
            if !current.full_text_search_parameters.is_empty() {
                update.changes.push(ChangeEvent::RemoveFullText);
            }
        }
        FullTextRequest::Populated(params) => {
            if params != current.full_text_search_parameters.as_slice() {
                update.changes.push(ChangeEvent::SetFullText(params.to_vec()));
            }
        }
    }

    if update.is_empty() {
        return Reconciled {
            snapshot: current.clone(),
            update: None,
        };
    }

    log::debug!("[query] reconcile accepted {} change(s)", update.changes.len());
    Reconciled {
        snapshot: update.applied_to(current),
        update: Some(update),
    }
}
