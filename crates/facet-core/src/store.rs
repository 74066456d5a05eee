//! Query state held by the search container.
//!
//! `QueryState` is a value: every action produces a new state and leaves
//! the old one untouched.

use thiserror::Error;

use crate::query::{FacetValue, QuerySnapshot, QueryUpdate};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("range for facet '{facet}' is inverted ({lower} > {upper})")]
    InvertedRange {
        facet: String,
        lower: i64,
        upper: i64,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryAction {
    /// Replace the defaults (and reset `last` to them). `None` restores the
    /// built-in empty query.
    SetQueryDefaults(Option<QuerySnapshot>),
    Update(QueryUpdate),
    SelectFacetValue {
        facet: String,
        value: String,
        selected: bool,
    },
    SelectFacetRange {
        facet: String,
        lower: i64,
        upper: i64,
    },
    ChangeSearchTerm(String),
    NewSearch,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub default: QuerySnapshot,
    pub last: QuerySnapshot,
}

impl QueryState {
    pub fn new(defaults: QuerySnapshot) -> Self {
        Self {
            last: defaults.clone(),
            default: defaults,
        }
    }

    pub fn apply(&self, action: QueryAction) -> Result<QueryState, QueryError> {
        let next = match action {
            QueryAction::SetQueryDefaults(defaults) => Self::new(defaults.unwrap_or_default()),
            QueryAction::Update(update) => self.with_last(update.applied_to(&self.last)),
            QueryAction::SelectFacetValue {
                facet,
                value,
                selected,
            } => self.with_last(select_value(&self.last, facet, value, selected)),
            QueryAction::SelectFacetRange {
                facet,
                lower,
                upper,
            } => {
                if lower > upper {
                    return Err(QueryError::InvertedRange {
                        facet,
                        lower,
                        upper,
                    });
                }
                let values = vec![lower.to_string(), upper.to_string()];
                self.with_last(replace_facet(&self.last, FacetValue { name: facet, values }))
            }
            QueryAction::ChangeSearchTerm(term) => self.with_last(QuerySnapshot {
                term,
                ..self.last.clone()
            }),
            QueryAction::NewSearch => self.with_last(self.default.clone()),
        };
        Ok(next)
    }

    fn with_last(&self, last: QuerySnapshot) -> Self {
        Self {
            default: self.default.clone(),
            last,
        }
    }
}

fn select_value(
    snapshot: &QuerySnapshot,
    facet: String,
    value: String,
    selected: bool,
) -> QuerySnapshot {
    let mut values = snapshot
        .facet_values
        .iter()
        .find(|f| f.name == facet)
        .map(|f| f.values.clone())
        .unwrap_or_default();
    if selected {
        if !values.contains(&value) {
            values.push(value);
        }
    } else {
        values.retain(|v| *v != value);
    }
    replace_facet(snapshot, FacetValue { name: facet, values })
}

// Keeps the facet's position when it already exists, appends otherwise.
// A facet with no values left is dropped.
fn replace_facet(snapshot: &QuerySnapshot, facet: FacetValue) -> QuerySnapshot {
    let mut facet_values = Vec::with_capacity(snapshot.facet_values.len() + 1);
    let mut placed = false;
    for existing in &snapshot.facet_values {
        if existing.name == facet.name {
            placed = true;
            if !facet.values.is_empty() {
                facet_values.push(facet.clone());
            }
        } else {
            facet_values.push(existing.clone());
        }
    }
    if !placed && !facet.values.is_empty() {
        facet_values.push(facet);
    }
    QuerySnapshot {
        facet_values,
        ..snapshot.clone()
    }
}
