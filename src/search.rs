use facet_core::{
    container_class_name, layout, merge_props, reconcile, ChangeEvent, Config, Labels,
    QueryAction, QueryProps, QuerySnapshot, QueryState, QueryUpdate, ResultFacet,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

fn stringify(value: &JsValue) -> anyhow::Result<String> {
    if value.is_undefined() || value.is_null() {
        return Ok("null".to_string());
    }
    let json =
        js_sys::JSON::stringify(value).map_err(|e| anyhow::anyhow!("stringify: {:?}", e))?;
    Ok(json.as_string().unwrap_or_else(|| "null".to_string()))
}

fn to_js<T: Serialize>(value: &T) -> anyhow::Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| anyhow::anyhow!("parse: {:?}", e))
}

#[derive(Serialize)]
struct ChangeNotice<'a> {
    changes: &'a [ChangeEvent],
    query: &'a QuerySnapshot,
}

/// Container coordinating query state for the search widgets.
///
/// `onChange` receives `{changes, query}` once per accepted state change.
/// `changes` lists the normalized events of a `receiveQuery` call and is
/// empty for changes made through the widget itself.
#[wasm_bindgen]
pub struct FacetedSearch {
    config: Config,
    labels: Labels,
    class_name: String,
    state: QueryState,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl FacetedSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        labels: JsValue,
        query_defaults: JsValue,
        class_name: Option<String>,
        on_change: Option<js_sys::Function>,
    ) -> Result<FacetedSearch, JsValue> {
        Self::build(&config, &labels, &query_defaults, class_name.as_deref(), on_change)
            .map_err(js_error)
    }

    /// Reconcile a desired query handed down by the host page. Returns
    /// whether anything changed.
    #[wasm_bindgen(js_name = receiveQuery)]
    pub fn receive_query(&mut self, query: JsValue) -> Result<bool, JsValue> {
        let json = stringify(&query).map_err(js_error)?;
        let props: QueryProps = merge_props(&json).map_err(js_error)?;
        let reconciled = reconcile(&self.state.last, &props);
        match reconciled.update {
            Some(update) => {
                self.commit(QueryAction::Update(update.clone()), &update)
                    .map_err(js_error)?;
                debug_assert_eq!(self.state.last, reconciled.snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[wasm_bindgen(js_name = selectFacetValue)]
    pub fn select_facet_value(
        &mut self,
        facet: String,
        value: String,
        selected: bool,
    ) -> Result<(), JsValue> {
        self.commit(
            QueryAction::SelectFacetValue {
                facet,
                value,
                selected,
            },
            &QueryUpdate::default(),
        )
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = selectFacetRange)]
    pub fn select_facet_range(
        &mut self,
        facet: String,
        lower: i32,
        upper: i32,
    ) -> Result<(), JsValue> {
        self.commit(
            QueryAction::SelectFacetRange {
                facet,
                lower: i64::from(lower),
                upper: i64::from(upper),
            },
            &QueryUpdate::default(),
        )
        .map_err(js_error)
    }

    #[wasm_bindgen(js_name = changeSearchTerm)]
    pub fn change_search_term(&mut self, term: String) -> Result<(), JsValue> {
        self.commit(QueryAction::ChangeSearchTerm(term), &QueryUpdate::default())
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = newSearch)]
    pub fn new_search(&mut self) -> Result<(), JsValue> {
        self.commit(QueryAction::NewSearch, &QueryUpdate::default())
            .map_err(js_error)
    }

    pub fn query(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.last).map_err(js_error)
    }

    #[wasm_bindgen(js_name = defaultQuery)]
    pub fn default_query(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.default).map_err(js_error)
    }

    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(&self.config).map_err(js_error)
    }

    pub fn labels(&self) -> Result<JsValue, JsValue> {
        to_js(&self.labels).map_err(js_error)
    }

    #[wasm_bindgen(js_name = className)]
    pub fn class_name(&self) -> String {
        self.class_name.clone()
    }

    /// Facets to render for `results` (an array of `{name, type}`), in
    /// `config.facetList` order.
    #[wasm_bindgen(js_name = facetLayout)]
    pub fn facet_layout(&self, results: JsValue) -> Result<JsValue, JsValue> {
        let json = stringify(&results).map_err(js_error)?;
        let facets: Vec<ResultFacet> = merge_props(&json).map_err(js_error)?;
        to_js(&layout(&self.config.facet_list, &facets)).map_err(js_error)
    }
}

impl FacetedSearch {
    fn build(
        config: &JsValue,
        labels: &JsValue,
        query_defaults: &JsValue,
        class_name: Option<&str>,
        on_change: Option<js_sys::Function>,
    ) -> anyhow::Result<Self> {
        let config: Config = merge_props(&stringify(config)?)?;
        let labels: Labels = merge_props(&stringify(labels)?)?;
        let defaults: QuerySnapshot = merge_props(&stringify(query_defaults)?)?;
        let state = QueryState::default().apply(QueryAction::SetQueryDefaults(Some(defaults)))?;
        log::info!(
            "faceted search ready: rows={} facets={}",
            config.rows,
            config.facet_list.len()
        );
        Ok(Self {
            config,
            labels,
            class_name: container_class_name(class_name),
            state,
            on_change,
        })
    }

    fn commit(&mut self, action: QueryAction, update: &QueryUpdate) -> anyhow::Result<()> {
        let next = self.state.apply(action)?;
        if next == self.state {
            return Ok(());
        }
        self.state = next;
        if let Some(callback) = &self.on_change {
            let payload = to_js(&ChangeNotice {
                changes: &update.changes,
                query: &self.state.last,
            })?;
            if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
                log::error!("onChange error: {:?}", e);
            }
        }
        Ok(())
    }
}
