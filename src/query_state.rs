//! Query-state collaborators: where the zoom selection lives outside the view,
//! and how zoom and highlight parameters are read from and written to strings.

use crate::data_types::{Domain, RevisionTerms};
use eyre::{eyre, Result, WrapErr};
use parking_lot::RwLock;
use std::sync::Arc;

/// Externally owned zoom parameter, typically mirrored into the page URL.
pub trait ZoomParamStore: Send + Sync {
    fn zoom(&self) -> Domain;

    fn set_zoom(&self, zoom: Domain);
}

#[derive(Debug, Default)]
struct ZoomParams {
    zoom: Domain,
    writes: u64,
}

/// In-process zoom store shared between the view and the host's query-state layer.
#[derive(Clone, Debug, Default)]
pub struct SharedZoomStore {
    inner: Arc<RwLock<ZoomParams>>,
}

impl SharedZoomStore {
    pub fn new(initial: Domain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ZoomParams {
                zoom: initial,
                writes: 0,
            })),
        }
    }

    /// Number of `set_zoom` calls received so far.
    pub fn writes(&self) -> u64 {
        self.inner.read().writes
    }

    /// Serialized form of the current zoom, for the URL.
    pub fn to_query_param(&self) -> Result<String> {
        format_zoom_param(&self.zoom())
    }
}

impl ZoomParamStore for SharedZoomStore {
    fn zoom(&self) -> Domain {
        self.inner.read().zoom
    }

    fn set_zoom(&self, zoom: Domain) {
        let mut params = self.inner.write();
        params.zoom = zoom;
        params.writes += 1;
    }
}

/// Decodes the `zoom` query parameter. An empty value is the empty domain.
pub fn parse_zoom_param(value: &str) -> Result<Domain> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Domain::empty());
    }
    serde_json::from_str(value).wrap_err_with(|| format!("invalid zoom parameter {value:?}"))
}

/// Encodes a domain for the `zoom` query parameter. The empty domain encodes
/// as an empty string so the parameter can be dropped from the URL.
pub fn format_zoom_param(zoom: &Domain) -> Result<String> {
    if zoom.is_empty() {
        return Ok(String::new());
    }
    serde_json::to_string(zoom).wrap_err("failed to encode zoom parameter")
}

/// Comma-separated revision list, as carried by `highlightedRevisions`.
pub fn parse_highlighted_revisions(value: &str) -> RevisionTerms {
    RevisionTerms::Many(value.split(',').map(|s| s.trim().to_string()).collect())
}

/// `highlightAlerts` accepts `1`/`0` as well as `true`/`false`.
pub fn parse_highlight_alerts(value: &str) -> Result<bool> {
    match value.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(eyre!("invalid highlightAlerts value {other:?}")),
    }
}
