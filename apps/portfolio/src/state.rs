use std::sync::Arc;

use crate::relay_client::FormRelay;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Outbound form relay. Default: `HttpFormRelay` pointed at `FORM_RELAY_URL`.
    pub relay: Arc<dyn FormRelay>,
}
