use crate::api::ApiClient;

/// Shared dashboard state injected into page handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}
