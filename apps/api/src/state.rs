use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup, so concurrent
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Model adapter behind a trait object so tests can swap in mocks.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
