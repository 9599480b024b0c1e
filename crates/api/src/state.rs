use std::sync::Arc;

use vca_jobs::{Poller, ResultStore, Submitter};
use vca_render::RendererClient;

use crate::config::ServerConfig;
use crate::proxy::UpstreamClient;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable — everything is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vca_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Job submission over the injected channel.
    pub submitter: Arc<Submitter>,
    /// Result polling over the injected store.
    pub poller: Arc<Poller>,
    /// Raw result-store handle, used by the health check.
    pub result_store: Arc<dyn ResultStore>,
    /// Headless-browser PDF renderer client.
    pub renderer: Arc<RendererClient>,
    /// Financing system passthrough.
    pub financing: Arc<UpstreamClient>,
    /// Inspection scheduling passthrough.
    pub inspections: Arc<UpstreamClient>,
    /// Customer/contract lookup passthrough.
    pub customers: Arc<UpstreamClient>,
}
