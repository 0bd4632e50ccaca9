//! Application state for the geodata API.

use std::sync::Arc;

use anyhow::{Context, Result};
use http_transport::{ReqwestTransport, Transport};

use crate::config::Args;
use crate::facade::GeodataFacade;

/// Shared application state.
pub struct AppState {
    pub facade: GeodataFacade,
}

impl AppState {
    /// Create state with the production HTTP transport.
    pub fn new(args: &Args) -> Result<Self> {
        let config = args.transport_config();
        let transport =
            ReqwestTransport::new(&config).context("Failed to build upstream HTTP client")?;
        Ok(Self::with_transport(Arc::new(transport), args))
    }

    /// Create state over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, args: &Args) -> Self {
        Self {
            facade: GeodataFacade::new(transport).with_timeout(args.upstream_timeout()),
        }
    }
}
