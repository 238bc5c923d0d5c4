//! Application State

use std::sync::Arc;

use crate::relay::{ContactRelay, RelayError, Result};

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Where consultation requests go (None if no form processor is configured)
    pub relay: Option<Arc<dyn ContactRelay>>,
}

impl AppState {
    pub fn with_relay(relay: Arc<dyn ContactRelay>) -> Self {
        Self { relay: Some(relay) }
    }

    /// The configured relay, or `NotConfigured` when the form is disabled
    pub fn relay(&self) -> Result<&Arc<dyn ContactRelay>> {
        self.relay.as_ref().ok_or(RelayError::NotConfigured)
    }
}
