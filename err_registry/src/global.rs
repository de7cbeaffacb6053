//! Optional process-wide registry slot
//!
//! Libraries should take an `&ErrorRegistry` or `Arc<ErrorRegistry>`. Hosts
//! that prefer a single static instance can install one here once at
//! startup.

use crate::registry::{ErrorCode, ErrorRegistry};
use std::sync::{Arc, OnceLock};

static GLOBAL_REGISTRY: OnceLock<Arc<ErrorRegistry>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobalError {
    #[error("Global error registry already initialized")]
    AlreadyInitialized,
}

/// Install the process-wide registry
pub fn init_global_registry(registry: Arc<ErrorRegistry>) -> Result<(), GlobalError> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| GlobalError::AlreadyInitialized)
}

/// Check if the global registry is installed
pub fn is_initialized() -> bool {
    GLOBAL_REGISTRY.get().is_some()
}

/// Safe access to the global registry
pub fn try_global_registry() -> Option<&'static ErrorRegistry> {
    GLOBAL_REGISTRY.get().map(|registry| registry.as_ref())
}

/// Shared handle to the global registry
pub fn global_registry_handle() -> Option<Arc<ErrorRegistry>> {
    GLOBAL_REGISTRY.get().cloned()
}

/// Trigger through the global registry; no-op if none is installed
pub fn trigger_global(code: ErrorCode) {
    if let Some(registry) = try_global_registry() {
        registry.trigger(code);
    }
}
