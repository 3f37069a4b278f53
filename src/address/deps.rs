//! Injected collaborators: SHA-256 backend and error event sink

use std::fmt;
use std::sync::Arc;

use super::ErrorKind;
use crate::crypto::{Sha256Backend, Sha256Provider};

/// Receives a notification for every failed address operation
pub trait EventSink: Send + Sync {
    /// Called once per failure with its kind and the offending input
    fn on_error(&self, kind: ErrorKind, context: &str);
}

/// Forwards failures to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEvents;

impl EventSink for LogEvents {
    fn on_error(&self, kind: ErrorKind, context: &str) {
        log::warn!("address error ({}): {}", kind, context);
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEvents;

impl EventSink for NoEvents {
    fn on_error(&self, _kind: ErrorKind, _context: &str) {}
}

/// Collaborators an address needs at construction and render time
#[derive(Clone)]
pub struct Dependencies {
    pub hasher: Arc<dyn Sha256Provider>,
    pub events: Arc<dyn EventSink>,
}

impl Dependencies {
    /// Bundle an explicit hasher and event sink
    pub fn new(hasher: Arc<dyn Sha256Provider>, events: Arc<dyn EventSink>) -> Self {
        Self { hasher, events }
    }

    /// Default hasher, no event reporting
    pub fn silent() -> Self {
        Self::new(Arc::new(Sha256Backend), Arc::new(NoEvents))
    }

    pub(crate) fn report(&self, kind: ErrorKind, context: &str) {
        self.events.on_error(kind, context);
    }
}

impl Default for Dependencies {
    fn default() -> Self {
        Self::new(Arc::new(Sha256Backend), Arc::new(LogEvents))
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependencies").finish_non_exhaustive()
    }
}
