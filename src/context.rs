// ABOUTME: Caller-owned discovery state shared between a UI thread and reloads.
// ABOUTME: Reloads build a fresh runtime list off-lock and swap it in under a scoped guard.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::diagnostics::Diagnostics;
use crate::runtime::{RuntimeDiscovery, RuntimeList};

/// Holds the current runtime list for the lifetime of an application.
///
/// Readers take cheap [`snapshot`](Self::snapshot)s; a reload never holds
/// the lock while touching the filesystem.
#[derive(Debug)]
pub struct AppContext {
    discovery: RuntimeDiscovery,
    runtimes: RwLock<Arc<RuntimeList>>,
}

impl AppContext {
    /// Create a context and run the first discovery pass.
    pub fn new(discovery: RuntimeDiscovery) -> (Self, Diagnostics) {
        let context = Self {
            discovery,
            runtimes: RwLock::new(Arc::default()),
        };
        let diagnostics = context.reload();
        (context, diagnostics)
    }

    /// The list as of the last completed reload.
    pub fn snapshot(&self) -> Arc<RuntimeList> {
        Arc::clone(&self.runtimes.read())
    }

    /// Rebuild the list from scratch and replace the current one wholesale.
    pub fn reload(&self) -> Diagnostics {
        let discovery = self.discovery.run();
        let fresh = Arc::new(discovery.runtimes);

        *self.runtimes.write() = fresh;
        tracing::debug!("runtime list reloaded");

        discovery.diagnostics
    }
}
