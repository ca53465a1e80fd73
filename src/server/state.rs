//! Shared application state for the HTTP server.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;

use crate::catalog::FixtureCatalog;
use crate::config::ServerConfig;
use crate::live::{LiveFeed, LiveSimulator};

/// Application state shared across all handlers.
///
/// Only the immutable catalog, the configuration and two counters live
/// here. Match states are owned by each connection's feed.
#[derive(Debug)]
pub struct AppState {
    /// Fixture metadata, injected at startup.
    pub catalog: Arc<FixtureCatalog>,

    /// Server configuration.
    pub config: ServerConfig,

    next_connection_id: AtomicU64,
    active_connections: AtomicUsize,
}

impl AppState {
    /// Creates new app state around a catalog and configuration.
    pub fn new(catalog: Arc<FixtureCatalog>, config: ServerConfig) -> Self {
        Self {
            catalog,
            config,
            next_connection_id: AtomicU64::new(0),
            active_connections: AtomicUsize::new(0),
        }
    }

    /// Number of push-channel connections currently streaming.
    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }

    /// Registers a new connection and builds its feed.
    ///
    /// With a configured seed, connection `n` is seeded with `seed + n`.
    pub fn open_connection(self: &Arc<Self>) -> (ConnectionGuard, LiveFeed<StdRng>) {
        let id = self.next_connection_id.fetch_add(1, Ordering::SeqCst);
        self.active_connections.fetch_add(1, Ordering::SeqCst);

        let simulator = match self.config.seed {
            Some(seed) => LiveSimulator::from_seed(seed.wrapping_add(id)),
            None => LiveSimulator::from_entropy(),
        };
        let feed = LiveFeed::new(
            Arc::clone(&self.catalog),
            simulator,
            self.config.tick_interval,
        );

        let guard = ConnectionGuard {
            id,
            state: Arc::clone(self),
        };
        (guard, feed)
    }
}

/// Keeps a connection counted as active until dropped.
#[derive(Debug)]
pub struct ConnectionGuard {
    id: u64,
    state: Arc<AppState>,
}

impl ConnectionGuard {
    /// Sequential connection id, used in logs.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.state.active_connections.fetch_sub(1, Ordering::SeqCst);
    }
}
