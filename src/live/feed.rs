//! Per-connection broadcast loop.
//!
//! A [`LiveFeed`] owns one connection's simulated board and pushes every
//! fixture's state to a sink once per round, sleeping between rounds. The
//! sink is any `futures::Sink<String>`; the WebSocket handler adapts the
//! socket's write half, and tests use an in-memory channel.
//!
//! The feed moves through three states:
//!
//! - `AwaitingConnection` until [`LiveFeed::run`] initializes the board
//! - `Streaming` while rounds are being emitted
//! - `Closed` once a send fails, which is how a disconnect shows up

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use futures::{Sink, SinkExt};
use rand::Rng;
use tracing::{debug, info};

use super::simulator::LiveSimulator;
use crate::catalog::FixtureCatalog;
use crate::error::FeedError;

/// Lifecycle of a single connection's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    AwaitingConnection,
    Streaming,
    Closed,
}

/// What a feed did before it closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSummary {
    /// Full rounds emitted (every fixture sent once).
    pub rounds: u64,

    /// Individual messages delivered to the sink.
    pub messages_sent: u64,
}

/// Streams simulated match states for one connection.
pub struct LiveFeed<R> {
    catalog: Arc<FixtureCatalog>,
    simulator: LiveSimulator<R>,
    interval: Duration,
    state: FeedState,
    summary: FeedSummary,
}

impl<R: Rng> LiveFeed<R> {
    /// Creates a feed that has not started streaming yet.
    pub fn new(catalog: Arc<FixtureCatalog>, simulator: LiveSimulator<R>, interval: Duration) -> Self {
        Self {
            catalog,
            simulator,
            interval,
            state: FeedState::AwaitingConnection,
            summary: FeedSummary::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Delivery counters so far.
    pub fn summary(&self) -> FeedSummary {
        self.summary
    }

    /// Runs until the sink rejects a message.
    ///
    /// A rejected send means the peer is gone: the feed moves to `Closed`,
    /// emits nothing else and returns what it delivered. `Closed` is final;
    /// running a closed feed returns immediately. The board lives only for
    /// the duration of this call.
    pub async fn run<S>(&mut self, mut sink: S) -> Result<FeedSummary, FeedError>
    where
        S: Sink<String> + Unpin,
        S::Error: Display,
    {
        if self.state == FeedState::Closed {
            return Ok(self.summary);
        }

        let mut board = self.simulator.initialize(self.catalog.list());
        self.state = FeedState::Streaming;
        info!(fixtures = board.len(), "Live feed streaming");

        loop {
            for match_state in board.iter_mut() {
                if let Some(side) = self.simulator.advance(match_state) {
                    debug!(
                        fixture = %match_state.id,
                        ?side,
                        minute = match_state.minute,
                        score = %format!("{}-{}", match_state.score_home, match_state.score_away),
                        "Goal"
                    );
                }

                let message = match serde_json::to_string(&*match_state) {
                    Ok(message) => message,
                    Err(e) => {
                        self.state = FeedState::Closed;
                        return Err(e.into());
                    }
                };
                if let Err(e) = sink.send(message).await {
                    self.state = FeedState::Closed;
                    debug!(error = %e, "Sink closed, stopping live feed");
                    return Ok(self.summary);
                }
                self.summary.messages_sent += 1;
            }

            self.summary.rounds += 1;
            tokio::time::sleep(self.interval).await;
        }
    }
}
