//! Data types for the live feed.
//!
//! Defines the per-fixture match snapshot and the per-connection board
//! that holds one snapshot for every fixture in the catalog.

use serde::{Deserialize, Serialize};

/// Match status. Only in-play matches are simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Live,
}

/// Side of the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Simulated live snapshot of one fixture.
///
/// Serialized as the camelCase JSON object pushed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    /// Fixture id this snapshot belongs to.
    pub id: String,

    pub status: MatchStatus,

    /// Match clock in minutes, clamped to 95.
    pub minute: u32,

    pub score_home: u32,
    pub score_away: u32,

    /// Cumulative expected goals, always rounded to 2 decimals.
    pub xg_home: f64,
    pub xg_away: f64,

    pub shots_home: u32,
    pub shots_away: u32,

    /// Home possession percentage, within [35, 65].
    pub possession_home: u32,

    /// Home team name.
    pub home: String,

    /// Away team name.
    pub away: String,
}

/// Per-connection collection of match states, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct LiveBoard {
    states: Vec<MatchState>,
}

impl LiveBoard {
    /// Creates a board from states already in catalog order.
    pub fn new(states: Vec<MatchState>) -> Self {
        Self { states }
    }

    /// Returns the state for a fixture id.
    pub fn get(&self, id: &str) -> Option<&MatchState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Iterates over states in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MatchState> {
        self.states.iter()
    }

    /// Iterates mutably over states in catalog order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MatchState> {
        self.states.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
