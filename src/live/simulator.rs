//! Live state simulator.
//!
//! Builds randomized initial match states and advances them one tick at a
//! time with bounded random walks. The RNG is owned by the simulator, so a
//! seeded simulator replays the same match exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{round2, LiveBoard, MatchState, MatchStatus, Side};
use crate::catalog::Fixture;

/// Latest minute the match clock can reach.
pub const MAX_MINUTE: u32 = 95;

/// Possession bounds for the home side.
pub const MIN_POSSESSION: u32 = 35;
pub const MAX_POSSESSION: u32 = 65;

/// Chance of a goal on any single tick.
pub const GOAL_PROBABILITY: f64 = 0.12;

/// Per-connection match simulator.
#[derive(Debug)]
pub struct LiveSimulator<R = StdRng> {
    rng: R,
}

impl LiveSimulator<StdRng> {
    /// Creates a simulator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a deterministic simulator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LiveSimulator<R> {
    /// Creates a simulator around an injected RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a fresh board with one randomized state per fixture.
    pub fn initialize(&mut self, fixtures: &[Fixture]) -> LiveBoard {
        LiveBoard::new(fixtures.iter().map(|f| self.initial_state(f)).collect())
    }

    /// Creates the kickoff-ish state for a single fixture.
    pub fn initial_state(&mut self, fixture: &Fixture) -> MatchState {
        MatchState {
            id: fixture.id.clone(),
            status: MatchStatus::Live,
            minute: self.rng.gen_range(1..=5),
            score_home: 0,
            score_away: 0,
            xg_home: round2(self.rng.gen_range(0.2..=0.6)),
            xg_away: round2(self.rng.gen_range(0.1..=0.5)),
            shots_home: self.rng.gen_range(1..=4),
            shots_away: self.rng.gen_range(0..=3),
            possession_home: self.rng.gen_range(40..=60),
            home: fixture.home.clone(),
            away: fixture.away.clone(),
        }
    }

    /// Advances one fixture by a single tick.
    ///
    /// Returns the side that scored, if a goal happened this tick.
    pub fn advance(&mut self, state: &mut MatchState) -> Option<Side> {
        state.minute = (state.minute + self.rng.gen_range(1..=2)).min(MAX_MINUTE);

        let goal = if self.rng.gen_bool(GOAL_PROBABILITY) {
            let side = if self.rng.gen_bool(0.5) {
                Side::Home
            } else {
                Side::Away
            };
            let xg_bump = self.rng.gen_range(0.05..=0.2);
            let extra_shots = self.rng.gen_range(1..=2);

            match side {
                Side::Home => {
                    state.score_home += 1;
                    state.xg_home = round2(state.xg_home + xg_bump);
                    state.shots_home += extra_shots;
                }
                Side::Away => {
                    state.score_away += 1;
                    state.xg_away = round2(state.xg_away + xg_bump);
                    state.shots_away += extra_shots;
                }
            }
            Some(side)
        } else {
            None
        };

        // Drift is rounded separately from the goal bump.
        state.xg_home = round2(state.xg_home + self.rng.gen_range(0.0..=0.05));
        state.xg_away = round2(state.xg_away + self.rng.gen_range(0.0..=0.05));

        if self.rng.gen_ratio(1, 3) {
            state.shots_home += 1;
        }
        if self.rng.gen_ratio(1, 3) {
            state.shots_away += 1;
        }

        let step: i32 = self.rng.gen_range(-1..=1);
        state.possession_home = state
            .possession_home
            .saturating_add_signed(step)
            .clamp(MIN_POSSESSION, MAX_POSSESSION);

        goal
    }
}
