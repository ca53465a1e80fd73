//! Fixture catalog.
//!
//! Static fixture metadata, loaded once at startup and shared read-only
//! by the HTTP routes and every live feed.

use serde::Serialize;

use crate::error::CatalogError;

/// A scheduled match between two named teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    /// Stable fixture identifier (e.g., "pl-001").
    pub id: String,

    /// Home team name.
    pub home: String,

    /// Away team name.
    pub away: String,
}

impl Fixture {
    /// Creates a new fixture.
    pub fn new(id: impl Into<String>, home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            home: home.into(),
            away: away.into(),
        }
    }
}

/// Ordered, immutable set of fixtures.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    fixtures: Vec<Fixture>,
}

impl FixtureCatalog {
    /// Creates a catalog from an injected fixture list. Order is preserved.
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    /// The demo Premier League catalog.
    pub fn premier_league() -> Self {
        Self::new(vec![
            Fixture::new("pl-001", "Manchester City", "Liverpool"),
            Fixture::new("pl-002", "Arsenal", "Tottenham"),
            Fixture::new("pl-003", "Chelsea", "Manchester United"),
        ])
    }

    /// All fixtures in catalog order.
    pub fn list(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Looks up a fixture by id.
    pub fn get(&self, id: &str) -> Result<&Fixture, CatalogError> {
        self.fixtures
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Number of fixtures.
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Returns true if the catalog holds no fixtures.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::premier_league()
    }
}
