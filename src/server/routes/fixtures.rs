//! Fixture endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Fixture;
use crate::server::state::AppState;

/// Venue placeholder; the demo catalog has no venues.
pub const VENUE_TBD: &str = "TBD";

/// Fixture as listed to clients.
#[derive(Debug, Serialize)]
pub struct FixtureResponse {
    pub id: String,
    pub home: String,
    pub away: String,
    /// Kickoff time, ISO 8601 in UTC.
    pub kickoff: String,
    pub venue: &'static str,
}

impl FixtureResponse {
    fn new(fixture: &Fixture, kickoff: DateTime<Utc>) -> Self {
        Self {
            id: fixture.id.clone(),
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            kickoff: kickoff.to_rfc3339_opts(SecondsFormat::Millis, true),
            venue: VENUE_TBD,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /fixtures - All fixtures in catalog order.
///
/// Kickoff is stamped with the request time.
pub async fn list_fixtures(State(state): State<Arc<AppState>>) -> Json<Vec<FixtureResponse>> {
    let now = Utc::now();

    Json(
        state
            .catalog
            .list()
            .iter()
            .map(|f| FixtureResponse::new(f, now))
            .collect(),
    )
}

/// GET /fixtures/:id - A single fixture.
pub async fn get_fixture(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<FixtureResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.catalog.get(&id) {
        Ok(fixture) => Ok(Json(FixtureResponse::new(fixture, Utc::now()))),
        Err(e) => {
            tracing::debug!(%id, "Unknown fixture requested");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
