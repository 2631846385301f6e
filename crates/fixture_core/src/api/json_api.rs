//! JSON boundary for host integrations.
//!
//! Game shells call this with a request string and get a season plus its
//! validation diagnostics back; everything inside stays typed.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{GenerateRequest, ScheduleSettings};
use crate::error::{FixtureError, Result};
use crate::models::{Club, ClubId, Season};
use crate::schedule::{generate_season, Violation};
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct GenerateSeasonRequest {
    pub schema_version: u8,
    pub year: i32,
    pub seed: u64,
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub user_club: Option<ClubId>,
    #[serde(default)]
    pub settings: ScheduleSettings,
}

#[derive(Debug, Serialize)]
pub struct GenerateSeasonResponse {
    pub schema_version: u8,
    pub season: Season,
    pub violations: Vec<Violation>,
}

/// Generate a season from a JSON request, returning a JSON response.
pub fn generate_season_json(raw: &str) -> Result<String> {
    let request: GenerateSeasonRequest =
        serde_json::from_str(raw).map_err(|e| FixtureError::Parse(e.to_string()))?;

    info!(
        year = request.year,
        seed = request.seed,
        clubs = request.clubs.len(),
        "generating season fixture"
    );

    let typed = GenerateRequest {
        year: request.year,
        seed: request.seed,
        clubs: request.clubs,
        user_club: request.user_club,
        settings: request.settings,
    };
    let (season, violations) = generate_season(&typed)?;
    if !violations.is_empty() {
        warn!(count = violations.len(), "season generated with violations");
    }

    let response =
        GenerateSeasonResponse { schema_version: SCHEMA_VERSION, season, violations };
    serde_json::to_string(&response).map_err(|e| FixtureError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generates_a_season_from_json() {
        let clubs: Vec<_> = (1..=8)
            .map(|id| json!({ "id": id, "name": format!("Club {id}"), "home_ground": format!("Ground {id}") }))
            .collect();
        let request = json!({
            "schema_version": 1,
            "year": 2026,
            "seed": 7,
            "clubs": clubs,
            "settings": { "target_rounds": 7 }
        });

        let raw = generate_season_json(&request.to_string()).expect("request should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["season"]["rounds"].as_array().unwrap().len(), 7);
        assert!(parsed["violations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        assert!(matches!(generate_season_json("not json"), Err(FixtureError::Parse(_))));
    }
}
