pub mod json_api;

pub use json_api::{generate_season_json, GenerateSeasonRequest, GenerateSeasonResponse};
