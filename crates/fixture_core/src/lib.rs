//! # fixture_core - Season Fixture Generator & Finals Bracket Resolver
//!
//! Deterministic schedule generation for a round-based league: balanced
//! round-robin fixtures with optional bye rounds and blockbuster marquee
//! matches, structural validation with bounded retry, and a declarative
//! finals-bracket engine that resolves symbolic team references as results
//! come in.
//!
//! ## Guarantees
//! - 100% deterministic: same clubs, seed and settings = same season
//! - Generation never fails for a schedulable input; it degrades to a
//!   best-effort schedule with recorded violations
//! - Finals resolution is stateless and idempotent per call

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Scheduling code indexes rounds and slots positionally
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod config;
pub mod error;
pub mod finals;
pub mod models;
pub mod schedule;

pub use api::generate_season_json;
pub use config::{
    BlockbusterRound, BlockbusterSpec, ByeSettings, GenerateRequest, ScheduleSettings, VenueRule,
};
pub use error::{FinalsError, FixtureError, Result};
pub use finals::{
    build_round, is_season_complete, premier, resolve_week, FinalType, FinalsContext,
    FinalsFormat, TeamSource,
};
pub use models::{Club, ClubId, Fixture, Ladder, LadderEntry, MatchSlot, Round, Score, Season};
pub use schedule::{generate_season, validate_season, Violation, ViolationKind};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
