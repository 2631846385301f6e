use thiserror::Error;

use crate::models::ClubId;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("cannot schedule a season for {found} clubs, need at least 2")]
    NotEnoughClubs { found: usize },

    #[error("unknown club id: {0}")]
    UnknownClub(ClubId),

    #[error("request parse error: {0}")]
    Parse(String),
}

/// Finals-format problems are configuration bugs, not runtime conditions:
/// an unresolved dependency is never an error, only a "not yet".
#[derive(Error, Debug)]
pub enum FinalsError {
    #[error("finals week {week} does not exist (format has {weeks} weeks)")]
    WeekOutOfRange { week: usize, weeks: usize },

    #[error("week {week} matchup index {index} out of range (week has {len} matchups)")]
    MatchupOutOfRange { week: usize, index: usize, len: usize },

    #[error("ladder rank {rank} out of range for {qualifying} qualifying teams")]
    RankOutOfRange { rank: usize, qualifying: usize },

    #[error("week {week} references match results from week {target}; only earlier weeks are allowed")]
    ForwardReference { week: usize, target: usize },

    #[error("unknown finals format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
