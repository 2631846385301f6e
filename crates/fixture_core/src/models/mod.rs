//! Core data model: clubs, fixtures, rounds, seasons and the ladder.
//!
//! Everything here is plain serde-serializable data. The match engine,
//! ladder updater and UI all consume these types; none of them are mutated
//! concurrently.

mod club;
mod fixture;
mod ladder;
mod round;
mod season;

pub use club::{Club, ClubId};
pub use fixture::{Fixture, MatchSlot, Score};
pub use ladder::{Ladder, LadderEntry};
pub use round::Round;
pub use season::Season;
