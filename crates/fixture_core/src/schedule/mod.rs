//! Season fixture generation.
//!
//! Pipeline: round-robin cycle → bye planning → balanced repeat rounds →
//! assembly → match-day slots → blockbuster placement → validation, with a
//! bounded retry loop around the whole thing.

pub mod assembler;
pub mod blockbuster;
pub mod byes;
pub mod generator;
pub mod match_day;
pub mod pairing;
pub mod round_robin;
pub mod validate;

#[cfg(test)]
mod tests;

pub use generator::{generate_season, MAX_ATTEMPTS};
pub use validate::{validate_season, Violation, ViolationKind};
