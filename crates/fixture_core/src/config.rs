//! Season-structure configuration.
//!
//! A single typed request struct drives generation; everything carries serde
//! defaults so partial JSON configs load cleanly.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{Club, ClubId, MatchSlot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ByeSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Number of bye rounds to insert when enabled.
    #[serde(default = "default_bye_rounds")]
    pub rounds: usize,
}

fn default_bye_rounds() -> usize {
    3
}

impl Default for ByeSettings {
    fn default() -> Self {
        Self { enabled: false, rounds: default_bye_rounds() }
    }
}

/// Where a blockbuster lands in the season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockbusterRound {
    /// Mapped from the blockbuster's name (season openers to round 1, etc).
    Auto,
    Fixed(u32),
}

impl Default for BlockbusterRound {
    fn default() -> Self {
        Self::Auto
    }
}

/// A marquee rivalry fixture pinned to a particular round and venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockbusterSpec {
    pub name: String,
    pub club_a: ClubId,
    pub club_b: ClubId,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub round: BlockbusterRound,
    /// Venue override; the home club's ground when absent.
    #[serde(default)]
    pub venue: Option<String>,
    /// Pre-assigned day/time; kept by the match-day scheduler.
    #[serde(default)]
    pub slot: Option<MatchSlot>,
}

fn default_true() -> bool {
    true
}

/// How the grand-final venue is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueRule {
    /// Always the one configured ground.
    Fixed(String),
    /// Deterministic per-year pick from a pool.
    YearPool(Vec<String>),
    /// Home ground of the higher-ranked finalist.
    HomeGround,
}

impl Default for VenueRule {
    fn default() -> Self {
        Self::HomeGround
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Total season length in rounds, bye rounds included.
    #[serde(default = "default_target_rounds")]
    pub target_rounds: usize,
    #[serde(default)]
    pub byes: ByeSettings,
    /// Enabled day/time slots, in scheduling order.
    #[serde(default = "default_timeslots")]
    pub timeslots: Vec<MatchSlot>,
    /// Index into `timeslots` used for the user club's fixture.
    #[serde(default = "default_preferred_slot")]
    pub preferred_slot: usize,
    #[serde(default)]
    pub blockbusters: Vec<BlockbusterSpec>,
    #[serde(default)]
    pub grand_final_venue: VenueRule,
}

fn default_target_rounds() -> usize {
    22
}

fn default_preferred_slot() -> usize {
    // Saturday afternoon in the default slot list.
    2
}

fn slot(day: Weekday, h: u32, m: u32, label: &str) -> MatchSlot {
    let time = NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
    MatchSlot::new(day, time, label)
}

/// The standard seven-slot football weekend.
pub fn default_timeslots() -> Vec<MatchSlot> {
    vec![
        slot(Weekday::Thu, 19, 20, "Thursday Night"),
        slot(Weekday::Fri, 19, 50, "Friday Night"),
        slot(Weekday::Sat, 13, 45, "Saturday Afternoon"),
        slot(Weekday::Sat, 16, 35, "Saturday Twilight"),
        slot(Weekday::Sat, 19, 25, "Saturday Night"),
        slot(Weekday::Sun, 13, 10, "Sunday Early"),
        slot(Weekday::Sun, 15, 20, "Sunday Afternoon"),
    ]
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            target_rounds: default_target_rounds(),
            byes: ByeSettings::default(),
            timeslots: default_timeslots(),
            preferred_slot: default_preferred_slot(),
            blockbusters: Vec::new(),
            grand_final_venue: VenueRule::default(),
        }
    }
}

/// Everything the generator needs for one season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub year: i32,
    pub seed: u64,
    pub clubs: Vec<Club>,
    /// The human-controlled club, pinned to the preferred slot.
    #[serde(default)]
    pub user_club: Option<ClubId>,
    #[serde(default)]
    pub settings: ScheduleSettings,
}
