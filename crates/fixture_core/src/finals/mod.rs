//! Finals: declarative bracket formats and their week-by-week resolution.

pub mod format;
pub mod premiership;
pub mod resolver;
pub mod standings;


pub use format::{FinalType, FinalsFormat, FinalsWeek, Matchup, Take, TeamSource, PRESETS};
pub use premiership::{is_season_complete, premier};
pub use resolver::{build_round, resolve_week, FinalsContext, ResolvedMatchup};
