//! Season completion and premiership queries.

use crate::finals::format::FinalType;
use crate::models::{ClubId, Fixture, Season};

fn grand_final(season: &Season) -> Option<&Fixture> {
    season
        .finals
        .iter()
        .flat_map(|r| r.fixtures.iter())
        .find(|f| f.final_type == Some(FinalType::GrandFinal) && f.result.is_some())
}

/// The season is over once a grand-final match has a result.
pub fn is_season_complete(season: &Season) -> bool {
    grand_final(season).is_some()
}

/// Winner of the played grand final; `None` while the season is live.
pub fn premier(season: &Season) -> Option<ClubId> {
    grand_final(season).and_then(Fixture::winner)
}
