//! Week-by-week resolution of a finals bracket.
//!
//! Stateless and idempotent: given the same ladder, format and set of
//! completed matches, resolving a week always yields the same fixtures. A
//! matchup whose dependency has not been played yet is silently skipped;
//! callers re-invoke once more results are in.

use crate::config::VenueRule;
use crate::error::FinalsError;
use crate::finals::format::{FinalType, FinalsFormat, Take, TeamSource};
use crate::finals::standings;
use crate::models::{Club, ClubId, Fixture, Ladder, Round};

/// Everything a resolution call reads; borrowed, never mutated.
pub struct FinalsContext<'a> {
    pub ladder: &'a Ladder,
    /// Finals rounds resolved so far, in week order. Fixtures within a round
    /// keep matchup order, so result references index straight into them.
    pub played: &'a [Round],
    pub clubs: &'a [Club],
    pub year: i32,
    pub venue_rule: &'a VenueRule,
}

impl FinalsContext<'_> {
    fn home_ground(&self, club: ClubId) -> String {
        self.clubs
            .iter()
            .find(|c| c.id == club)
            .map(|c| c.home_ground.clone())
            .unwrap_or_default()
    }
}

/// One matchup of the requested week, fully resolved to clubs.
#[derive(Debug, Clone)]
pub struct ResolvedMatchup {
    /// Index of the matchup within its week's definition.
    pub index: usize,
    pub fixture: Fixture,
}

enum Resolution {
    Club(ClubId),
    /// Dependency not played yet; expected, not an error.
    NotYet,
}

fn resolve_source(
    source: &TeamSource,
    ladder: &Ladder,
    ctx: &FinalsContext<'_>,
) -> Result<Resolution, FinalsError> {
    match *source {
        TeamSource::Ladder { rank } => match ladder.club_at(rank) {
            Some(club) => Ok(Resolution::Club(club)),
            None => Err(FinalsError::RankOutOfRange { rank, qualifying: ladder.entries.len() }),
        },
        TeamSource::ResultOf { week, index, take } => {
            let Some(round) = week.checked_sub(1).and_then(|i| ctx.played.get(i)) else {
                return Ok(Resolution::NotYet);
            };
            let Some(fixture) = round.fixtures.get(index) else {
                // The referenced week exists but was only partially
                // resolved; the dependency is still pending.
                return Ok(Resolution::NotYet);
            };
            let club = match take {
                Take::Winner => fixture.winner(),
                Take::Loser => fixture.loser(),
            };
            Ok(club.map_or(Resolution::NotYet, Resolution::Club))
        }
    }
}

/// Resolve every matchup of `week_no` whose dependencies are complete.
///
/// Sides are reordered so the club with the higher original ladder rank is
/// home; original order stands when neither club is ranked. The grand final
/// takes its venue from the configured rule, every other final from the home
/// club's ground.
pub fn resolve_week(
    format: &FinalsFormat,
    week_no: usize,
    ctx: &FinalsContext<'_>,
) -> Result<Vec<ResolvedMatchup>, FinalsError> {
    let week = format.week(week_no)?;

    // The round-robin variant re-ranks qualifiers on finals results before
    // the decisive week resolves.
    let reranked;
    let ladder = if format.round_robin
        && week.matchups.iter().any(|m| m.final_type == FinalType::GrandFinal)
    {
        reranked = standings::rerank(ctx.ladder, format, ctx.played);
        &reranked
    } else {
        ctx.ladder
    };

    let mut resolved = Vec::with_capacity(week.matchups.len());
    for (index, matchup) in week.matchups.iter().enumerate() {
        let home = resolve_source(&matchup.home, ladder, ctx)?;
        let away = resolve_source(&matchup.away, ladder, ctx)?;
        let (Resolution::Club(a), Resolution::Club(b)) = (home, away) else {
            log::debug!("finals week {week_no} matchup {index} not resolvable yet");
            continue;
        };

        // Higher original ladder rank hosts, for venue advantage.
        let (home, away) = match (ctx.ladder.rank_of(a), ctx.ladder.rank_of(b)) {
            (Some(ra), Some(rb)) if rb < ra => (b, a),
            (None, Some(_)) => (b, a),
            _ => (a, b),
        };

        let venue = if matchup.final_type == FinalType::GrandFinal {
            grand_final_venue(ctx, home)
        } else {
            ctx.home_ground(home)
        };

        let mut fixture = Fixture::new(home, away, &venue);
        fixture.final_type = Some(matchup.final_type);
        resolved.push(ResolvedMatchup { index, fixture });
    }

    Ok(resolved)
}

fn grand_final_venue(ctx: &FinalsContext<'_>, home: ClubId) -> String {
    match ctx.venue_rule {
        VenueRule::Fixed(venue) => venue.clone(),
        VenueRule::YearPool(pool) => {
            if pool.is_empty() {
                ctx.home_ground(home)
            } else {
                pool[ctx.year.unsigned_abs() as usize % pool.len()].clone()
            }
        }
        VenueRule::HomeGround => ctx.home_ground(home),
    }
}

/// Assemble the finals round for a week once every one of its matchups can
/// be resolved; `None` while any dependency is still outstanding.
pub fn build_round(
    format: &FinalsFormat,
    week_no: usize,
    ctx: &FinalsContext<'_>,
    round_number: u32,
) -> Result<Option<Round>, FinalsError> {
    let week = format.week(week_no)?;
    let resolved = resolve_week(format, week_no, ctx)?;
    if resolved.len() < week.matchups.len() {
        return Ok(None);
    }

    let mut round = Round::new(round_number, &week.label);
    round.is_final = true;
    round.fixtures = resolved.into_iter().map(|r| r.fixture).collect();
    Ok(Some(round))
}
