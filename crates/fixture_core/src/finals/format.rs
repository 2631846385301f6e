//! Declarative finals-bracket definitions.
//!
//! A format is plain data: a list of weeks, each a list of matchups whose
//! sides are symbolic team references. Built-in presets cover the common
//! league formats; custom formats deserialize from JSON through the same
//! schema and must pass the same load-time validation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::FinalsError;

/// Bracket role of a finals match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalType {
    Elimination,
    Qualifying,
    SemiFinal,
    Preliminary,
    GrandFinal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Take {
    Winner,
    Loser,
}

/// Symbolic reference to a team, resolved at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSource {
    /// 1-based ladder rank.
    Ladder { rank: usize },
    /// Winner or loser of an earlier week's match: 1-based week, 0-based
    /// match index within that week.
    ResultOf { week: usize, index: usize, take: Take },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub final_type: FinalType,
    pub home: TeamSource,
    pub away: TeamSource,
}

impl Matchup {
    fn new(final_type: FinalType, home: TeamSource, away: TeamSource) -> Self {
        Self { final_type, home, away }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalsWeek {
    pub label: String,
    pub matchups: Vec<Matchup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalsFormat {
    pub id: String,
    pub qualifying_teams: usize,
    /// Round-robin variant: qualifiers are re-ranked on finals results
    /// before the decisive match resolves.
    #[serde(default)]
    pub round_robin: bool,
    pub weeks: Vec<FinalsWeek>,
}

impl FinalsFormat {
    /// Load a custom format from JSON, running the same validation as the
    /// built-in presets.
    pub fn from_json(raw: &str) -> Result<Self, FinalsError> {
        let format: FinalsFormat = serde_json::from_str(raw)
            .map_err(|e| FinalsError::UnknownFormat(format!("unparseable format: {e}")))?;
        format.validate()?;
        Ok(format)
    }

    /// Look up a built-in preset by id.
    pub fn preset(id: &str) -> Result<&'static FinalsFormat, FinalsError> {
        PRESETS
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| FinalsError::UnknownFormat(id.to_string()))
    }

    /// Reject malformed definitions before they are ever used: every result
    /// reference must point at an existing match in a strictly earlier week,
    /// and every ladder rank must be within the qualifying count. Walks the
    /// full dependency graph of the bracket.
    pub fn validate(&self) -> Result<(), FinalsError> {
        for (week_idx, week) in self.weeks.iter().enumerate() {
            let week_no = week_idx + 1;
            for matchup in &week.matchups {
                for source in [&matchup.home, &matchup.away] {
                    self.validate_source(source, week_no)?;
                }
            }
        }
        Ok(())
    }

    fn validate_source(&self, source: &TeamSource, week_no: usize) -> Result<(), FinalsError> {
        match *source {
            TeamSource::Ladder { rank } => {
                if rank == 0 || rank > self.qualifying_teams {
                    return Err(FinalsError::RankOutOfRange {
                        rank,
                        qualifying: self.qualifying_teams,
                    });
                }
            }
            TeamSource::ResultOf { week, index, .. } => {
                if week == 0 || week > self.weeks.len() {
                    return Err(FinalsError::WeekOutOfRange { week, weeks: self.weeks.len() });
                }
                // Dependencies must flow strictly backwards; this also rules
                // out cycles.
                if week >= week_no {
                    return Err(FinalsError::ForwardReference { week: week_no, target: week });
                }
                let len = self.weeks[week - 1].matchups.len();
                if index >= len {
                    return Err(FinalsError::MatchupOutOfRange { week, index, len });
                }
            }
        }
        Ok(())
    }

    pub fn week(&self, week_no: usize) -> Result<&FinalsWeek, FinalsError> {
        if week_no == 0 || week_no > self.weeks.len() {
            return Err(FinalsError::WeekOutOfRange { week: week_no, weeks: self.weeks.len() });
        }
        Ok(&self.weeks[week_no - 1])
    }
}

fn ladder(rank: usize) -> TeamSource {
    TeamSource::Ladder { rank }
}

fn winner(week: usize, index: usize) -> TeamSource {
    TeamSource::ResultOf { week, index, take: Take::Winner }
}

fn loser(week: usize, index: usize) -> TeamSource {
    TeamSource::ResultOf { week, index, take: Take::Loser }
}

fn week(label: &str, matchups: Vec<Matchup>) -> FinalsWeek {
    FinalsWeek { label: label.to_string(), matchups }
}

/// Built-in finals formats. Week-1 match order in the final-eight format is
/// QF1 (1v4), EF1 (5v8), QF2 (2v3), EF2 (6v7); later weeks reference matches
/// by that order.
pub static PRESETS: Lazy<Vec<FinalsFormat>> = Lazy::new(|| {
    use FinalType::*;

    let top8 = FinalsFormat {
        id: "top8".to_string(),
        qualifying_teams: 8,
        round_robin: false,
        weeks: vec![
            week(
                "Qualifying & Elimination Finals",
                vec![
                    Matchup::new(Qualifying, ladder(1), ladder(4)),
                    Matchup::new(Elimination, ladder(5), ladder(8)),
                    Matchup::new(Qualifying, ladder(2), ladder(3)),
                    Matchup::new(Elimination, ladder(6), ladder(7)),
                ],
            ),
            week(
                "Semi Finals",
                vec![
                    Matchup::new(SemiFinal, loser(1, 0), winner(1, 1)),
                    Matchup::new(SemiFinal, loser(1, 2), winner(1, 3)),
                ],
            ),
            week(
                "Preliminary Finals",
                vec![
                    Matchup::new(Preliminary, winner(1, 0), winner(2, 1)),
                    Matchup::new(Preliminary, winner(1, 2), winner(2, 0)),
                ],
            ),
            week("Grand Final", vec![Matchup::new(GrandFinal, winner(3, 0), winner(3, 1))]),
        ],
    };

    let top4 = FinalsFormat {
        id: "top4".to_string(),
        qualifying_teams: 4,
        round_robin: false,
        weeks: vec![
            week(
                "Qualifying & Elimination Finals",
                vec![
                    Matchup::new(Qualifying, ladder(1), ladder(2)),
                    Matchup::new(Elimination, ladder(3), ladder(4)),
                ],
            ),
            week(
                "Preliminary Final",
                vec![Matchup::new(Preliminary, loser(1, 0), winner(1, 1))],
            ),
            week("Grand Final", vec![Matchup::new(GrandFinal, winner(1, 0), winner(2, 0))]),
        ],
    };

    let top6 = FinalsFormat {
        id: "top6".to_string(),
        qualifying_teams: 6,
        round_robin: false,
        weeks: vec![
            week(
                "Elimination Finals",
                vec![
                    Matchup::new(Elimination, ladder(3), ladder(6)),
                    Matchup::new(Elimination, ladder(4), ladder(5)),
                ],
            ),
            week(
                "Semi Finals",
                vec![
                    Matchup::new(SemiFinal, ladder(1), winner(1, 1)),
                    Matchup::new(SemiFinal, ladder(2), winner(1, 0)),
                ],
            ),
            week("Grand Final", vec![Matchup::new(GrandFinal, winner(2, 0), winner(2, 1))]),
        ],
    };

    let top8_knockout = FinalsFormat {
        id: "top8_knockout".to_string(),
        qualifying_teams: 8,
        round_robin: false,
        weeks: vec![
            week(
                "Elimination Finals",
                vec![
                    Matchup::new(Elimination, ladder(1), ladder(8)),
                    Matchup::new(Elimination, ladder(4), ladder(5)),
                    Matchup::new(Elimination, ladder(2), ladder(7)),
                    Matchup::new(Elimination, ladder(3), ladder(6)),
                ],
            ),
            week(
                "Semi Finals",
                vec![
                    Matchup::new(SemiFinal, winner(1, 0), winner(1, 1)),
                    Matchup::new(SemiFinal, winner(1, 2), winner(1, 3)),
                ],
            ),
            week("Grand Final", vec![Matchup::new(GrandFinal, winner(2, 0), winner(2, 1))]),
        ],
    };

    let round_robin_top4 = FinalsFormat {
        id: "round_robin_top4".to_string(),
        qualifying_teams: 4,
        round_robin: true,
        weeks: vec![
            week(
                "Round Robin Week 1",
                vec![
                    Matchup::new(Qualifying, ladder(1), ladder(2)),
                    Matchup::new(Qualifying, ladder(3), ladder(4)),
                ],
            ),
            week(
                "Round Robin Week 2",
                vec![
                    Matchup::new(Qualifying, ladder(1), ladder(3)),
                    Matchup::new(Qualifying, ladder(2), ladder(4)),
                ],
            ),
            week(
                "Round Robin Week 3",
                vec![
                    Matchup::new(Qualifying, ladder(1), ladder(4)),
                    Matchup::new(Qualifying, ladder(2), ladder(3)),
                ],
            ),
            // Sides resolve against standings re-ranked on finals results.
            week("Grand Final", vec![Matchup::new(GrandFinal, ladder(1), ladder(2))]),
        ],
    };

    vec![top8, top4, top6, top8_knockout, round_robin_top4]
});
