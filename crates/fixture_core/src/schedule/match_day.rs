//! Match-day scheduling: hands each fixture in a round a day/time slot.

use chrono::Weekday;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::models::{ClubId, MatchSlot, Round};

/// Slots preferred for small rounds, as `(day, night)` shapes matched
/// against the enabled list.
const SMALL_ROUND_SHAPE: [(Weekday, bool); 4] = [
    (Weekday::Fri, true),
    (Weekday::Sat, false),
    (Weekday::Sat, true),
    (Weekday::Sun, false),
];

/// Pick the curated four-slot subset used for rounds with few fixtures,
/// typically bye rounds. Falls back to the head of the enabled list when the
/// preferred shapes are not all available.
fn small_round_slots(slots: &[MatchSlot]) -> Vec<MatchSlot> {
    let mut picked: Vec<MatchSlot> = Vec::with_capacity(4);
    for (day, night) in SMALL_ROUND_SHAPE {
        if let Some(slot) = slots
            .iter()
            .find(|s| s.day == day && s.is_night() == night && !picked.contains(s))
        {
            picked.push(slot.clone());
        }
    }
    for slot in slots {
        if picked.len() >= 4 {
            break;
        }
        if !picked.contains(slot) {
            picked.push(slot.clone());
        }
    }
    picked
}

/// Assign a slot to every fixture of a round.
///
/// Blockbusters keep their pre-assigned slot and are left until last. The
/// user club gets the fixed preferred slot; everything else is shuffled
/// across the remaining active slots, wrapping when fixtures outnumber slots.
pub fn schedule_round(
    round: &mut Round,
    slots: &[MatchSlot],
    preferred_slot: usize,
    user_club: Option<ClubId>,
    rng: &mut ChaCha8Rng,
) {
    if slots.is_empty() {
        return;
    }

    let unscheduled: Vec<usize> = round
        .fixtures
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_blockbuster())
        .map(|(i, _)| i)
        .collect();

    let active: Vec<MatchSlot> = if unscheduled.len() <= 4 {
        small_round_slots(slots)
    } else {
        slots.to_vec()
    };
    let preferred = slots.get(preferred_slot).cloned().unwrap_or_else(|| active[0].clone());

    let mut remaining: Vec<usize> = Vec::with_capacity(unscheduled.len());
    for idx in unscheduled {
        let fixture = &mut round.fixtures[idx];
        match user_club {
            Some(club) if fixture.involves(club) => fixture.slot = Some(preferred.clone()),
            _ => remaining.push(idx),
        }
    }

    let mut open: Vec<MatchSlot> = active.iter().filter(|s| **s != preferred).cloned().collect();
    if open.is_empty() {
        open.push(preferred.clone());
    }
    open.shuffle(rng);

    for (i, idx) in remaining.into_iter().enumerate() {
        round.fixtures[idx].slot = Some(open[i % open.len()].clone());
    }
}
