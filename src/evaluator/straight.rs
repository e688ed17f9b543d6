use super::pool::{sort_desc, Pick};
use crate::cards::Rank;
use crate::rules::{RuleSet, WheelPolicy};

/// A straight, highest card first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Run {
    pub picks: Vec<Pick>,
    /// A-2-3-4-5 found under [`WheelPolicy::Enabled`]; the ace plays high.
    pub wheel: bool,
}

/// Find the best straight among `naturals` (highest first), using the
/// unresolved wild cards in `wilds` to fill gaps or extend the run.
///
/// The run is trimmed to the hand size; `None` when it stays shorter than
/// the qualifying length.
pub(crate) fn find(naturals: &[Pick], wilds: &[usize], rules: &RuleSet) -> Option<Run> {
    let cards = with_low_aces(naturals);

    if rules.wheel == WheelPolicy::Enabled {
        if let Some(run) = wheel(&cards, wilds, rules) {
            return Some(run);
        }
    }

    let mut run = longest_run(&cards, rules.qualify_length, wilds.len());
    for &slot in wilds {
        let Some(rank) = wild_rank(&run) else { break };
        run.push(Pick::new(slot, rank));
        sort_desc(&mut run);
    }

    if run.len() < rules.qualify_length {
        return None;
    }
    run.truncate(rules.cards_per_hand);
    Some(Run { picks: run, wheel: false })
}

/// Every natural Ace also appears as a low ace so runs can start from either end.
fn with_low_aces(naturals: &[Pick]) -> Vec<Pick> {
    let mut cards = naturals.to_vec();
    cards.extend(
        naturals.iter().filter(|p| p.rank == Rank::Ace).map(|p| Pick::new(p.slot, Rank::LowAce)),
    );
    sort_desc(&mut cards);
    cards
}

/// Longest run that fits in a window of `target` ranks, scanning tops from
/// the Ace down. Missing ranks inside the window are gaps for wild cards.
///
/// Ties keep the higher top. Scanning stops once the wild cards can make up
/// the shortfall of the best run so far.
pub(crate) fn longest_run(cards: &[Pick], target: usize, wilds: usize) -> Vec<Pick> {
    let mut best: Vec<Pick> = Vec::new();
    for top in (Rank::LowAce.strength()..=Rank::Ace.strength()).rev() {
        let run = run_below(cards, top, target);
        if run.len() > best.len() {
            best = run;
        }
        if target.saturating_sub(best.len()) <= wilds {
            break;
        }
    }
    best
}

/// Distinct ranks at or below `top` whose span from `top` stays within `target`.
fn run_below(cards: &[Pick], top: u8, target: usize) -> Vec<Pick> {
    let mut run: Vec<Pick> = Vec::new();
    let mut span = 0usize;
    let mut prev = top + 1;
    for pick in cards.iter().filter(|p| p.rank.strength() <= top) {
        let diff = usize::from(prev - pick.rank.strength());
        if diff == 0 {
            continue;
        }
        if span + diff > target {
            break;
        }
        span += diff;
        prev = pick.rank.strength();
        run.push(*pick);
    }
    run
}

/// Rank for the next wild card placed into `run`.
///
/// An inside straight fills its first gap from the top. An open-ended one
/// extends upward, or downward when it already reaches the Ace.
fn wild_rank(run: &[Pick]) -> Option<Rank> {
    let (Some(top), Some(bottom)) = (run.first(), run.last()) else {
        return Some(Rank::Ace);
    };
    let gap = run.windows(2).find(|w| w[0].rank.strength() - w[1].rank.strength() > 1);
    match gap {
        Some(w) => w[0].rank.below(),
        None if top.rank < Rank::Ace => top.rank.above(),
        None => bottom.rank.below(),
    }
}

/// The exact low straight ending at the low ace, wild cards filling missing
/// ranks. The ace is relabelled to play high; spare wild cards join as Aces.
fn wheel(cards: &[Pick], wilds: &[usize], rules: &RuleSet) -> Option<Run> {
    let mut spare = wilds.iter().copied();
    let mut picks: Vec<Pick> = Vec::with_capacity(rules.cards_per_hand);
    for strength in (0..rules.qualify_length).rev() {
        let rank = Rank::from_strength(u8::try_from(strength).ok()?)?;
        match cards.iter().find(|p| p.rank == rank) {
            Some(pick) => picks.push(*pick),
            None => picks.push(Pick::new(spare.next()?, rank)),
        }
    }

    for pick in picks.iter_mut().filter(|p| p.rank == Rank::LowAce) {
        pick.rank = Rank::Ace;
    }
    sort_desc(&mut picks);

    while picks.len() < rules.cards_per_hand {
        let Some(slot) = spare.next() else { break };
        picks.push(Pick::new(slot, Rank::Ace));
    }
    Some(Run { picks, wheel: true })
}
