use super::pool::{Draft, Pick};
use super::{flush, groups, straight, Category};
use crate::cards::{Rank, Suit};
use std::cmp::Ordering;

/// A hand an evaluator managed to form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Formed {
    pub name: &'static str,
    pub picks: Vec<Pick>,
    pub description: String,
}

impl Category {
    /// Try to form this category from the draft's pool. Wild cards used are
    /// committed to the draft; the caller resets it between attempts.
    pub(crate) fn attempt(self, draft: &mut Draft<'_>) -> Option<Formed> {
        match self {
            Category::RoyalFlush => {
                straight_flush(draft).filter(|f| f.name == Category::RoyalFlush.name())
            }
            Category::StraightFlush => straight_flush(draft),
            Category::FourOfAKind => {
                let picks = groups::of_a_kind(draft, 4)?;
                let description = format!("{}, {}", self.name(), plural(&picks, 0));
                Some(self.formed(picks, description))
            }
            Category::FullHouse => {
                let picks = groups::full_house(draft)?;
                let description =
                    format!("{}, {} over {}", self.name(), plural(&picks, 0), plural(&picks, 3));
                Some(self.formed(picks, description))
            }
            Category::Flush => best_flush(draft),
            Category::Straight => best_straight(draft),
            Category::ThreeOfAKind => {
                let picks = groups::of_a_kind(draft, 3)?;
                let description = format!("{}, {}", self.name(), plural(&picks, 0));
                Some(self.formed(picks, description))
            }
            Category::TwoPair => {
                let picks = groups::two_pair(draft)?;
                let description =
                    format!("{}, {} & {}", self.name(), plural(&picks, 0), plural(&picks, 2));
                Some(self.formed(picks, description))
            }
            Category::OnePair => {
                let picks = groups::of_a_kind(draft, 2)?;
                let description = format!("{}, {}", self.name(), plural(&picks, 0));
                Some(self.formed(picks, description))
            }
            Category::HighCard => Some(high_card(draft)),
        }
    }

    fn formed(self, picks: Vec<Pick>, description: String) -> Formed {
        Formed { name: self.name(), picks, description }
    }
}

/// "K's", "10's"
fn plural(picks: &[Pick], index: usize) -> String {
    picks.get(index).map(|p| format!("{}'s", p.rank.symbol())).unwrap_or_default()
}

/// Ace-high and not a wheel.
fn is_royal(run: &straight::Run) -> bool {
    !run.wheel && run.picks.first().is_some_and(|p| p.rank == Rank::Ace)
}

/// Position-by-position rank comparison, highest card first.
fn outranks(a: &[Pick], b: &[Pick]) -> bool {
    a.iter().map(|p| p.rank).cmp(b.iter().map(|p| p.rank)) == Ordering::Greater
}

/// The best straight flush over every suit; royal runs come first. Each suit
/// is searched with the same unresolved wild cards and only the winner is
/// committed.
fn straight_flush(draft: &mut Draft<'_>) -> Option<Formed> {
    let pool = draft.pool;
    let rules = draft.rules;
    let wilds = draft.unresolved_wilds();

    let mut best: Option<(Suit, straight::Run)> = None;
    for (suit, slots) in pool.suits() {
        if slots.len() + wilds.len() < rules.qualify_length {
            continue;
        }
        let Some(run) = straight::find(&pool.natural_picks(slots), &wilds, rules) else {
            continue;
        };
        let better = best.as_ref().map_or(true, |(_, held)| {
            match is_royal(&run).cmp(&is_royal(held)) {
                Ordering::Equal => outranks(&run.picks, &held.picks),
                ord => ord.is_gt(),
            }
        });
        if better {
            best = Some((*suit, run));
        }
    }

    let (suit, run) = best?;
    let top = *run.picks.first()?;
    let (name, description) = if run.wheel {
        (Category::StraightFlush.name(), "Straight Flush, Wheel".to_string())
    } else if is_royal(&run) {
        (Category::RoyalFlush.name(), Category::RoyalFlush.name().to_string())
    } else {
        let name = Category::StraightFlush.name();
        (name, format!("{name}, {}{suit} High", top.rank.symbol()))
    };

    let mut picks = run.picks;
    draft.commit(&picks);
    let kickers = draft.kickers(&picks, rules.cards_per_hand.saturating_sub(picks.len()));
    picks.extend(kickers);
    Some(Formed { name, picks, description })
}

/// The highest flush over every suit; ties keep the suit seen first.
fn best_flush(draft: &mut Draft<'_>) -> Option<Formed> {
    let pool = draft.pool;
    let rules = draft.rules;
    let wilds = draft.unresolved_wilds();

    let mut best: Option<(Suit, Vec<Pick>)> = None;
    for (suit, slots) in pool.suits() {
        let mut picks = flush::with_wilds(&pool.natural_picks(slots), &wilds);
        if picks.len() < rules.qualify_length {
            continue;
        }
        picks.truncate(rules.cards_per_hand);
        if best.as_ref().map_or(true, |(_, held)| outranks(&picks, held)) {
            best = Some((*suit, picks));
        }
    }

    let (suit, mut picks) = best?;
    let top = *picks.first()?;
    let description = format!("{}, {}{suit} High", Category::Flush.name(), top.rank.symbol());

    draft.commit(&picks);
    let kickers = draft.kickers(&picks, rules.cards_per_hand.saturating_sub(picks.len()));
    picks.extend(kickers);
    Some(Category::Flush.formed(picks, description))
}

fn best_straight(draft: &mut Draft<'_>) -> Option<Formed> {
    let pool = draft.pool;
    let rules = draft.rules;
    let wilds = draft.unresolved_wilds();

    let run = straight::find(&pool.all_naturals(), &wilds, rules)?;
    let top = *run.picks.first()?;
    let name = Category::Straight.name();
    let description = if run.wheel {
        format!("{name}, Wheel")
    } else {
        format!("{name}, {} High", top.rank.symbol())
    };

    let mut picks = run.picks;
    draft.commit(&picks);
    let kickers = draft.kickers(&picks, rules.cards_per_hand.saturating_sub(picks.len()));
    picks.extend(kickers);
    Some(Category::Straight.formed(picks, description))
}

/// Always forms: the highest cards of the pool, wild cards playing as Aces.
pub(crate) fn high_card(draft: &mut Draft<'_>) -> Formed {
    let mut picks = draft.kickers(&[], draft.rules.cards_per_hand);
    if draft.rules.suppress_kickers {
        picks.truncate(1);
    }
    let description = match picks.first() {
        Some(top) => format!("{} High", top.rank.symbol()),
        None => Category::HighCard.name().to_string(),
    };
    Category::HighCard.formed(picks, description)
}
