use super::pool::{Draft, Pick};
use crate::cards::Rank;
use crate::rules::WildPolicy;

/// Ranks from Ace down to Two; the order group searches run in.
fn ranks_desc() -> impl Iterator<Item = Rank> {
    Rank::ALL.into_iter().rev().filter(|&r| r != Rank::LowAce)
}

/// A rank group of `size` can be formed from the natural cards of `rank`
/// plus the wild cards allowed to stand in for it.
fn fits(draft: &Draft<'_>, rank: Rank, size: usize) -> bool {
    let naturals = draft.pool.bucket(rank).len();
    naturals <= size && size <= naturals + draft.wilds_for(rank)
}

/// At least `size` cards of `rank` are available.
fn reaches(draft: &Draft<'_>, rank: Rank, size: usize) -> bool {
    draft.pool.bucket(rank).len() + draft.wilds_for(rank) >= size
}

/// Take `size` cards of `rank`, naturals first, then wild cards.
///
/// Wild cards copy the rank of the natural cards taken; with none taken
/// they play as `stand_in`.
fn claim(draft: &mut Draft<'_>, rank: Rank, size: usize, stand_in: Rank) -> Vec<Pick> {
    let pool = draft.pool;
    let bucket = pool.bucket(rank);
    let mut picks = pool.natural_picks(&bucket[..bucket.len().min(size)]);
    let wild_rank = if picks.is_empty() { stand_in } else { rank };
    for slot in draft.unresolved_wilds() {
        if picks.len() >= size {
            break;
        }
        picks.push(Pick::new(slot, wild_rank));
    }
    draft.commit(&picks);
    picks
}

/// Rank an all-wild second group plays as: Aces, unless the first group
/// already holds natural-policy Aces, then Kings.
fn second_stand_in(draft: &Draft<'_>, first: Rank) -> Rank {
    if first == Rank::Ace && draft.rules.wild_policy == WildPolicy::Natural {
        Rank::King
    } else {
        Rank::Ace
    }
}

/// The second group may not reuse the first group's value. The check
/// compares printed symbols and only applies to ranks with natural cards.
fn same_value(draft: &Draft<'_>, rank: Rank, first: Rank) -> bool {
    !draft.pool.bucket(rank).is_empty() && rank.symbol() == first.symbol()
}

/// The highest group of exactly `size` cards, followed by kickers.
pub(crate) fn of_a_kind(draft: &mut Draft<'_>, size: usize) -> Option<Vec<Pick>> {
    let rank = ranks_desc().find(|&r| fits(draft, r, size))?;
    let mut picks = claim(draft, rank, size, rank);
    let kickers = draft.kickers(&picks, draft.rules.cards_per_hand.saturating_sub(size));
    picks.extend(kickers);
    if draft.rules.suppress_kickers {
        picks.truncate(size);
    }
    Some(picks)
}

/// Three of one rank over two of another, trips first.
pub(crate) fn full_house(draft: &mut Draft<'_>) -> Option<Vec<Pick>> {
    let trips = ranks_desc().find(|&r| fits(draft, r, 3))?;
    let mut picks = claim(draft, trips, 3, trips);
    let first = picks[0].rank;

    let pair = ranks_desc().find(|&r| !same_value(draft, r, first) && reaches(draft, r, 2))?;
    let stand_in = second_stand_in(draft, first);
    picks.extend(claim(draft, pair, 2, stand_in));

    let kickers = draft.kickers(&picks, draft.rules.cards_per_hand.saturating_sub(5));
    picks.extend(kickers);
    Some(picks)
}

/// The two highest pairs, followed by kickers.
pub(crate) fn two_pair(draft: &mut Draft<'_>) -> Option<Vec<Pick>> {
    let high = ranks_desc().find(|&r| fits(draft, r, 2))?;
    let mut picks = claim(draft, high, 2, high);
    let first = picks[0].rank;

    let low = ranks_desc().find(|&r| !same_value(draft, r, first) && fits(draft, r, 2))?;
    let stand_in = second_stand_in(draft, first);
    picks.extend(claim(draft, low, 2, stand_in));

    let kickers = draft.kickers(&picks, draft.rules.cards_per_hand.saturating_sub(4));
    picks.extend(kickers);
    if draft.rules.suppress_kickers {
        picks.truncate(4);
    }
    Some(picks)
}
