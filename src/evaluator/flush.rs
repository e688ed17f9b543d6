use super::pool::{sort_desc, Pick};
use crate::cards::Rank;

/// Cards of one suit, highest first, with every wild card in `wilds`
/// assigned the highest rank the suit is still missing from the top down.
///
/// With Ah Kh Jh and one wild card, the wild card plays as the Queen.
pub(crate) fn with_wilds(suited: &[Pick], wilds: &[usize]) -> Vec<Pick> {
    let mut cards = suited.to_vec();
    sort_desc(&mut cards);
    for &slot in wilds {
        let rank = highest_missing(&cards);
        cards.push(Pick::new(slot, rank));
        sort_desc(&mut cards);
    }
    cards
}

/// First rank, counting down from the Ace, not matched by the leading cards.
fn highest_missing(cards: &[Pick]) -> Rank {
    let matched = Rank::ALL
        .iter()
        .rev()
        .zip(cards)
        .take_while(|(rank, pick)| pick.rank == **rank)
        .count();
    Rank::Ace
        .strength()
        .checked_sub(matched as u8)
        .and_then(Rank::from_strength)
        .unwrap_or(Rank::LowAce)
}
