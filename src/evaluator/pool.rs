use crate::cards::{Card, Rank, Suit};
use crate::hand::{HandError, PlayedCard};
use crate::rules::{RuleSet, WildPolicy};
use std::collections::HashSet;

/// A pool card chosen for a hand, with the rank it plays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pick {
    pub slot: usize,
    pub rank: Rank,
}

impl Pick {
    pub fn new(slot: usize, rank: Rank) -> Self {
        Self { slot, rank }
    }
}

/// Sort picks highest rank first, keeping pool order between equals.
pub(crate) fn sort_desc(picks: &mut [Pick]) {
    picks.sort_by(|a, b| b.rank.cmp(&a.rank));
}

/// Pre-computed indices over the input cards.
/// Built once per classification and shared by every evaluator attempt.
#[derive(Debug, Clone)]
pub(crate) struct CardPool {
    /// Natural cards highest rank first, then wild cards in input order.
    cards: Vec<Card>,
    ranks: Vec<Option<Rank>>,
    naturals: usize,
    by_rank: [Vec<usize>; Rank::COUNT],
    /// Suits in order of first appearance among the natural cards.
    suits: Vec<(Suit, Vec<usize>)>,
}

impl CardPool {
    pub fn build(cards: &[Card], rules: &RuleSet) -> Result<Self, HandError> {
        if rules.forbids_duplicates() {
            let mut seen = HashSet::with_capacity(cards.len());
            if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
                return Err(HandError::DuplicateCard(*dup));
            }
        }

        let mut naturals: Vec<(Card, Rank)> = Vec::with_capacity(cards.len());
        let mut wilds: Vec<Card> = Vec::new();
        for &card in cards {
            if rules.is_wild(card.face()) {
                wilds.push(card);
            } else {
                let rank = card.rank().ok_or(HandError::UnrankedCard(card))?;
                naturals.push((card, rank));
            }
        }
        naturals.sort_by(|a, b| b.1.cmp(&a.1));

        let mut by_rank: [Vec<usize>; Rank::COUNT] = Default::default();
        let mut suits: Vec<(Suit, Vec<usize>)> = Vec::new();
        for (slot, &(card, rank)) in naturals.iter().enumerate() {
            by_rank[rank.strength() as usize].push(slot);
            match suits.iter_mut().find(|(s, _)| *s == card.suit()) {
                Some((_, slots)) => slots.push(slot),
                None => suits.push((card.suit(), vec![slot])),
            }
        }

        let natural_count = naturals.len();
        let mut ranks: Vec<Option<Rank>> = naturals.iter().map(|&(_, r)| Some(r)).collect();
        ranks.resize(natural_count + wilds.len(), None);
        let mut pool: Vec<Card> = naturals.into_iter().map(|(c, _)| c).collect();
        pool.extend(wilds);

        Ok(Self { cards: pool, ranks, naturals: natural_count, by_rank, suits })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_wild(&self, slot: usize) -> bool {
        slot >= self.naturals
    }

    pub fn wild_count(&self) -> usize {
        self.cards.len() - self.naturals
    }

    /// Natural cards of `rank`, in pool order.
    pub fn bucket(&self, rank: Rank) -> &[usize] {
        &self.by_rank[rank.strength() as usize]
    }

    pub fn suits(&self) -> &[(Suit, Vec<usize>)] {
        &self.suits
    }

    /// Natural picks for `slots`, each at its printed rank.
    pub fn natural_picks(&self, slots: &[usize]) -> Vec<Pick> {
        slots
            .iter()
            .filter_map(|&slot| self.ranks.get(slot).copied().flatten().map(|r| Pick::new(slot, r)))
            .collect()
    }

    /// Every natural card, highest first.
    pub fn all_naturals(&self) -> Vec<Pick> {
        let slots: Vec<usize> = (0..self.naturals).collect();
        self.natural_picks(&slots)
    }

    pub fn played(&self, pick: Pick) -> PlayedCard {
        PlayedCard::new(self.cards[pick.slot], Some(pick.rank), self.is_wild(pick.slot))
    }
}

/// State of one evaluator attempt: which wild cards have been assigned a rank.
///
/// The classifier calls [`Draft::reset`] before every attempt so no
/// assignment leaks from one evaluator into the next.
#[derive(Debug, Clone)]
pub(crate) struct Draft<'a> {
    pub pool: &'a CardPool,
    pub rules: &'a RuleSet,
    wilds: Vec<Option<Rank>>,
}

impl<'a> Draft<'a> {
    pub fn new(pool: &'a CardPool, rules: &'a RuleSet) -> Self {
        Self { pool, rules, wilds: vec![None; pool.wild_count()] }
    }

    pub fn reset(&mut self) {
        self.wilds.iter_mut().for_each(|w| *w = None);
    }

    /// Pool slots of wild cards that have not been assigned a rank yet.
    pub fn unresolved_wilds(&self) -> Vec<usize> {
        self.wilds
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_none())
            .map(|(i, _)| self.pool.naturals + i)
            .collect()
    }

    pub fn wild_rank(&self, slot: usize) -> Option<Rank> {
        slot.checked_sub(self.pool.naturals).and_then(|i| self.wilds.get(i).copied().flatten())
    }

    /// Record the ranks wild cards play as in `picks`.
    pub fn commit(&mut self, picks: &[Pick]) {
        for pick in picks {
            if let Some(i) = pick.slot.checked_sub(self.pool.naturals) {
                if let Some(w) = self.wilds.get_mut(i) {
                    *w = Some(pick.rank);
                }
            }
        }
    }

    /// Unresolved wild cards able to stand in for `rank` under the wild policy.
    pub fn wilds_for(&self, rank: Rank) -> usize {
        match self.rules.wild_policy {
            WildPolicy::Natural => self.unresolved_wilds().len(),
            WildPolicy::AceOnly if rank == Rank::Ace => self.unresolved_wilds().len(),
            WildPolicy::AceOnly => 0,
        }
    }

    /// Highest remaining cards not in `taken`. Left-over wild cards play as Aces.
    pub fn kickers(&mut self, taken: &[Pick], count: usize) -> Vec<Pick> {
        if count == 0 {
            return Vec::new();
        }
        let used: HashSet<usize> = taken.iter().map(|p| p.slot).collect();
        let mut rest: Vec<Pick> = (0..self.pool.len())
            .filter(|slot| !used.contains(slot))
            .map(|slot| match self.pool.ranks[slot].or(self.wild_rank(slot)) {
                Some(rank) => Pick::new(slot, rank),
                None => Pick::new(slot, Rank::Ace),
            })
            .collect();
        sort_desc(&mut rest);
        rest.truncate(count);
        self.commit(&rest);
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Face};

    fn pool(notation: &str, rules: &RuleSet) -> CardPool {
        CardPool::build(&parse_cards(notation).unwrap(), rules).unwrap()
    }

    #[test]
    fn cards_sorted_descending_with_wilds_last() {
        let rules = RuleSet { wild: Some(Face::Joker), ..RuleSet::standard() };
        let p = pool("3s Oh Ah 5d Kc", &rules);
        let shown: Vec<String> = p.cards().iter().map(ToString::to_string).collect();
        assert_eq!(shown, ["Ah", "Kc", "5d", "3s", "Oh"]);
        assert_eq!(p.wild_count(), 1);
        assert!(p.is_wild(4));
        assert!(!p.is_wild(0));
    }

    #[test]
    fn buckets_and_suits_index_naturals() {
        let p = pool("Kh 9s Kd 2h", &RuleSet::standard());
        assert_eq!(p.bucket(Rank::King), &[0, 1]);
        assert_eq!(p.bucket(Rank::Nine), &[2]);
        assert!(p.bucket(Rank::Ace).is_empty());
        let suits: Vec<Suit> = p.suits().iter().map(|(s, _)| *s).collect();
        assert_eq!(suits, [Suit::Hearts, Suit::Diamonds, Suit::Spades]);
        assert_eq!(p.suits()[0].1, vec![0, 3]);
    }

    #[test]
    fn duplicates_rejected_only_without_wilds() {
        let cards = parse_cards("Ah Ah 3c").unwrap();
        let err = CardPool::build(&cards, &RuleSet::standard()).unwrap_err();
        assert_eq!(err, HandError::DuplicateCard(cards[0]));

        let wild = RuleSet::named("deuceswild");
        assert!(CardPool::build(&cards, &wild).is_ok());
    }

    #[test]
    fn joker_without_wild_rules_is_rejected() {
        let cards = parse_cards("Oh 3c").unwrap();
        let err = CardPool::build(&cards, &RuleSet::standard()).unwrap_err();
        assert!(matches!(err, HandError::UnrankedCard(_)));
    }

    #[test]
    fn draft_commit_and_reset() {
        let rules = RuleSet { wild: Some(Face::Joker), ..RuleSet::standard() };
        let p = pool("Kh Oc Od", &rules);
        let mut draft = Draft::new(&p, &rules);
        assert_eq!(draft.unresolved_wilds(), vec![1, 2]);

        draft.commit(&[Pick::new(1, Rank::King)]);
        assert_eq!(draft.wild_rank(1), Some(Rank::King));
        assert_eq!(draft.unresolved_wilds(), vec![2]);

        draft.reset();
        assert_eq!(draft.wild_rank(1), None);
        assert_eq!(draft.unresolved_wilds().len(), 2);
    }

    #[test]
    fn ace_only_wilds_stand_in_for_aces_only() {
        let rules = RuleSet::named("paigow");
        let p = pool("Kh Oc", &rules);
        let draft = Draft::new(&p, &rules);
        assert_eq!(draft.wilds_for(Rank::Ace), 1);
        assert_eq!(draft.wilds_for(Rank::King), 0);
    }

    #[test]
    fn kickers_skip_taken_cards_and_promote_wilds() {
        let rules = RuleSet { wild: Some(Face::Joker), ..RuleSet::standard() };
        let p = pool("9h 9d 4c Oc", &rules);
        let mut draft = Draft::new(&p, &rules);
        let pair = [Pick::new(0, Rank::Nine), Pick::new(1, Rank::Nine)];
        let kicks = draft.kickers(&pair, 2);
        assert_eq!(kicks, vec![Pick::new(3, Rank::Ace), Pick::new(2, Rank::Four)]);
        assert_eq!(draft.wild_rank(3), Some(Rank::Ace));
    }
}
