use super::composition::Composition;
use super::rank::Rank;
use crate::Probability;
use rand::seq::SliceRandom;

/// A shuffled shoe of `decks` decks, tracking the exact remaining
/// composition and the Omega II running count as cards leave it.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: usize,
    penetration: Probability,
    cards: Vec<Rank>,
    composition: Composition,
    running: i32,
    history: Vec<Probability>,
    pub reshuffle: bool,
}

impl Shoe {
    pub fn new(decks: usize, penetration: Probability) -> Self {
        let mut cards = Vec::with_capacity(decks * crate::DECK_SIZE);
        for _ in 0..decks {
            for rank in Rank::ALL {
                cards.extend(std::iter::repeat_n(rank, 4));
            }
        }
        cards.shuffle(&mut rand::rng());
        Self {
            decks,
            penetration,
            cards,
            composition: Composition::full(decks),
            running: 0,
            history: vec![0.0],
            reshuffle: false,
        }
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }
    pub fn decks(&self) -> usize {
        self.decks
    }
    /// True-count trajectory over the life of the shoe.
    pub fn history(&self) -> &[Probability] {
        &self.history
    }

    /// Remove and return the next card off the shuffled shoe.
    pub fn deal(&mut self) -> Rank {
        self.check_penetration();
        let card = self
            .cards
            .pop()
            .expect("either a cheater or a bug: dealing from an empty shoe");
        self.account(card);
        card
    }

    /// Remove and return one occurrence of the dictated rank. Used when
    /// replaying externally observed cards; the shuffled sequence and the
    /// composition forget the same card.
    pub fn deal_specific(&mut self, rank: Rank) -> Rank {
        self.check_penetration();
        let position = self
            .cards
            .iter()
            .rposition(|c| *c == rank)
            .unwrap_or_else(|| panic!("either a cheater or a bug: no {} left in the shoe", rank));
        self.cards.swap_remove(position);
        self.account(rank);
        rank
    }

    /// Cards left / cards at full shoe.
    pub fn remaining_fraction(&self) -> Probability {
        self.cards.len() as Probability / (crate::DECK_SIZE * self.decks) as Probability
    }

    /// Running count normalized by the decks-remaining equivalent.
    pub fn true_count(&self) -> Probability {
        self.running as Probability / (self.decks as Probability * self.remaining_fraction())
    }

    fn check_penetration(&mut self) {
        if self.remaining_fraction() < self.penetration {
            self.reshuffle = true;
        }
    }

    fn account(&mut self, card: Rank) {
        self.composition.remove(card);
        self.running += card.weight();
        self.history.push(self.true_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_shoe_is_full() {
        let shoe = Shoe::new(8, 0.5);
        assert!(shoe.composition().total() == 8 * 52);
        assert!(shoe.remaining_fraction() == 1.0);
        assert!(!shoe.reshuffle);
    }

    #[test]
    fn dealing_tracks_composition() {
        let mut shoe = Shoe::new(1, 0.0);
        let card = shoe.deal();
        assert!(shoe.composition().count(card) == 3);
        assert!(shoe.composition().total() == 51);
    }

    #[test]
    fn specific_deal_removes_dictated_rank() {
        let mut shoe = Shoe::new(1, 0.0);
        for _ in 0..4 {
            assert!(shoe.deal_specific(Rank::Seven) == Rank::Seven);
        }
        assert!(shoe.composition().count(Rank::Seven) == 0);
        assert!(shoe.composition().total() == 48);
        assert!(shoe.cards.iter().all(|c| *c != Rank::Seven));
    }

    #[test]
    #[should_panic(expected = "cheater or a bug")]
    fn overdealing_a_rank_panics() {
        let mut shoe = Shoe::new(1, 0.0);
        for _ in 0..5 {
            shoe.deal_specific(Rank::Ace);
        }
    }

    #[test]
    fn counting_follows_omega_2() {
        let mut shoe = Shoe::new(2, 0.0);
        shoe.deal_specific(Rank::Five); // +2
        shoe.deal_specific(Rank::King); // -2
        shoe.deal_specific(Rank::Two); // +1
        assert!(shoe.running == 1);
        let expected = 1.0 / (2.0 * shoe.remaining_fraction());
        assert!((shoe.true_count() - expected).abs() < 1e-12);
        assert!(shoe.history().len() == 4);
    }

    #[test]
    fn penetration_raises_reshuffle_flag() {
        let mut shoe = Shoe::new(1, 0.5);
        for _ in 0..26 {
            shoe.deal();
        }
        assert!(!shoe.reshuffle);
        shoe.deal();
        shoe.deal();
        assert!(shoe.reshuffle);
    }
}
