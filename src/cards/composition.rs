use super::rank::Rank;
use crate::Probability;
use crate::DECK_SIZE;

/// The exactly-known multiset of undealt cards, by rank. Small enough to
/// pass by value, so recursive branches copy instead of deep-cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Composition([u8; 13]);

/// A composition with the four ten-valued ranks merged into one bucket.
/// Used only as a cache key; dealing semantics keep the ranks distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reduced(pub [u8; 10]);

impl From<[u8; 13]> for Composition {
    fn from(counts: [u8; 13]) -> Self {
        Self(counts)
    }
}

impl Composition {
    /// Four of each rank per deck.
    pub fn full(decks: usize) -> Self {
        assert!(decks > 0 && decks <= 63, "unreasonable shoe size: {}", decks);
        Self([4 * decks as u8; 13])
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank as usize]
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|n| *n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|n| *n == 0)
    }

    /// Remove one occurrence of the rank.
    pub fn remove(&mut self, rank: Rank) {
        assert!(
            self.0[rank as usize] > 0,
            "either a cheater or a bug: no {} left in the shoe",
            rank
        );
        self.0[rank as usize] -= 1;
    }

    /// Copy with one occurrence of the rank removed.
    pub fn without(&self, rank: Rank) -> Self {
        let mut child = *self;
        child.remove(rank);
        child
    }

    /// Conditional probability of drawing the rank next.
    pub fn chance(&self, rank: Rank) -> Probability {
        let total = self.total();
        assert!(total > 0, "either a cheater or a bug: drawing from an empty shoe");
        self.count(rank) as Probability / total as Probability
    }

    /// Fraction of remaining cards that are ten-valued.
    pub fn tens_fraction(&self) -> Probability {
        let total = self.total();
        assert!(total > 0, "either a cheater or a bug: empty shoe");
        let tens = Rank::ALL
            .iter()
            .filter(|r| r.is_ten())
            .map(|r| self.count(*r) as usize)
            .sum::<usize>();
        tens as Probability / total as Probability
    }

    /// Cards left relative to a full shoe of the given size.
    pub fn fraction_of(&self, decks: usize) -> Probability {
        self.total() as Probability / (DECK_SIZE * decks) as Probability
    }

    pub fn reduce(&self) -> Reduced {
        let mut buckets = [0u8; 10];
        for rank in Rank::ALL {
            buckets[rank.bucket()] += self.count(rank);
        }
        Reduced(buckets)
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Rank::ALL {
            write!(f, "{}:{} ", rank, self.count(rank))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_shoe_totals() {
        let comp = Composition::full(8);
        assert!(comp.total() == 8 * DECK_SIZE);
        assert!(comp.count(Rank::Ace) == 32);
    }

    #[test]
    fn remove_decrements_one_rank() {
        let mut comp = Composition::full(1);
        comp.remove(Rank::Queen);
        assert!(comp.count(Rank::Queen) == 3);
        assert!(comp.count(Rank::Ten) == 4);
        assert!(comp.total() == DECK_SIZE - 1);
    }

    #[test]
    #[should_panic(expected = "cheater or a bug")]
    fn removing_exhausted_rank_panics() {
        let mut comp = Composition::from([0u8; 13]);
        comp.remove(Rank::Ace);
    }

    #[test]
    fn reduction_collapses_tens() {
        let comp = Composition::full(2);
        let reduced = comp.reduce();
        assert!(reduced.0[9] == 4 * 8);
        assert!(reduced.0[..9].iter().all(|n| *n == 8));
    }

    #[test]
    fn chances_sum_to_one() {
        let comp = Composition::full(4).without(Rank::Five).without(Rank::King);
        let mass = Rank::ALL.iter().map(|r| comp.chance(*r)).sum::<Probability>();
        assert!((mass - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tens_fraction_fresh_shoe() {
        let comp = Composition::full(8);
        assert!((comp.tens_fraction() - 16.0 / 52.0).abs() < 1e-12);
    }
}
