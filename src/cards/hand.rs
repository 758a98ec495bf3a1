use super::rank::Rank;
use crate::BLACKJACK;

/// Table rule toggles that change hand classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rules {
    /// Count three sevens as a blackjack.
    pub triple_seven: bool,
}

/// An ordered sequence of dealt cards belonging to one party.
/// Value and softness are recomputed from the card sequence on every access;
/// there is no hidden state beyond the split/double/surrender flags.
#[derive(Debug, Default, Clone)]
pub struct Hand {
    cards: Vec<Rank>,
    from_split: bool,
    doubled: bool,
    surrendered: bool,
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }
}

impl Hand {
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn push(&mut self, rank: Rank) {
        self.cards.push(rank);
    }

    /// The single dealt card, when this hand is an up-card-only hand.
    pub fn upcard(&self) -> Option<Rank> {
        match self.cards.as_slice() {
            [card] => Some(*card),
            _ => None,
        }
    }

    /// Sum of point values, reducing one soft Ace at a time until the total
    /// fits under 21 or no soft Ace remains.
    pub fn value(&self) -> u8 {
        self.resolve().0
    }

    /// At least one Ace still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.resolve().1 > 0
    }

    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Exactly two cards of identical rank.
    pub fn is_splittable(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a == b)
    }

    /// An unsplit two-card 21, or three sevens when the rule is enabled.
    pub fn is_blackjack(&self, rules: &Rules) -> bool {
        !self.from_split
            && self.value() == BLACKJACK
            && (self.size() == 2
                || (rules.triple_seven && self.cards.iter().all(|r| r.value() == 7)))
    }

    pub fn is_doubled(&self) -> bool {
        self.doubled
    }
    pub fn is_surrendered(&self) -> bool {
        self.surrendered
    }
    pub fn is_from_split(&self) -> bool {
        self.from_split
    }

    pub fn double(&mut self) {
        self.doubled = true;
    }
    pub fn surrender(&mut self) {
        self.surrendered = true;
    }

    /// Remove the last card into a new single-card hand. Both hands are
    /// flagged as split offspring, which disqualifies the blackjack bonus.
    pub fn split(&mut self) -> Hand {
        assert!(self.is_splittable(), "splitting a non-pair hand");
        self.from_split = true;
        let card = self.cards.pop().expect("pair hand has two cards");
        Hand {
            cards: vec![card],
            from_split: true,
            ..Default::default()
        }
    }

    /// (total, aces still counted as 11)
    fn resolve(&self) -> (u8, usize) {
        let mut total = self.cards.iter().map(|r| r.value() as u16).sum::<u16>();
        let mut soft = self.cards.iter().filter(|r| **r == Rank::Ace).count();
        while total > BLACKJACK as u16 && soft > 0 {
            total -= 10;
            soft -= 1;
        }
        (total as u8, soft)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        write!(f, "({})", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ace_reduction() {
        // one Ace at 11, one at 1
        let hand = Hand::from(vec![Rank::Ace, Rank::Ace, Rank::Nine]);
        assert!(hand.value() == 21);
        assert!(hand.is_soft());
    }

    #[test]
    fn all_aces_reduce() {
        let hand = Hand::from(vec![Rank::Ace, Rank::Ace, Rank::Ten, Rank::King]);
        assert!(hand.value() == 22);
        assert!(!hand.is_soft());
        assert!(hand.is_busted());
    }

    #[test]
    fn hard_hand_is_not_soft() {
        let hand = Hand::from(vec![Rank::Ten, Rank::Seven]);
        assert!(hand.value() == 17);
        assert!(!hand.is_soft());
    }

    #[test]
    fn two_card_21_is_blackjack() {
        let rules = Rules::default();
        let hand = Hand::from(vec![Rank::Ace, Rank::King]);
        assert!(hand.is_blackjack(&rules));
    }

    #[test]
    fn split_hand_is_never_blackjack() {
        let rules = Rules::default();
        let mut pair = Hand::from(vec![Rank::Ace, Rank::Ace]);
        let mut other = pair.split();
        pair.push(Rank::King);
        other.push(Rank::Queen);
        assert!(pair.value() == 21);
        assert!(!pair.is_blackjack(&rules));
        assert!(!other.is_blackjack(&rules));
    }

    #[test]
    fn triple_seven_rule() {
        let hand = Hand::from(vec![Rank::Seven, Rank::Seven, Rank::Seven]);
        assert!(!hand.is_blackjack(&Rules::default()));
        assert!(hand.is_blackjack(&Rules { triple_seven: true }));
    }

    #[test]
    fn three_card_21_is_not_blackjack() {
        let hand = Hand::from(vec![Rank::Seven, Rank::Five, Rank::Nine]);
        assert!(hand.value() == 21);
        assert!(!hand.is_blackjack(&Rules { triple_seven: true }));
    }

    #[test]
    fn splittable_pairs_by_rank() {
        assert!(Hand::from(vec![Rank::Eight, Rank::Eight]).is_splittable());
        // same value, different rank
        assert!(!Hand::from(vec![Rank::Ten, Rank::Jack]).is_splittable());
        assert!(!Hand::from(vec![Rank::Eight, Rank::Eight, Rank::Eight]).is_splittable());
    }
}
