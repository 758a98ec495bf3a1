use crate::Probability;
use crate::Utility;

/// Step function from true count to stake multiplier. Below the lowest
/// threshold the base unit rides; above the highest, the full spread.
#[derive(Debug, Clone)]
pub struct Spread {
    /// (exclusive true-count threshold, stake multiplier), ascending.
    tiers: Vec<(Probability, Utility)>,
    raised: usize,
}

impl Default for Spread {
    fn default() -> Self {
        Self {
            tiers: vec![(2.5, 2.0), (3.0, 3.0), (4.0, 5.0), (5.0, 10.0), (6.0, 20.0)],
            raised: 0,
        }
    }
}

impl Spread {
    pub fn new(tiers: Vec<(Probability, Utility)>) -> Self {
        assert!(
            tiers.windows(2).all(|w| w[0].0 < w[1].0),
            "bet tiers must ascend"
        );
        Self { tiers, raised: 0 }
    }

    /// Stake multiplier for the current true count. Counts how often an
    /// elevated stake was chosen, for diagnostics only.
    pub fn stake_for(&mut self, true_count: Probability) -> Utility {
        match self
            .tiers
            .iter()
            .rev()
            .find(|(threshold, _)| true_count > *threshold)
        {
            Some((_, stake)) => {
                self.raised += 1;
                *stake
            }
            None => 1.0,
        }
    }

    /// How often an elevated stake was chosen.
    pub fn raised(&self) -> usize {
        self.raised
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes() {
        let mut spread = Spread::default();
        assert!(spread.stake_for(7.0) == 20.0);
        assert!(spread.stake_for(1.0) == 1.0);
        assert!(spread.stake_for(-3.0) == 1.0);
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        let mut spread = Spread::default();
        assert!(spread.stake_for(2.5) == 1.0);
        assert!(spread.stake_for(3.0) == 2.0);
        assert!(spread.stake_for(3.5) == 3.0);
        assert!(spread.stake_for(4.5) == 5.0);
        assert!(spread.stake_for(5.5) == 10.0);
        assert!(spread.stake_for(6.001) == 20.0);
    }

    #[test]
    fn raised_counter() {
        let mut spread = Spread::default();
        spread.stake_for(0.0);
        spread.stake_for(4.2);
        spread.stake_for(9.9);
        assert!(spread.raised() == 2);
    }

    #[test]
    #[should_panic(expected = "ascend")]
    fn unordered_tiers_panic() {
        Spread::new(vec![(3.0, 2.0), (2.0, 4.0)]);
    }
}
