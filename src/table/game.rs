use super::betting::Spread;
use super::context::Context;
use super::round::Round;
use crate::cards::shoe::Shoe;
use crate::Utility;

/// A sequence of rounds against one shoe, sized by the betting spread,
/// played until the shoe demands a reshuffle.
#[derive(Debug)]
pub struct Game {
    shoe: Shoe,
    spread: Spread,
    money: Utility,
    bet: Utility,
    hands: usize,
}

impl Game {
    pub fn new(decks: usize, penetration: f64) -> Self {
        Self {
            shoe: Shoe::new(decks, penetration),
            spread: Spread::default(),
            money: 0.0,
            bet: 0.0,
            hands: 0,
        }
    }

    /// Play rounds until the reshuffle flag comes up. The flag is only
    /// consulted here, between rounds.
    pub fn play(&mut self, ctx: &Context) {
        while !self.shoe.reshuffle {
            let stake = self.spread.stake_for(self.shoe.true_count());
            let pnl = Round::run(&mut self.shoe, ctx, stake).settle(ctx);
            self.money += pnl.won;
            self.bet += pnl.bet;
            self.hands += pnl.hands;
        }
    }

    pub fn money(&self) -> Utility {
        self.money
    }
    pub fn bet(&self) -> Utility {
        self.bet
    }
    pub fn hands(&self) -> usize {
        self.hands
    }
    pub fn raised(&self) -> usize {
        self.spread.raised()
    }
    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }
}
