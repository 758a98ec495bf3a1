use crate::cards::hand::Hand;
use crate::cards::hand::Rules;
use crate::Utility;
use colored::Colorize;

/// How one player hand ended against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Won,
    WonBlackjack,
    Lost,
    Push,
    Surrendered,
}

/// Per-hand payout, already scaled by the round's stake multiplier.
#[derive(Debug, Clone, Copy)]
pub struct Settlement {
    pub status: Status,
    pub won: Utility,
    pub bet: Utility,
}

impl Settlement {
    /// Payout rules: loss -1, win +1, blackjack +1.5 (push against a
    /// dealer blackjack), surrender -0.5; doubling doubles both sides;
    /// everything scales by the stake.
    pub fn settle(hand: &Hand, dealer: &Hand, rules: &Rules, stake: Utility) -> Self {
        let status = if hand.is_surrendered() {
            Status::Surrendered
        } else if hand.is_busted() {
            Status::Lost
        } else if hand.is_blackjack(rules) {
            if dealer.is_blackjack(rules) {
                Status::Push
            } else {
                Status::WonBlackjack
            }
        } else if dealer.is_busted() {
            Status::Won
        } else if dealer.value() < hand.value() {
            Status::Won
        } else if dealer.value() > hand.value() {
            Status::Lost
        } else if dealer.is_blackjack(rules) {
            // player's plain 21 against a dealer blackjack
            Status::Lost
        } else {
            Status::Push
        };
        let mut won = match status {
            Status::Won => 1.0,
            Status::WonBlackjack => 1.5,
            Status::Lost => -1.0,
            Status::Push => 0.0,
            Status::Surrendered => -0.5,
        };
        let mut bet = stake;
        if hand.is_doubled() {
            won *= 2.0;
            bet *= 2.0;
        }
        won *= stake;
        Self { status, won, bet }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status = match self.status {
            Status::Won => "WON".green(),
            Status::WonBlackjack => "WON 3:2".green(),
            Status::Lost => "LOST".red(),
            Status::Push => "PUSH".yellow(),
            Status::Surrendered => "SURRENDER".red(),
        };
        write!(f, "{:<9} {:+.1}", status, self.won)
    }
}
