use super::context::Context;
use super::settlement::Settlement;
use crate::cards::composition::Composition;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::shoe::Shoe;
use crate::strategy::action::Action;
use crate::strategy::decision::choose;
use crate::Utility;
use crate::DEALER_STAND;
use crate::INSURANCE_THRESHOLD;

/// Round phases, in order. Insurance only happens behind a dealer Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Dealing,
    Insurance,
    PlayerTurn,
    DealerTurn,
    Settling,
}

/// Net result of one round across all player hands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Pnl {
    pub won: Utility,
    pub bet: Utility,
    pub hands: usize,
}

/// One game round: initial deal, insurance check, player decisions,
/// dealer completion, settlement. The shoe advances as cards leave it;
/// the reshuffle flag is honored between rounds, never within one.
#[derive(Debug)]
pub struct Round {
    stake: Utility,
    pub hands: Vec<Hand>,
    pub dealer: Hand,
    pub insurance: bool,
}

/// Insurance is favorable once at least half the remaining cards are
/// ten-valued; the boundary is inclusive.
pub fn insurance(shoe: &Composition) -> bool {
    shoe.tens_fraction() >= INSURANCE_THRESHOLD
}

impl Round {
    pub fn new(stake: Utility) -> Self {
        Self {
            stake,
            hands: vec![],
            dealer: Hand::default(),
            insurance: false,
        }
    }

    /// Drive one round through every phase and return it settled-ready.
    pub fn run(shoe: &mut Shoe, ctx: &Context, stake: Utility) -> Self {
        assert!(!shoe.reshuffle, "starting a round on a spent shoe");
        let mut round = Self::new(stake);
        let mut phase = Phase::Dealing;
        loop {
            phase = match phase {
                Phase::Dealing => {
                    round.deal(shoe);
                    match round.dealer.upcard() {
                        Some(Rank::Ace) => Phase::Insurance,
                        _ => Phase::PlayerTurn,
                    }
                }
                Phase::Insurance => {
                    round.insurance = insurance(&shoe.composition());
                    if round.insurance {
                        log::info!("insurance is favorable against the dealer ace");
                    }
                    Phase::PlayerTurn
                }
                Phase::PlayerTurn => {
                    round.player_turn(shoe, ctx);
                    Phase::DealerTurn
                }
                Phase::DealerTurn => {
                    round.dealer_turn(shoe);
                    Phase::Settling
                }
                Phase::Settling => break round,
            };
        }
    }

    /// Two cards to the player, one up-card to the dealer. No hole card.
    pub fn deal(&mut self, shoe: &mut Shoe) {
        let first = shoe.deal();
        let second = shoe.deal();
        self.hands = vec![Hand::from(vec![first, second])];
        self.dealer = Hand::from(vec![shoe.deal()]);
    }

    /// Play every live hand in turn. Splitting pushes a fresh one-card
    /// hand onto the end of the list; it gets its turn afterwards.
    pub fn player_turn(&mut self, shoe: &mut Shoe, ctx: &Context) {
        let mut i = 0;
        while i < self.hands.len() {
            self.play_hand(i, shoe, ctx);
            i += 1;
        }
    }

    /// Dealer draws to 17 or beyond, no decisions involved.
    pub fn dealer_turn(&mut self, shoe: &mut Shoe) {
        while self.dealer.value() < DEALER_STAND {
            let card = shoe.deal();
            self.dealer.push(card);
        }
    }

    /// Settle every player hand against the dealer.
    pub fn settle(&self, ctx: &Context) -> Pnl {
        self.hands
            .iter()
            .map(|hand| Settlement::settle(hand, &self.dealer, &ctx.rules, self.stake))
            .inspect(|settlement| log::debug!("{} against {}", settlement, self.dealer))
            .fold(Pnl::default(), |pnl, settlement| Pnl {
                won: pnl.won + settlement.won,
                bet: pnl.bet + settlement.bet,
                hands: pnl.hands + 1,
            })
    }

    fn play_hand(&mut self, i: usize, shoe: &mut Shoe, ctx: &Context) {
        loop {
            // a split offspring arrives with one card and gets completed
            if self.hands[i].size() < 2 {
                let card = shoe.deal();
                self.hands[i].push(card);
                continue;
            }
            let hand = &self.hands[i];
            if hand.is_busted() || hand.is_blackjack(&ctx.rules) {
                break;
            }
            let action = choose(hand, &self.dealer, shoe.composition(), &ctx.tables, &ctx.cache);
            log::debug!("{} on {} against {}", action, hand, self.dealer);
            match action {
                Action::Stand => break,
                Action::Hit => {
                    let card = shoe.deal();
                    self.hands[i].push(card);
                }
                Action::Double => {
                    let card = shoe.deal();
                    self.hands[i].double();
                    self.hands[i].push(card);
                    break;
                }
                Action::Surrender => {
                    self.hands[i].surrender();
                    break;
                }
                Action::Split => {
                    let offspring = self.hands[i].split();
                    self.hands.push(offspring);
                }
            }
        }
    }
}
