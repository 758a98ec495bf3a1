use super::action::Action;
use super::tables::Mode;
use super::tables::Tables;
use crate::cards::composition::Composition;
use crate::cards::hand::Hand;
use crate::odds::bucket::Bucket;
use crate::odds::cache::Cache;
use crate::odds::distribution::Distribution;
use crate::odds::engine::distribution;
use crate::Utility;
use crate::DEALER_STAND;
use std::cmp::Ordering;

/// Pick the player's next action. The strategy tables answer first;
/// double and surrender degrade to hit once the hand has been touched,
/// and in expected-value mode the remaining hit/stand choice comes from
/// the one-ply comparison against the live shoe.
pub fn choose(
    hand: &Hand,
    dealer: &Hand,
    shoe: Composition,
    tables: &Tables,
    cache: &Cache,
) -> Action {
    let up = dealer
        .cards()
        .first()
        .copied()
        .expect("dealer shows an up-card");
    let baseline = match tables.lookup(hand, up) {
        Action::Double if hand.size() == 2 => return Action::Double,
        Action::Surrender if hand.size() == 2 => return Action::Surrender,
        Action::Split if hand.is_splittable() => return Action::Split,
        Action::Double | Action::Surrender | Action::Split => Action::Hit,
        answer => answer,
    };
    match tables.mode {
        Mode::Table => baseline,
        Mode::ExpectedValue => {
            let dealer_dist = distribution(dealer, shoe, cache);
            let player_dist = distribution(hand, shoe, cache);
            let stand = ev_stand(hand.value(), &dealer_dist);
            let hit = ev_hit(&player_dist, &dealer_dist);
            log::debug!("EV hit {:.4} vs stand {:.4} on {}", hit, stand, hand);
            if hit > stand {
                Action::Hit
            } else {
                // a tie stands: no further card gets consumed
                Action::Stand
            }
        }
    }
}

/// Chance of beating the dealer by standing on `total` now: everything the
/// dealer ends strictly below it, all dealer busts, and half of an exact
/// tie. Below 17, only a dealer bust wins.
pub fn ev_stand(total: u8, dealer: &Distribution) -> Utility {
    let bust = dealer.get(Bucket::Bust);
    if total < DEALER_STAND {
        return bust;
    }
    Bucket::ALL
        .iter()
        .filter_map(|bucket| bucket.total().map(|t| (bucket, t)))
        .map(|(bucket, t)| match t.cmp(&total) {
            Ordering::Less => dealer.get(*bucket),
            Ordering::Equal => dealer.get(*bucket) / 2.0,
            Ordering::Greater => 0.0,
        })
        .sum::<Utility>()
        + bust
}

/// One-ply hit value: for each total the next card could land on, the
/// stand value that total would have, weighted by its chance. A bust
/// contributes nothing. Deeper lookahead is deliberately not modeled.
pub fn ev_hit(player: &Distribution, dealer: &Distribution) -> Utility {
    Bucket::ALL
        .iter()
        .filter_map(|bucket| bucket.total().map(|t| (bucket, t)))
        .map(|(bucket, t)| player.get(*bucket) * ev_stand(t, dealer))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::strategy::tables::Tables;

    fn hand(cards: &[Rank]) -> Hand {
        Hand::from(cards.to_vec())
    }

    #[test]
    fn stand_values_from_a_handcrafted_distribution() {
        let dealer = Distribution::from([0.5, 0.0, 0.0, 0.0, 0.0, 0.5]);
        assert!((ev_stand(18, &dealer) - 1.0).abs() < 1e-12);
        assert!((ev_stand(17, &dealer) - 0.75).abs() < 1e-12);
        assert!((ev_stand(16, &dealer) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn hit_value_ignores_bust_mass() {
        let dealer = Distribution::from([0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        let player = Distribution::from([0.25, 0.0, 0.0, 0.0, 0.25, 0.5]);
        // every non-busted landing beats a certainly-busting dealer
        assert!((ev_hit(&player, &dealer) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn eleven_hits_in_expected_value_mode() {
        // four decks minus one dealt Ten; standing on 11 is strictly dominated
        let shoe = Composition::full(4).without(Rank::Ten);
        let dealer = hand(&[Rank::Ten]);
        let player = hand(&[Rank::Six, Rank::Five]);
        let cache = Cache::default();
        let tables = Tables::basic();
        // the baseline table doubles a two-card 11; the EV comparison is
        // what decides once the double is spent
        assert!(choose(&player, &dealer, shoe, &tables, &cache) == Action::Double);
        let eleven = hand(&[Rank::Two, Rank::Four, Rank::Five]);
        assert!(eleven.value() == 11);
        assert!(choose(&eleven, &dealer, shoe, &tables, &cache) == Action::Hit);
        // and with no double on offer, the two-card 11 hits outright
        let flat = Tables::uniform(Action::Hit);
        assert!(choose(&player, &dealer, shoe, &flat, &cache) == Action::Hit);
    }

    #[test]
    fn terminal_twenty_one_stands() {
        // hit and stand EVs coincide on a terminal total; ties stand
        let shoe = Composition::full(1);
        let dealer = hand(&[Rank::Ten]);
        let player = hand(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let cache = Cache::default();
        let tables = Tables::basic();
        assert!(choose(&player, &dealer, shoe, &tables, &cache) == Action::Stand);
    }

    #[test]
    fn double_and_surrender_degrade_once_touched() {
        let mut tables = Tables::basic();
        tables.mode = Mode::Table;
        let shoe = Composition::full(8);
        let cache = Cache::default();
        // three-card 11 may not double any more
        let eleven = hand(&[Rank::Two, Rank::Four, Rank::Five]);
        assert!(choose(&eleven, &hand(&[Rank::Five]), shoe, &tables, &cache) == Action::Hit);
        // three-card 16 may not surrender any more
        let sixteen = hand(&[Rank::Ten, Rank::Two, Rank::Four]);
        assert!(choose(&sixteen, &hand(&[Rank::King]), shoe, &tables, &cache) == Action::Hit);
        // but untouched hands still do
        let fresh = hand(&[Rank::Ten, Rank::Six]);
        assert!(choose(&fresh, &hand(&[Rank::King]), shoe, &tables, &cache) == Action::Surrender);
    }

    #[test]
    fn table_mode_answers_from_the_table() {
        let mut tables = Tables::basic();
        tables.mode = Mode::Table;
        let shoe = Composition::full(8);
        let cache = Cache::default();
        let twelve = hand(&[Rank::Ten, Rank::Two]);
        assert!(choose(&twelve, &hand(&[Rank::Four]), shoe, &tables, &cache) == Action::Stand);
        assert!(choose(&twelve, &hand(&[Rank::Two]), shoe, &tables, &cache) == Action::Hit);
    }
}
