use super::bucket::Bucket;
use super::cache::Cache;
use super::cache::Key;
use super::distribution::Distribution;
use crate::cards::composition::Composition;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::Probability;
use crate::BLACKJACK;
use rayon::prelude::*;

/// Exact probability that a hand drawn from this composition ends at each
/// terminal bucket. Top-level calls from a single-card hand are memoized
/// under (up-card, reduced composition); sub-branches never touch the cache.
pub fn distribution(hand: &Hand, shoe: Composition, cache: &Cache) -> Distribution {
    match hand.upcard() {
        Some(up) => {
            let key = Key::from((up, shoe.reduce()));
            match cache.get(&key) {
                Some(hit) => hit,
                None => {
                    let computed = compute(hand, shoe);
                    cache.put(key, computed);
                    computed
                }
            }
        }
        None => compute(hand, shoe),
    }
}

/// Uncached enumeration. The per-rank branches of the top level run in
/// parallel and are reduced in rank order, so the result is byte-identical
/// run to run.
pub fn compute(hand: &Hand, shoe: Composition) -> Distribution {
    if let Some(bucket) = Bucket::terminal(hand.value()) {
        return Distribution::unit(bucket);
    }
    let start = Partial::from(hand);
    let total = shoe.total();
    assert!(total > 0, "either a cheater or a bug: drawing from an empty shoe");
    Rank::ALL
        .par_iter()
        .map(|rank| branch(start, shoe, *rank, total))
        .collect::<Vec<_>>()
        .into_iter()
        .fold(Distribution::default(), |sum, dist| sum + dist)
}

/// One top-level draw. Unlike the sequential walk below, sibling branches
/// are independent here, so a busting rank folds only its own weight.
fn branch(start: Partial, shoe: Composition, rank: Rank, total: usize) -> Distribution {
    let mut acc = Distribution::default();
    let count = shoe.count(rank);
    if count > 0 {
        let weight = count as Probability / total as Probability;
        let child = start.hit(rank);
        match Bucket::terminal(child.total) {
            Some(bucket) => acc.add(bucket, weight),
            None => walk(child, shoe.without(rank), weight, &mut acc),
        }
    }
    acc
}

/// Depth-first enumeration of every draw sequence, accumulating the weight
/// of each terminal bucket. Once a rank busts the hand, every rank after it
/// in enumeration order busts too (order is non-decreasing in effective
/// value), so their weight folds straight into Bust and the branch ends.
fn walk(hand: Partial, shoe: Composition, weight: Probability, acc: &mut Distribution) {
    let total = shoe.total();
    assert!(total > 0, "either a cheater or a bug: drawing from an empty shoe");
    for (i, rank) in Rank::ALL.iter().enumerate() {
        let count = shoe.count(*rank);
        if count == 0 {
            continue;
        }
        let chance = weight * count as Probability / total as Probability;
        let child = hand.hit(*rank);
        match Bucket::terminal(child.total) {
            Some(Bucket::Bust) => {
                acc.add(Bucket::Bust, chance);
                for later in Rank::ALL[i + 1..].iter() {
                    let count = shoe.count(*later);
                    if count > 0 {
                        acc.add(Bucket::Bust, weight * count as Probability / total as Probability);
                    }
                }
                break;
            }
            Some(bucket) => acc.add(bucket, chance),
            None => walk(child, shoe.without(*rank), chance, acc),
        }
    }
}

/// The recursion only needs the resolved total and the number of aces
/// still counted as 11, not the card sequence itself.
#[derive(Debug, Clone, Copy)]
struct Partial {
    total: u8,
    soft: u8,
}

impl From<&Hand> for Partial {
    fn from(hand: &Hand) -> Self {
        hand.cards()
            .iter()
            .fold(Self { total: 0, soft: 0 }, |partial, rank| partial.hit(*rank))
    }
}

impl Partial {
    fn hit(&self, rank: Rank) -> Self {
        let mut total = self.total as u16 + rank.value() as u16;
        let mut soft = self.soft + (rank == Rank::Ace) as u8;
        while total > BLACKJACK as u16 && soft > 0 {
            total -= 10;
            soft -= 1;
        }
        Self {
            total: total as u8,
            soft,
        }
    }
}
