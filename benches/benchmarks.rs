criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_dealer_distribution,
        computing_player_distribution,
        computing_distribution_cached,
        settling_a_full_round,
}

fn computing_dealer_distribution(c: &mut criterion::Criterion) {
    let shoe = Composition::full(robojack::SHOE_DECKS);
    c.bench_function("compute dealer chances from a Six up", |b| {
        let hand = Hand::from(vec![Rank::Six]);
        b.iter(|| engine::compute(&hand, shoe.without(Rank::Six)))
    });
}

fn computing_player_distribution(c: &mut criterion::Criterion) {
    let shoe = Composition::full(robojack::SHOE_DECKS);
    c.bench_function("compute player chances from a hard 12", |b| {
        let hand = Hand::from(vec![Rank::Ten, Rank::Two]);
        b.iter(|| engine::compute(&hand, shoe.without(Rank::Ten).without(Rank::Two)))
    });
}

fn computing_distribution_cached(c: &mut criterion::Criterion) {
    let shoe = Composition::full(robojack::SHOE_DECKS);
    let cache = Cache::default();
    let hand = Hand::from(vec![Rank::Ace]);
    engine::distribution(&hand, shoe.without(Rank::Ace), &cache);
    c.bench_function("look up cached chances for an Ace up", |b| {
        b.iter(|| engine::distribution(&hand, shoe.without(Rank::Ace), &cache))
    });
}

fn settling_a_full_round(c: &mut criterion::Criterion) {
    let ctx = Context::default();
    c.bench_function("play and settle one round", |b| {
        b.iter(|| {
            let mut shoe = Shoe::new(robojack::SHOE_DECKS, robojack::SHOE_PENETRATION);
            Round::run(&mut shoe, &ctx, 1.0).settle(&ctx)
        })
    });
}

use robojack::cards::composition::Composition;
use robojack::cards::hand::Hand;
use robojack::cards::rank::Rank;
use robojack::cards::shoe::Shoe;
use robojack::odds::cache::Cache;
use robojack::odds::engine;
use robojack::table::context::Context;
use robojack::table::round::Round;
