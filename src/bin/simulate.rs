//! Batch blackjack simulation.
//!
//! Plays shoes end to end with the expected-value decision engine (or the
//! plain strategy tables), counting cards and spreading bets, and reports
//! the aggregate edge.

use clap::Parser;
use robojack::cards::hand::Rules;
use robojack::odds::cache::Cache;
use robojack::save::disk::Disk;
use robojack::strategy::tables::Mode;
use robojack::strategy::tables::Tables;
use robojack::table::context::Context;
use robojack::table::game::Game;
use robojack::Utility;

#[derive(Parser)]
#[command(about = "blackjack card-counting simulation")]
struct Args {
    /// Number of shoes to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Decks per shoe.
    #[arg(long, default_value_t = robojack::SHOE_DECKS)]
    decks: usize,
    /// Reshuffle once this fraction of the shoe remains.
    #[arg(long, default_value_t = robojack::SHOE_PENETRATION)]
    penetration: f64,
    /// Strategy tables as JSON; defaults to the built-in basic strategy.
    #[arg(long)]
    strategy: Option<String>,
    /// Decide hit/stand from the tables instead of live expected values.
    #[arg(long)]
    table: bool,
    /// Count three sevens as a blackjack.
    #[arg(long)]
    triple7: bool,
    /// Keep the chances cache on disk across runs.
    #[arg(long)]
    persist: bool,
}

fn main() -> anyhow::Result<()> {
    robojack::log();
    let args = Args::parse();
    let mut tables = match &args.strategy {
        Some(path) => Tables::load(path)?,
        None => Tables::basic(),
    };
    tables.mode = if args.table { Mode::Table } else { Mode::ExpectedValue };
    let ctx = Context {
        tables,
        rules: Rules {
            triple_seven: args.triple7,
        },
        cache: if args.persist { Cache::load() } else { Cache::default() },
    };

    let mut money = 0.0;
    let mut bet = 0.0;
    let mut hands = 0;
    let mut raised = 0;
    let mut drawdown: Utility = 0.0;
    let mut peak: Utility = 0.0;
    for g in 0..args.games {
        let mut game = Game::new(args.decks, args.penetration);
        game.play(&ctx);
        money += game.money();
        bet += game.bet();
        hands += game.hands();
        raised += game.raised();
        drawdown = drawdown.min(money);
        peak = peak.max(money);
        log::info!(
            "WIN for game no. {}: {:+.2} ({:.2} bet) ({:+.2} accumulated) ({} raised bets)",
            g + 1,
            game.money(),
            game.bet(),
            money,
            raised
        );
    }

    log::info!(
        "{} hands overall, {:.2} hands per game on average",
        hands,
        hands as f64 / args.games as f64
    );
    log::info!("{:.2} total bet", bet);
    log::info!(
        "overall winnings {:+.2} (edge = {:.3} %)",
        money,
        100.0 * money / bet
    );
    log::info!("{:.2} max drawdown", drawdown);
    log::info!("{:.2} max win", peak);
    log::info!("{} chance distributions cached", ctx.cache.len());

    if args.persist {
        ctx.cache.save();
    }
    Ok(())
}
