pub mod cards;
pub mod odds;
pub mod save;
pub mod strategy;
pub mod table;

pub type Probability = f64;
pub type Utility = f64;

// ============================================================================
// SHOE GEOMETRY
// ============================================================================
/// Cards in a single deck.
pub const DECK_SIZE: usize = 52;
/// Decks in a full shoe.
pub const SHOE_DECKS: usize = 8;
/// Fraction of the shoe left below which a reshuffle is demanded.
pub const SHOE_PENETRATION: Probability = 0.5;

// ============================================================================
// TABLE RULES
// ============================================================================
/// Dealer stands at or above this total.
pub const DEALER_STAND: u8 = 17;
/// Highest non-busted hand total.
pub const BLACKJACK: u8 = 21;
/// Insurance is worth calling once this fraction of the shoe is ten-valued.
pub const INSURANCE_THRESHOLD: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
