//! Rock-Paper-Scissors against a computer that studies your habits.
//!
//! The computer does not play one fixed policy. Each round it rolls a weighted
//! die over five strategies and answers with that strategy's pick: two of them
//! exploit your usage counts, one mirrors your previous throw, one is uniform
//! noise, and one cheats outright. The [game] module holds the move/outcome
//! model and the per-session bookkeeping, [strategy] the five policies and
//! their selection bands, and [play] the round dispatcher plus the interactive
//! terminal table.

pub mod game;
pub mod play;
pub mod strategy;

/// Monotone tallies: per-symbol usage counts and session win/loss/tie totals.
pub type Count = u32;

/// Initialize dual logging: INFO and above to the terminal, DEBUG and above
/// to a timestamped file under `logs/`. Called once at binary startup.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock after 1970")
        .as_secs();
    std::fs::create_dir_all("logs").expect("create logs directory");
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", stamp)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
