//! Preflop decision quiz.
//!
//! Deals a two-card hand, scores fold / call / raise against an opponent
//! archetype with a closed-form EV heuristic, judges the player's answer
//! and asks an optional language-model coach to explain the verdict.
pub mod cards;
pub mod decision;
pub mod error;
pub mod evaluation;
pub mod quiz;

#[cfg(feature = "server")]
pub mod coaching;
#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "server")]
pub mod settings;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values and payoffs, in big blinds.
pub type Utility = f32;
/// Win rates, fold rates and hand strengths.
pub type Probability = f32;

// ============================================================================
// TABLE SIZING
// All amounts in big blinds, as seen by the hero facing the big blind.
// ============================================================================
/// Dead money already in the pot (small blind + big blind).
pub const POT_SIZE: Utility = 1.5;
/// Cost of calling.
pub const CALL_SIZE: Utility = 1.0;
/// Size of the raise.
pub const RAISE_SIZE: Utility = 3.0;

// ============================================================================
// JUDGE PARAMETERS
// ============================================================================
/// Fold-to-raise rate of a neutral opponent before the hand-weakness shift.
pub const BASE_FOLD_EQUITY: Probability = 0.4;
/// Answers within this many big blinds of the best EV count as correct.
pub const VERDICT_TOLERANCE: Utility = 1e-4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, exiting immediately");
                std::process::exit(0);
            }
            Err(e) => log::error!("cannot listen for interrupt: {}", e),
        }
    });
}
