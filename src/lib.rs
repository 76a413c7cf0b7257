//! Monte Carlo analysis of the perya Color Game.
//!
//! Three dice, six colors. A player bets on a color and is paid by how many
//! dice land on it. This crate models the game's probability law, simulates
//! many independent betting sessions under a fair configuration and a
//! house-tweaked configuration, and decides whether the difference in player
//! outcomes is statistically significant.

pub mod analysis;
pub mod config;
pub mod error;
pub mod game;
pub mod sim;

pub use error::Error;

/// bankrolls, stakes, and payouts in currency units.
pub type Money = f64;
/// probability mass, rates, and p-values in [0, 1].
pub type Probability = f64;

/// random instance generation for tests and Monte Carlo sampling.
pub trait Arbitrary {
    fn random() -> Self;
}

/// number of colors on each die face in the canonical game.
pub const ALPHABET: usize = 6;
/// number of dice thrown per round.
pub const ARITY: usize = 3;
/// house color frequency in the tweaked configuration (fair would be 1/6).
pub const HOUSE_WEIGHT: Probability = 0.20;
/// multiplier applied to every positive payout in the tweaked configuration.
pub const PAYOUT_SCALE: Money = 0.95;
/// absolute tolerance for probability mass normalization.
pub const TOLERANCE: f64 = 1e-9;

/// initialize terminal logging at INFO level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
