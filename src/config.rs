use crate::error::Error;
use crate::game::Color;
use crate::game::Model;
use crate::sim::Engine;
use crate::sim::Policy;
use crate::Money;
use crate::Probability;
use clap::Parser;
use clap::ValueEnum;

/// the full configuration surface of one fair-vs-tweaked experiment.
/// doubles as the CLI argument parser; library callers can construct it
/// directly. validation of the probability law and tuning parameters lives
/// in the Model constructors, so the same checks guard every entry point.
#[derive(Debug, Clone, Parser)]
#[command(name = "perya", about = "Monte Carlo analysis of the perya Color Game")]
pub struct Experiment {
    /// number of colors on each die
    #[arg(long, default_value_t = crate::ALPHABET)]
    pub alphabet_size: usize,
    /// number of dice thrown per round
    #[arg(long, default_value_t = crate::ARITY)]
    pub draw_arity: usize,
    /// color index favored by the tweaked dice
    #[arg(long, default_value_t = 0)]
    pub house_color: u8,
    /// tweaked probability of the house color, in (1/alphabet, 1)
    #[arg(long, default_value_t = crate::HOUSE_WEIGHT)]
    pub house_weight: Probability,
    /// tweaked multiplier on every positive payout, in (0, 1]
    #[arg(long, default_value_t = crate::PAYOUT_SCALE)]
    pub payout_scale: Money,
    /// independent sessions per configuration
    #[arg(long, default_value_t = 10_000)]
    pub num_sessions: usize,
    /// betting rounds per session
    #[arg(long, default_value_t = 100)]
    pub rounds_per_session: usize,
    /// starting bankroll per session
    #[arg(long, default_value_t = 1_000.)]
    pub initial_bankroll: Money,
    /// stake per round
    #[arg(long, default_value_t = 10.)]
    pub bet_amount: Money,
    /// how the simulated player picks a color
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    pub strategy: Strategy,
    /// color index for the fixed strategy
    #[arg(long, default_value_t = 0)]
    pub bet_color: u8,
    /// rng seed; omit for a non-reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
    /// alpha for the hypothesis tests
    #[arg(long, default_value_t = 0.05)]
    pub significance_level: f64,
    /// retain full round-level history on every session
    #[arg(long)]
    pub detail: bool,
    /// write session records as JSON to this path
    #[arg(long)]
    pub export: Option<std::path::PathBuf>,
}

/// the closed set of built-in strategies, resolved to a Policy once at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// a uniformly random color every round
    Random,
    /// the same color every round
    Fixed,
    /// the model's highest-probability color
    Favorite,
}

impl Experiment {
    /// parameter checks the model constructors cannot see.
    pub fn check(&self) -> Result<(), Error> {
        if self.alphabet_size == 0 || self.alphabet_size > u8::MAX as usize {
            return Err(Error::Configuration(format!(
                "alphabet size {} outside 1..={}",
                self.alphabet_size,
                u8::MAX
            )));
        }
        if self.strategy == Strategy::Fixed && self.bet_color as usize >= self.alphabet_size {
            return Err(Error::Configuration(format!(
                "bet color {} outside alphabet of {}",
                self.bet_color, self.alphabet_size
            )));
        }
        if self.bet_amount <= 0. || !self.bet_amount.is_finite() {
            return Err(Error::Configuration(format!(
                "bet amount {} must be positive",
                self.bet_amount
            )));
        }
        if self.initial_bankroll <= 0. || !self.initial_bankroll.is_finite() {
            return Err(Error::Configuration(format!(
                "initial bankroll {} must be positive",
                self.initial_bankroll
            )));
        }
        if !(0. ..1.).contains(&self.significance_level) {
            return Err(Error::Configuration(format!(
                "significance level {} outside [0, 1)",
                self.significance_level
            )));
        }
        Ok(())
    }

    pub fn fair(&self) -> Result<Model, Error> {
        Model::fair(self.alphabet_size, self.draw_arity)
    }

    pub fn tweaked(&self) -> Result<Model, Error> {
        Model::tweaked(
            self.alphabet_size,
            self.draw_arity,
            Color::from(self.house_color),
            self.house_weight,
            self.payout_scale,
        )
    }

    pub fn policy(&self) -> Policy {
        match self.strategy {
            Strategy::Random => Policy::Random {
                bet: self.bet_amount,
            },
            Strategy::Fixed => Policy::Fixed {
                color: Color::from(self.bet_color),
                bet: self.bet_amount,
            },
            Strategy::Favorite => Policy::Favorite {
                bet: self.bet_amount,
            },
        }
    }

    /// an engine for one configuration. `stream` offsets the seed so the
    /// fair and tweaked populations never share random streams.
    pub fn engine(&self, model: Model, stream: u64) -> Engine {
        let engine = Engine::new(
            model,
            self.policy(),
            self.num_sessions,
            self.rounds_per_session,
            self.initial_bankroll,
            self.seed.map(|seed| seed.wrapping_add(stream)),
        );
        match self.detail {
            true => engine.retain(),
            false => engine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experiment() -> Experiment {
        Experiment::parse_from(["perya", "--seed", "42", "--num-sessions", "10"])
    }

    #[test]
    fn defaults_describe_the_canonical_game() {
        let args = experiment();
        assert!(args.alphabet_size == 6);
        assert!(args.draw_arity == 3);
        assert!(args.house_weight == 0.20);
        assert!(args.payout_scale == 0.95);
        assert!(args.check().is_ok());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let mut args = experiment();
        args.bet_amount = 0.;
        assert!(args.check().is_err());
        let mut args = experiment();
        args.significance_level = 1.;
        assert!(args.check().is_err());
    }

    #[test]
    fn strategy_resolves_to_policy() {
        let mut args = experiment();
        args.strategy = Strategy::Fixed;
        args.bet_color = 4;
        let policy = args.policy();
        assert!(
            policy
                == Policy::Fixed {
                    color: Color::GREEN,
                    bet: 10.,
                }
        );
    }

    #[test]
    fn populations_get_distinct_streams() {
        let args = experiment();
        let fair = args.engine(args.fair().unwrap(), 0).run().unwrap();
        let again = args.engine(args.fair().unwrap(), 0).run().unwrap();
        let other = args.engine(args.fair().unwrap(), 1).run().unwrap();
        assert!(fair == again);
        assert!(fair != other);
    }
}
