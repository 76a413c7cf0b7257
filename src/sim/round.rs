use crate::game::Color;
use crate::game::Outcome;
use crate::Money;
use colored::Colorize;
use serde::Serialize;

/// one staked color settled against the round's outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    pub color: Color,
    pub stake: Money,
    pub matches: usize,
    /// net change to the bankroll from this stake: negative on a miss,
    /// the scaled scheduled multiple on a hit.
    pub net: Money,
}

/// everything that happened in one round of a session. appended to the
/// session's history when retention is on; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    pub index: usize,
    pub outcome: Outcome,
    pub settlements: Vec<Settlement>,
    /// sum of settlement nets.
    pub delta: Money,
    /// bankroll after this round.
    pub bankroll: Money,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let delta = if self.delta > 0. {
            format!("+{:.2}", self.delta).green()
        } else {
            format!("{:.2}", self.delta).red()
        };
        write!(
            f,
            "{:<4} {}  {:<8} {:>10.2}",
            self.index, self.outcome, delta, self.bankroll
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_sum_of_nets() {
        let round = Round {
            index: 0,
            outcome: Outcome::from(vec![Color::RED, Color::RED, Color::BLUE]),
            settlements: vec![
                Settlement {
                    color: Color::RED,
                    stake: 10.,
                    matches: 2,
                    net: 20.,
                },
                Settlement {
                    color: Color::GREEN,
                    stake: 5.,
                    matches: 0,
                    net: -5.,
                },
            ],
            delta: 15.,
            bankroll: 1015.,
        };
        let total = round.settlements.iter().map(|s| s.net).sum::<Money>();
        assert!(total == round.delta);
    }
}
