use super::policy::Policy;
use super::round::Round;
use super::round::Settlement;
use crate::error::Error;
use crate::game::Model;
use crate::Money;
use rand::Rng;
use serde::Serialize;

/// one simulated run of betting rounds from a fixed starting bankroll.
/// owned by the engine run that produced it; immutable once complete.
///
/// ruin is data, not an error: a session that runs out of money stops early,
/// records how far it got, and flags itself, so the analyzer can report
/// bankruptcy rates separately from full runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: usize,
    pub initial: Money,
    pub bankroll: Money,
    pub rounds_played: usize,
    pub ruin: bool,
    pub wins: usize,
    pub losses: usize,
    pub wagered: Money,
    /// full round-level detail, retained only on request since it is
    /// O(sessions x rounds) to keep.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub history: Vec<Round>,
}

impl Session {
    /// play out a session: up to `rounds` rounds of policy stakes against the
    /// model, stopping early if the bankroll reaches zero. `rounds == 0` is
    /// valid and returns the initial bankroll untouched.
    pub fn play<R: Rng>(
        id: usize,
        model: &Model,
        policy: &Policy,
        rounds: usize,
        initial: Money,
        retain: bool,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut this = Self {
            id,
            initial,
            bankroll: initial,
            rounds_played: 0,
            ruin: false,
            wins: 0,
            losses: 0,
            wagered: 0.,
            history: Vec::new(),
        };
        for index in 0..rounds {
            let stakes = policy.stakes(index, this.bankroll, model, rng);
            stakes.validate(this.bankroll).map_err(|reason| {
                Error::InvalidBet {
                    session: id,
                    round: index,
                    reason,
                }
            })?;
            let outcome = model.draw(rng);
            let settlements = stakes
                .placed()
                .map(|(color, stake)| Settlement {
                    color,
                    stake,
                    matches: outcome.matches(color),
                    net: model.payout(stake, outcome.matches(color)),
                })
                .collect::<Vec<_>>();
            let delta = settlements.iter().map(|s| s.net).sum::<Money>();
            this.bankroll += delta;
            this.wagered += stakes.total();
            this.rounds_played += 1;
            match delta {
                d if d > 0. => this.wins += 1,
                d if d < 0. => this.losses += 1,
                _ => {}
            }
            if retain {
                this.history.push(Round {
                    index,
                    outcome,
                    settlements,
                    delta,
                    bankroll: this.bankroll,
                });
            }
            if this.bankroll <= 0. {
                this.ruin = true;
                break;
            }
        }
        Ok(this)
    }

    /// player's net over the session.
    pub fn profit(&self) -> Money {
        self.bankroll - self.initial
    }
    /// house's net over the session.
    pub fn house(&self) -> Money {
        -self.profit()
    }
    /// net profit as a fraction of the starting bankroll.
    pub fn roi(&self) -> Money {
        self.profit() / self.initial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Color;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn fair() -> Model {
        Model::fair(6, 3).unwrap()
    }

    #[test]
    fn zero_rounds_is_trivial() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let policy = Policy::Random { bet: 10. };
        let session = Session::play(0, &fair(), &policy, 0, 1000., false, rng).unwrap();
        assert!(session.rounds_played == 0);
        assert!(session.profit() == 0.);
        assert!(!session.ruin);
    }

    #[test]
    fn ruin_on_guaranteed_first_round_loss() {
        // dice that only ever land red, player who only ever bets blue:
        // a bankroll no larger than one bet busts on round 0
        let model = Model::new(vec![1., 0., 0., 0., 0., 0.], vec![0., 1., 2., 3.], 1.0).unwrap();
        let policy = Policy::Fixed {
            color: Color::BLUE,
            bet: 10.,
        };
        let ref mut rng = SmallRng::seed_from_u64(0);
        let session = Session::play(0, &model, &policy, 100, 10., false, rng).unwrap();
        assert!(session.rounds_played == 1);
        assert!(session.ruin);
        assert!(session.bankroll == 0.);
    }

    #[test]
    fn conservation_of_money() {
        // player's loss is exactly the house's profit
        let ref mut rng = SmallRng::seed_from_u64(3);
        let policy = Policy::Fixed {
            color: Color::RED,
            bet: 10.,
        };
        let session = Session::play(0, &fair(), &policy, 200, 1000., true, rng).unwrap();
        let total = session
            .history
            .iter()
            .map(|round| round.delta)
            .sum::<Money>();
        assert!((session.profit() - total).abs() < 1e-9);
        assert!((session.house() + session.profit()).abs() < 1e-9);
    }

    #[test]
    fn history_retained_only_on_request() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let policy = Policy::Random { bet: 10. };
        let spare = Session::play(0, &fair(), &policy, 50, 1000., false, rng).unwrap();
        assert!(spare.history.is_empty());
        let ref mut rng = SmallRng::seed_from_u64(1);
        let full = Session::play(0, &fair(), &policy, 50, 1000., true, rng).unwrap();
        assert!(full.history.len() == full.rounds_played);
        assert!(full.profit() == spare.profit());
    }

    #[test]
    fn wins_and_losses_partition_rounds() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let policy = Policy::Random { bet: 10. };
        let session = Session::play(0, &fair(), &policy, 100, 10_000., false, rng).unwrap();
        assert!(session.wins + session.losses == session.rounds_played);
    }

    #[test]
    fn invalid_bet_carries_context() {
        let stakes = crate::sim::Stakes::from(vec![-1., 0., 0., 0., 0., 0.]);
        let error = stakes.validate(100.).map_err(|reason| Error::InvalidBet {
            session: 4,
            round: 7,
            reason,
        });
        match error {
            Err(Error::InvalidBet { session, round, .. }) => {
                assert!(session == 4);
                assert!(round == 7);
            }
            _ => panic!("expected invalid bet"),
        }
    }
}
