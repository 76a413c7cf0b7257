use crate::game::Color;
use crate::game::Model;
use crate::Money;
use rand::Rng;

/// the closed set of built-in betting policies. all are stateless: a pure
/// function of (round index, bankroll, model) plus the session's rng for the
/// random variant. dispatch happens once at configuration time, not by string
/// comparison in the hot loop.
///
/// built-ins stake `min(bet, bankroll)` on a single color, so the total-stake
/// invariant holds by construction and depletion exits through ruin rather
/// than through an invalid bet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Policy {
    /// a uniformly random color every round.
    Random { bet: Money },
    /// the same color every round.
    Fixed { color: Color, bet: Money },
    /// the model's highest-probability color.
    Favorite { bet: Money },
}

impl Policy {
    pub fn stakes<R: Rng>(
        &self,
        _round: usize,
        bankroll: Money,
        model: &Model,
        rng: &mut R,
    ) -> Stakes {
        let (color, bet) = match self {
            Self::Random { bet } => (
                Color::from(rng.random_range(0..model.alphabet() as u8)),
                *bet,
            ),
            Self::Fixed { color, bet } => (*color, *bet),
            Self::Favorite { bet } => (model.favorite(), *bet),
        };
        Stakes::single(model.alphabet(), color, bet.min(bankroll))
    }
}

/// non-negative stakes per color for one round. the session runner rejects
/// any stakes violating the policy contract before drawing an outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Stakes(Vec<Money>);

impl Stakes {
    /// everything on one color.
    pub fn single(n: usize, color: Color, amount: Money) -> Self {
        let mut stakes = vec![0.; n];
        stakes[usize::from(color)] = amount;
        Self(stakes)
    }

    pub fn total(&self) -> Money {
        self.0.iter().sum()
    }

    /// the staked colors, zeros omitted.
    pub fn placed(&self) -> impl Iterator<Item = (Color, Money)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, stake)| **stake > 0.)
            .map(|(i, stake)| (Color::from(i as u8), *stake))
    }

    /// the policy contract: no negative stakes, total within bankroll.
    pub fn validate(&self, bankroll: Money) -> Result<(), String> {
        if let Some((color, stake)) = self
            .0
            .iter()
            .enumerate()
            .find(|(_, stake)| !stake.is_finite() || **stake < 0.)
        {
            return Err(format!(
                "stake {} on {} is negative or non-finite",
                stake,
                Color::from(color as u8).name()
            ));
        }
        if self.total() > bankroll {
            return Err(format!(
                "total stake {} exceeds bankroll {}",
                self.total(),
                bankroll
            ));
        }
        Ok(())
    }
}

impl From<Vec<Money>> for Stakes {
    fn from(stakes: Vec<Money>) -> Self {
        Self(stakes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn fixed_always_same_color() {
        let model = Model::fair(6, 3).unwrap();
        let policy = Policy::Fixed {
            color: Color::PINK,
            bet: 10.,
        };
        let ref mut rng = SmallRng::seed_from_u64(0);
        for round in 0..10 {
            let stakes = policy.stakes(round, 1000., &model, rng);
            let placed = stakes.placed().collect::<Vec<_>>();
            assert!(placed == vec![(Color::PINK, 10.)]);
        }
    }

    #[test]
    fn favorite_follows_house_color() {
        let model = Model::tweaked(6, 3, Color::WHITE, 0.20, 0.95).unwrap();
        let policy = Policy::Favorite { bet: 5. };
        let ref mut rng = SmallRng::seed_from_u64(0);
        let stakes = policy.stakes(0, 1000., &model, rng);
        assert!(stakes.placed().collect::<Vec<_>>() == vec![(Color::WHITE, 5.)]);
    }

    #[test]
    fn random_stays_in_alphabet() {
        let model = Model::fair(4, 3).unwrap();
        let policy = Policy::Random { bet: 1. };
        let ref mut rng = SmallRng::seed_from_u64(7);
        for round in 0..100 {
            let stakes = policy.stakes(round, 1000., &model, rng);
            let (color, _) = stakes.placed().next().unwrap();
            assert!(usize::from(color) < 4);
        }
    }

    #[test]
    fn bet_capped_at_bankroll() {
        let model = Model::fair(6, 3).unwrap();
        let policy = Policy::Fixed {
            color: Color::RED,
            bet: 10.,
        };
        let ref mut rng = SmallRng::seed_from_u64(0);
        let stakes = policy.stakes(0, 4., &model, rng);
        assert!(stakes.total() == 4.);
        assert!(stakes.validate(4.).is_ok());
    }

    #[test]
    fn rejects_negative_stake() {
        let stakes = Stakes::from(vec![10., -1., 0.]);
        assert!(stakes.validate(100.).is_err());
    }

    #[test]
    fn rejects_overbet() {
        let stakes = Stakes::from(vec![60., 50., 0.]);
        assert!(stakes.validate(100.).is_err());
        assert!(stakes.validate(110.).is_ok());
    }
}
