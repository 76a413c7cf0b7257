use super::color::Color;
use super::outcome::Outcome;
use crate::error::Error;
use crate::Money;
use crate::Probability;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// the probability law and payout function for one round of the Color Game.
///
/// fair and tweaked are two validated configurations of the same data, not a
/// type hierarchy. both are fixed at construction and read-only afterwards; a
/// tweaked model differs from fair only in its weights and payout scale,
/// never in arity or alphabet size.
#[derive(Debug, Clone)]
pub struct Model {
    weights: Vec<Probability>,
    schedule: Vec<Money>,
    scale: Money,
    sampler: WeightedIndex<Probability>,
}

impl Model {
    /// the fair game: uniform weights, match count as payout multiplier.
    pub fn fair(n: usize, arity: usize) -> Result<Self, Error> {
        let weights = vec![1. / n as Probability; n];
        let schedule = (0..=arity).map(|m| m as Money).collect();
        Self::new(weights, schedule, 1.0)
    }

    /// the house game: one color drawn more often, every win paid less.
    ///
    /// the house color takes `weight` and the removed mass is redistributed
    /// proportionally across the other colors, which from the uniform fair
    /// base means an equal split of `(1 - weight) / (n - 1)`. this is the
    /// only redistribution scheme; anything else would be a new constructor.
    pub fn tweaked(
        n: usize,
        arity: usize,
        house: Color,
        weight: Probability,
        scale: Money,
    ) -> Result<Self, Error> {
        if n < 2 {
            return Err(Error::Configuration(format!(
                "tweaked model needs at least 2 colors, got {}",
                n
            )));
        }
        if usize::from(house) >= n {
            return Err(Error::Configuration(format!(
                "house color {} outside alphabet of {}",
                house.name(),
                n
            )));
        }
        if weight <= 1. / n as Probability || weight >= 1. {
            return Err(Error::Configuration(format!(
                "house weight {} outside (1/{}, 1)",
                weight, n
            )));
        }
        let other = (1. - weight) / (n - 1) as Probability;
        let weights = Color::all(n)
            .map(|c| if c == house { weight } else { other })
            .collect();
        let schedule = (0..=arity).map(|m| m as Money).collect();
        Self::new(weights, schedule, scale)
    }

    /// shared validation for every configuration. arity is implied by the
    /// schedule, which must be total over match counts 0..=arity.
    pub fn new(
        weights: Vec<Probability>,
        schedule: Vec<Money>,
        scale: Money,
    ) -> Result<Self, Error> {
        if weights.is_empty() {
            return Err(Error::Configuration("empty alphabet".to_string()));
        }
        if weights.len() > u8::MAX as usize + 1 {
            return Err(Error::Configuration(format!(
                "alphabet of {} exceeds the symbol space",
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.) {
            return Err(Error::Configuration(format!(
                "negative or non-finite weight in {:?}",
                weights
            )));
        }
        let mass = weights.iter().sum::<Probability>();
        if (mass - 1.).abs() > crate::TOLERANCE {
            return Err(Error::Configuration(format!(
                "weights sum to {}, not 1",
                mass
            )));
        }
        if schedule.is_empty() {
            return Err(Error::Configuration(
                "payout schedule must cover match count 0".to_string(),
            ));
        }
        if schedule.iter().any(|x| !x.is_finite() || *x < 0.) {
            return Err(Error::Configuration(format!(
                "negative or non-finite payout multiplier in {:?}",
                schedule
            )));
        }
        if scale <= 0. || scale > 1. {
            return Err(Error::Configuration(format!(
                "payout scale {} outside (0, 1]",
                scale
            )));
        }
        let sampler = WeightedIndex::new(&weights)
            .map_err(|e| Error::Configuration(format!("unsampleable weights: {}", e)))?;
        Ok(Self {
            weights,
            schedule,
            scale,
            sampler,
        })
    }

    /// roll the dice: arity independent draws from the weighted alphabet.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Outcome {
        (0..self.arity())
            .map(|_| Color::from(self.sampler.sample(rng) as u8))
            .collect::<Vec<_>>()
            .into()
    }

    /// net payout for a stake with the given match count. zero matches lose
    /// the entire stake regardless of the schedule; wins pay the scheduled
    /// multiple of the stake, scaled down by the house's payout scale.
    pub fn payout(&self, stake: Money, matches: usize) -> Money {
        match matches {
            0 => -stake,
            m => stake * self.schedule[m] * self.scale,
        }
    }

    /// closed-form expected value per unit stake on the given color.
    pub fn expected_value(&self, color: Color) -> Money {
        let arity = self.arity();
        let p = self.chance(color);
        (0..=arity)
            .map(|m| binomial(arity, m) * p.powi(m as i32) * (1. - p).powi((arity - m) as i32))
            .enumerate()
            .map(|(m, mass)| mass * self.payout(1., m))
            .sum()
    }

    /// the model's highest-probability color, ties broken by index order.
    pub fn favorite(&self) -> Color {
        Color::all(self.alphabet())
            .max_by(|a, b| {
                self.chance(*a)
                    .partial_cmp(&self.chance(*b))
                    .expect("weights are finite")
            })
            .expect("alphabet is non-empty")
    }

    pub fn chance(&self, color: Color) -> Probability {
        self.weights[usize::from(color)]
    }
    pub fn alphabet(&self) -> usize {
        self.weights.len()
    }
    pub fn arity(&self) -> usize {
        self.schedule.len() - 1
    }
}

/// n choose k, as a float to flow into probability mass.
fn binomial(n: usize, k: usize) -> f64 {
    (0..k).fold(1., |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn fair_is_uniform() {
        let model = Model::fair(6, 3).unwrap();
        for color in Color::all(6) {
            assert!((model.chance(color) - 1. / 6.).abs() < crate::TOLERANCE);
        }
    }

    #[test]
    fn rejects_unnormalized_weights() {
        assert!(Model::new(vec![0.5, 0.4], vec![0., 1.], 1.0).is_err());
    }

    #[test]
    fn rejects_negative_weights() {
        assert!(Model::new(vec![1.5, -0.5], vec![0., 1.], 1.0).is_err());
    }

    #[test]
    fn rejects_out_of_range_scale() {
        assert!(Model::new(vec![0.5, 0.5], vec![0., 1.], 0.0).is_err());
        assert!(Model::new(vec![0.5, 0.5], vec![0., 1.], 1.5).is_err());
    }

    #[test]
    fn rejects_out_of_range_house_weight() {
        assert!(Model::tweaked(6, 3, Color::RED, 1. / 6., 0.95).is_err());
        assert!(Model::tweaked(6, 3, Color::RED, 1.0, 0.95).is_err());
    }

    #[test]
    fn tweaked_preserves_normalization() {
        let model = Model::tweaked(6, 3, Color::RED, 0.20, 0.95).unwrap();
        let mass = Color::all(6).map(|c| model.chance(c)).sum::<f64>();
        assert!((mass - 1.).abs() < crate::TOLERANCE);
        assert!((model.chance(Color::RED) - 0.20).abs() < crate::TOLERANCE);
        assert!((model.chance(Color::BLUE) - 0.16).abs() < crate::TOLERANCE);
    }

    #[test]
    fn zero_matches_lose_stake() {
        let model = Model::fair(6, 3).unwrap();
        assert!(model.payout(10., 0) == -10.);
        assert!(model.payout(10., 2) == 20.);
    }

    #[test]
    fn fair_expected_value_closed_form() {
        // fair 6/3: EV per unit stake is -17/216 = -0.0787
        let model = Model::fair(6, 3).unwrap();
        let ev = model.expected_value(Color::RED);
        assert!((ev - (-17. / 216.)).abs() < 1e-12);
    }

    #[test]
    fn house_edge_does_not_decrease() {
        // non-favored bet color against scaled payouts: EV can only drop
        let fair = Model::fair(6, 3).unwrap();
        let tweaked = Model::tweaked(6, 3, Color::RED, 0.20, 0.95).unwrap();
        assert!(tweaked.expected_value(Color::BLUE) <= fair.expected_value(Color::BLUE));
    }

    #[test]
    fn favorite_is_house_color() {
        let model = Model::tweaked(6, 3, Color::GREEN, 0.20, 0.95).unwrap();
        assert!(model.favorite() == Color::GREEN);
    }

    #[test]
    fn empirical_match_distribution() {
        // fair 6/3 betting one fixed color: P(m) = C(3,m) (1/6)^m (5/6)^(3-m)
        let model = Model::fair(6, 3).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(2024);
        let rounds = 100_000;
        let mut counts = [0usize; 4];
        let mut net = 0.;
        for _ in 0..rounds {
            let matches = model.draw(rng).matches(Color::RED);
            counts[matches] += 1;
            net += model.payout(1., matches);
        }
        let expected = [0.5787, 0.3472, 0.0694, 0.0046];
        for (count, want) in counts.iter().zip(expected.iter()) {
            let have = *count as f64 / rounds as f64;
            assert!((have - want).abs() < 0.01);
        }
        assert!((net / rounds as f64 - (-0.0787)).abs() < 0.01);
    }

    #[test]
    fn draws_are_reproducible() {
        let model = Model::fair(6, 3).unwrap();
        let a = model.draw(&mut SmallRng::seed_from_u64(42));
        let b = model.draw(&mut SmallRng::seed_from_u64(42));
        assert!(a == b);
        assert!(a.arity() == 3);
    }
}
