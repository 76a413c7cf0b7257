use crate::error::Error;
use crate::sim::Session;
use crate::Money;
use crate::Probability;
use serde::Serialize;

/// descriptive statistics over one named set of sessions. everything is
/// accumulated in a single pass except the profit quantiles, which need the
/// sorted sample. the input records are never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub set: String,
    pub n: usize,
    /// net profit moments and extremes, per session.
    pub mean: Money,
    pub median: Money,
    pub stdev: Money,
    pub min: Money,
    pub max: Money,
    /// profit quantiles.
    pub p05: Money,
    pub p25: Money,
    pub p75: Money,
    pub p95: Money,
    /// fraction of sessions ending with positive net profit.
    pub win_rate: Probability,
    /// fraction of sessions that went bust before finishing.
    pub ruin_rate: Probability,
    pub mean_rounds: f64,
    pub mean_wagered: Money,
    pub mean_roi: Money,
    /// house's mean and total take across the set.
    pub house_mean: Money,
    pub house_total: Money,
    /// empirical house edge: total house profit over total amount wagered.
    /// this is the total-wagered form, which stays correct when bet size
    /// varies per round (stakes are capped by bankroll near ruin).
    pub house_edge: Money,
}

impl Summary {
    pub fn measure(set: &str, sessions: &[Session]) -> Result<Self, Error> {
        if sessions.is_empty() {
            return Err(Error::InsufficientData {
                set: set.to_string(),
                have: 0,
                need: 1,
            });
        }
        let n = sessions.len();
        let mut profits = sessions.iter().map(Session::profit).collect::<Vec<_>>();
        profits.sort_by(|a, b| a.partial_cmp(b).expect("profits are finite"));
        let sum = profits.iter().sum::<Money>();
        let mean = sum / n as Money;
        let sumsq = profits.iter().map(|x| (x - mean) * (x - mean)).sum::<Money>();
        let stdev = match n {
            1 => 0.,
            n => (sumsq / (n - 1) as Money).sqrt(),
        };
        let wagered = sessions.iter().map(|s| s.wagered).sum::<Money>();
        let house_total = sessions.iter().map(Session::house).sum::<Money>();
        Ok(Self {
            set: set.to_string(),
            n,
            mean,
            median: quantile(&profits, 0.50),
            stdev,
            min: profits[0],
            max: profits[n - 1],
            p05: quantile(&profits, 0.05),
            p25: quantile(&profits, 0.25),
            p75: quantile(&profits, 0.75),
            p95: quantile(&profits, 0.95),
            win_rate: sessions.iter().filter(|s| s.profit() > 0.).count() as f64 / n as f64,
            ruin_rate: sessions.iter().filter(|s| s.ruin).count() as f64 / n as f64,
            mean_rounds: sessions.iter().map(|s| s.rounds_played).sum::<usize>() as f64 / n as f64,
            mean_wagered: wagered / n as Money,
            mean_roi: sessions.iter().map(Session::roi).sum::<Money>() / n as Money,
            house_mean: house_total / n as Money,
            house_total,
            house_edge: match wagered {
                w if w > 0. => house_total / w,
                _ => 0.,
            },
        })
    }
}

/// linearly interpolated quantile of a sorted sample.
fn quantile(sorted: &[Money], q: f64) -> Money {
    let position = q * (sorted.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (position - lo as f64)
}
