use super::gaussian::upper_tail;
use serde::Serialize;

/// Mann-Whitney U rank-sum test: the non-parametric counterpart to the
/// t-test, sensitive to any distributional shift rather than just means.
/// p-value via the normal approximation with midranks and tie correction,
/// which is exact enough at Monte Carlo sample sizes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankSum {
    /// U statistic of the first sample.
    pub u: f64,
    /// standardized statistic.
    pub z: f64,
    /// two-tailed p-value.
    pub p: f64,
}

impl RankSum {
    pub fn test(x: &[f64], y: &[f64]) -> Self {
        let (n1, n2) = (x.len() as f64, y.len() as f64);
        let n = n1 + n2;
        let mut pooled = x
            .iter()
            .map(|v| (*v, true))
            .chain(y.iter().map(|v| (*v, false)))
            .collect::<Vec<_>>();
        pooled.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("samples are finite"));
        // midranks: tied observations share the average of their positions
        let mut ranks = vec![0.; pooled.len()];
        let mut ties = 0.;
        let mut i = 0;
        while i < pooled.len() {
            let mut j = i;
            while j < pooled.len() && pooled[j].0 == pooled[i].0 {
                j += 1;
            }
            let rank = (i + 1 + j) as f64 / 2.;
            for slot in ranks.iter_mut().take(j).skip(i) {
                *slot = rank;
            }
            let t = (j - i) as f64;
            ties += t * t * t - t;
            i = j;
        }
        let r1 = pooled
            .iter()
            .zip(ranks.iter())
            .filter(|((_, first), _)| *first)
            .map(|(_, rank)| rank)
            .sum::<f64>();
        let u = r1 - n1 * (n1 + 1.) / 2.;
        let mean = n1 * n2 / 2.;
        let variance = n1 * n2 / 12. * ((n + 1.) - ties / (n * (n - 1.)));
        if variance <= 0. {
            // every observation identical: no evidence of any shift
            return Self { u, z: 0., p: 1. };
        }
        let z = (u - mean) / variance.sqrt();
        Self {
            u,
            z,
            p: (2. * upper_tail(z.abs())).min(1.),
        }
    }
}
