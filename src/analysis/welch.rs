use super::gaussian::upper_tail;
use serde::Serialize;

/// Welch's unequal-variance two-sample t-test on difference in means.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Welch {
    /// t-statistic, signed as mean(x) - mean(y).
    pub t: f64,
    /// Welch-Satterthwaite degrees of freedom.
    pub df: f64,
    /// two-tailed p-value.
    pub p: f64,
}

impl Welch {
    /// callers guarantee each sample holds at least 2 observations; the
    /// comparison layer turns smaller sets into insufficient-data errors
    /// before ever reaching this.
    pub fn test(x: &[f64], y: &[f64]) -> Self {
        let (n1, n2) = (x.len() as f64, y.len() as f64);
        let (m1, m2) = (mean(x), mean(y));
        let (v1, v2) = (variance(x, m1), variance(y, m2));
        let (se1, se2) = (v1 / n1, v2 / n2);
        let se = se1 + se2;
        if se <= 0. {
            // degenerate: both samples constant. identical means are a
            // perfect null; different means are infinitely separated.
            return match m1 == m2 {
                true => Self {
                    t: 0.,
                    df: n1 + n2 - 2.,
                    p: 1.,
                },
                false => Self {
                    t: (m1 - m2).signum() * f64::INFINITY,
                    df: n1 + n2 - 2.,
                    p: 0.,
                },
            };
        }
        let t = (m1 - m2) / se.sqrt();
        let df = se * se / (se1 * se1 / (n1 - 1.) + se2 * se2 / (n2 - 1.));
        Self {
            t,
            df,
            p: two_tailed(t.abs(), df),
        }
    }
}

/// two-tailed p-value for |t| under the given degrees of freedom. for the
/// session counts this crate runs, df is large and the t-distribution is
/// essentially normal; small df gets a light pull toward the heavier tail.
fn two_tailed(t: f64, df: f64) -> f64 {
    let z = match df {
        df if df > 100. => t,
        df => t * (1. - 0.25 / df.max(1.)),
    };
    (2. * upper_tail(z)).min(1.)
}

fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

fn variance(x: &[f64], mean: f64) -> f64 {
    x.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (x.len() - 1) as f64
}
