/// upper tail probability of the standard normal distribution, P(Z > x).
/// Abramowitz & Stegun 26.2.17 rational approximation, good to ~1e-7,
/// which is far below the resolution any Monte Carlo p-value needs.
pub fn upper_tail(x: f64) -> f64 {
    if x < 0. {
        return 1. - upper_tail(-x);
    }
    if x > 8. {
        return 0.;
    }
    let t = 1. / (1. + 0.2316419 * x);
    let poly = t
        * (0.319381530
            + t * (-0.356563782 + t * (1.781477937 + t * (-1.821255978 + t * 1.330274429))));
    let pdf = (-0.5 * x * x).exp() / (2. * std::f64::consts::PI).sqrt();
    pdf * poly
}
