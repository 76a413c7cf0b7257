use super::ranksum::RankSum;
use super::summary::Summary;
use super::welch::Welch;
use crate::error::Error;
use crate::sim::Session;
use crate::Money;
use colored::Colorize;
use serde::Serialize;

/// the analyzer's verdict on two named populations of sessions: per-set
/// descriptive statistics plus both two-sample tests of the difference in
/// net profit. constructed once, read-only, rendered via Display.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub baseline: Summary,
    pub variant: Summary,
    pub welch: Welch,
    pub ranksum: RankSum,
    pub alpha: f64,
}

impl Comparison {
    /// two-sample tests need at least 2 sessions per set; smaller sets fail
    /// here with the set's name rather than producing a meaningless number.
    pub fn between(
        baseline: (&str, &[Session]),
        variant: (&str, &[Session]),
        alpha: f64,
    ) -> Result<Self, Error> {
        for (set, sessions) in [&baseline, &variant] {
            if sessions.len() < 2 {
                return Err(Error::InsufficientData {
                    set: set.to_string(),
                    have: sessions.len(),
                    need: 2,
                });
            }
        }
        let x = baseline.1.iter().map(Session::profit).collect::<Vec<_>>();
        let y = variant.1.iter().map(Session::profit).collect::<Vec<_>>();
        Ok(Self {
            baseline: Summary::measure(baseline.0, baseline.1)?,
            variant: Summary::measure(variant.0, variant.1)?,
            welch: Welch::test(&x, &y),
            ranksum: RankSum::test(&x, &y),
            alpha,
        })
    }

    /// statistically significant difference in mean profit at alpha.
    pub fn significant(&self) -> bool {
        self.welch.p < self.alpha
    }

    /// how much more of the handle the variant keeps for the house.
    pub fn edge_shift(&self) -> Money {
        self.variant.house_edge - self.baseline.house_edge
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rule = "-".repeat(72);
        let (a, b) = (&self.baseline, &self.variant);
        writeln!(f, "{}", "=".repeat(72))?;
        writeln!(
            f,
            "{}",
            format!("COLOR GAME ANALYSIS: {} vs {}", a.set, b.set).bold()
        )?;
        writeln!(f, "{}", "=".repeat(72))?;
        writeln!(f, "{:<28} {:>20} {:>20}", "metric", a.set, b.set)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:<28} {:>20} {:>20}", "sessions", a.n, b.n)?;
        for (label, left, right) in [
            ("mean profit", a.mean, b.mean),
            ("median profit", a.median, b.median),
            ("std dev profit", a.stdev, b.stdev),
            ("min profit", a.min, b.min),
            ("max profit", a.max, b.max),
            ("5th pctile profit", a.p05, b.p05),
            ("95th pctile profit", a.p95, b.p95),
            ("mean house profit", a.house_mean, b.house_mean),
            ("mean wagered", a.mean_wagered, b.mean_wagered),
            ("mean rounds played", a.mean_rounds, b.mean_rounds),
        ] {
            writeln!(f, "{:<28} {:>20.2} {:>20.2}", label, left, right)?;
        }
        for (label, left, right) in [
            ("win rate", a.win_rate, b.win_rate),
            ("bankruptcy rate", a.ruin_rate, b.ruin_rate),
            ("mean roi", a.mean_roi, b.mean_roi),
            ("house edge", a.house_edge, b.house_edge),
        ] {
            writeln!(
                f,
                "{:<28} {:>19.2}% {:>19.2}%",
                label,
                left * 100.,
                right * 100.
            )?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "house edge shift: {}",
            format!("{:+.4}%", self.edge_shift() * 100.).bold()
        )?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "welch t-test:        t = {:>10.4}  df = {:>10.1}  p = {:.6}  [{}]",
            self.welch.t,
            self.welch.df,
            self.welch.p,
            verdict(self.welch.p < self.alpha)
        )?;
        writeln!(
            f,
            "mann-whitney u-test: u = {:>10.1}  z  = {:>10.4}  p = {:.6}  [{}]",
            self.ranksum.u,
            self.ranksum.z,
            self.ranksum.p,
            verdict(self.ranksum.p < self.alpha)
        )?;
        writeln!(f, "{}", rule)?;
        match self.significant() {
            true => writeln!(
                f,
                "{}",
                format!(
                    "difference in mean profit is significant at alpha = {}",
                    self.alpha
                )
                .green()
            ),
            false => writeln!(
                f,
                "{}",
                format!(
                    "no significant difference in mean profit at alpha = {}",
                    self.alpha
                )
                .yellow()
            ),
        }
    }
}

fn verdict(significant: bool) -> colored::ColoredString {
    match significant {
        true => "significant".green(),
        false => "not significant".yellow(),
    }
}
