use super::color::Color;
use serde::Serialize;

/// the dice faces shown by one round of play.
/// created once per round by Model::draw and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome(Vec<Color>);

impl Outcome {
    /// how many dice landed on the given color.
    pub fn matches(&self, color: Color) -> usize {
        self.0.iter().filter(|c| **c == color).count()
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn draws(&self) -> &[Color] {
        &self.0
    }
}

impl From<Vec<Color>> for Outcome {
    fn from(draws: Vec<Color>) -> Self {
        Self(draws)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_matches() {
        let outcome = Outcome::from(vec![Color::RED, Color::PINK, Color::RED]);
        assert!(outcome.matches(Color::RED) == 2);
        assert!(outcome.matches(Color::PINK) == 1);
        assert!(outcome.matches(Color::BLUE) == 0);
    }

    #[test]
    fn empty_round_is_valid() {
        let outcome = Outcome::from(vec![]);
        assert!(outcome.arity() == 0);
        assert!(outcome.matches(Color::RED) == 0);
    }
}
