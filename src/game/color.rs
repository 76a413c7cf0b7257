use crate::Arbitrary;
use colored::Colorize;
use serde::Serialize;

/// one face of a Color Game die.
///
/// the canonical perya alphabet is six colors, but the index representation
/// lets an experiment shrink or grow the alphabet without touching the model.
/// alphabet size lives on the Model; a Color is just a symbol in it.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Color(u8);

impl Color {
    pub const RED: Self = Self(0);
    pub const BLUE: Self = Self(1);
    pub const YELLOW: Self = Self(2);
    pub const WHITE: Self = Self(3);
    pub const GREEN: Self = Self(4);
    pub const PINK: Self = Self(5);

    /// every color in an alphabet of the given size, in index order.
    pub fn all(n: usize) -> impl Iterator<Item = Self> {
        (0..n as u8).map(Self)
    }

    pub fn name(&self) -> String {
        match self.0 {
            0 => "Red".to_string(),
            1 => "Blue".to_string(),
            2 => "Yellow".to_string(),
            3 => "White".to_string(),
            4 => "Green".to_string(),
            5 => "Pink".to_string(),
            n => format!("Color{}", n),
        }
    }
}

impl From<u8> for Color {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Color> for u8 {
    fn from(c: Color) -> u8 {
        c.0
    }
}
impl From<Color> for usize {
    fn from(c: Color) -> usize {
        c.0 as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = self.name();
        write!(
            f,
            "{}",
            match self.0 {
                0 => name.red(),
                1 => name.blue(),
                2 => name.yellow(),
                3 => name.white(),
                4 => name.green(),
                5 => name.magenta(),
                _ => name.normal(),
            }
        )
    }
}

impl Arbitrary for Color {
    fn random() -> Self {
        use rand::Rng;
        Self(rand::rng().random_range(0..crate::ALPHABET as u8))
    }
}
