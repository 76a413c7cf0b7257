pub mod color;
pub use color::*;

pub mod outcome;
pub use outcome::*;

pub mod model;
pub use model::*;
