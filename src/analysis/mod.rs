pub mod comparison;
pub use comparison::*;

pub mod gaussian;
pub use gaussian::*;

pub mod ranksum;
pub use ranksum::*;

pub mod summary;
pub use summary::*;

pub mod welch;
pub use welch::*;
