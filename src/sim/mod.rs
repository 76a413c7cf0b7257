pub mod engine;
pub use engine::*;

pub mod policy;
pub use policy::*;

pub mod progress;
pub use progress::*;

pub mod round;
pub use round::*;

pub mod session;
pub use session::*;
