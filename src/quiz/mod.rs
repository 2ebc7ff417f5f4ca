pub mod roster;
pub use roster::*;

pub mod round;
pub use round::*;

pub mod score;
pub use score::*;
