pub mod strength;
pub use strength::*;
