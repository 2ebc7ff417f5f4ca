pub mod action;
pub use action::*;

pub mod opponent;
pub use opponent::*;

pub mod table;
pub use table::*;

pub mod verdict;
pub use verdict::*;
