pub mod coach;
pub use coach::*;

pub mod context;
pub use context::*;

pub mod fallback;
pub use fallback::*;

pub mod openai;
pub use openai::*;

pub mod prompt;

pub mod truncate;
pub use truncate::*;
