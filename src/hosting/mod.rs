//! HTTP surface of the quiz.
//!
//! - `POST /api/evaluate-action` judges an answer and explains it
//! - `POST /api/generate-explanation` explains a verdict the caller already has
//! - `GET /api/deal` deals a new question
//! - `GET /health` liveness and coach status
pub mod handlers;

pub mod request;
pub use request::*;

pub mod response;
pub use response::*;

pub mod server;
pub use server::*;
