//! External service clients

pub mod quiz_client;

pub use quiz_client::{QuizClient, QuizSource};
