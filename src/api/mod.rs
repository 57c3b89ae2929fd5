//! Function handlers and response shaping

pub mod helpers;
pub mod quiz_handler;
pub mod secret_handler;
