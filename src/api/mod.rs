//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;

pub use handler::{function_handler, handle_request};
