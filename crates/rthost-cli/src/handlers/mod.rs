//! Command handlers.

pub mod paths;
pub mod resolve;
