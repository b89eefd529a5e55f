//! Request handlers.

pub mod connector;
pub mod health;
pub mod orders;
