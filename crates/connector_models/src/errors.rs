//! API-level error responses.

mod actix;
pub mod types;

pub use types::*;
