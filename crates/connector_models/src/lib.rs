//! Wire data model of the marketplace order connector.
//!
//! Marketplace-side payloads are deserialized defensively (identifiers may
//! arrive as JSON strings or numbers); platform-side payloads serialize in
//! the camelCase shape the platform order API expects.

pub mod configuration;
mod de;
pub mod errors;
pub mod marketplace;
pub mod platform;
pub mod products;
