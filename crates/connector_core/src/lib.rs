//! Core flows of the marketplace order connector: translating marketplace
//! orders into platform order-creation payloads, bidirectional cancellation
//! and the configuration handshake.
//!
//! All outbound calls go through the client traits in [`clients`], so every
//! flow is testable against in-memory stubs.

pub mod clients;
pub mod configuration;
pub mod consts;
pub mod errors;
pub mod orders;
pub mod postal_codes;
pub mod sync;
