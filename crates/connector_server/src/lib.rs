//! HTTP surface of the marketplace order connector.

pub mod app;
pub mod routes;
pub mod settings;

pub use app::AppState;
pub use settings::Settings;
