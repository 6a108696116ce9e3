//! HTTP API module for the forecast engine.
//!
//! Exposes forecasting, forecast history and season lookup as JSON
//! endpoints over axum.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ForecastRequest;
pub use response::{ApiError, SeasonResponse};
pub use state::AppState;
