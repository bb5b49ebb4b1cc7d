//! HTTP API module for the Paycheck Engine.
//!
//! This module provides the REST API endpoint for calculating a two-week
//! pay period summary and the monthly scenario projection.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SettingsRequest, WeekRequest};
pub use response::ApiError;
pub use state::AppState;
