//! HTTP API module for the rate engine.
//!
//! A thin JSON adapter over [`crate::calculation::RateEngine`] exposing the
//! SIT and PPM estimate operations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PpmEstimateBody, SitEstimateRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
