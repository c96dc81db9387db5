//! Request types for the rate engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::PpmEstimateRequest;
use crate::models::Pounds;

/// Request body for `POST /estimates/sit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitEstimateRequest {
    /// Pickup postal code.
    pub origin_zip: u32,
    /// Destination postal code, where the goods are stored.
    pub destination_zip: u32,
    /// Estimated weight in pounds.
    pub weight_estimate: i64,
    /// Planned move date.
    pub planned_move_date: NaiveDate,
    /// Days in storage.
    pub days_in_storage: u32,
}

/// Request body for `POST /estimates/ppm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PpmEstimateBody {
    /// Pickup postal code.
    pub origin_zip: u32,
    /// Destination postal code.
    pub destination_zip: u32,
    /// Estimated weight in pounds.
    pub weight_estimate: i64,
    /// Planned move date.
    pub planned_move_date: NaiveDate,
    /// Days in storage at destination.
    #[serde(default)]
    pub days_in_storage: u32,
}

impl From<PpmEstimateBody> for PpmEstimateRequest {
    fn from(body: PpmEstimateBody) -> Self {
        PpmEstimateRequest {
            origin_zip: body.origin_zip,
            destination_zip: body.destination_zip,
            weight: Pounds(body.weight_estimate),
            planned_move_date: body.planned_move_date,
            days_in_storage: body.days_in_storage,
        }
    }
}
