//! Core data models for the rate engine.
//!
//! This module contains the unit types, the reference-data rows the engine
//! reads, discount rates, and the reimbursement status machine.

mod discount;
mod effective;
mod reimbursement;
mod tariff;
mod units;

pub use discount::{DiscountRate, RouteDiscount};
pub use effective::EffectiveRange;
pub use reimbursement::{MethodOfReceipt, Reimbursement, ReimbursementStatus};
pub use tariff::{
    BaseLinehaulRate, RouteDiscountRate, ServiceAreaRate, ShorthaulRate, Zip3, ZipDistance,
};
pub use units::{Cents, Cwt, Pounds, zip5_to_zip3};
