//! Rate engine for household-goods relocation moves.
//!
//! This crate computes shipment cost estimates (linehaul, shorthaul and
//! storage-in-transit charges) from weight, distance, geography and
//! effective-dated tariff tables, and applies negotiated discount rates
//! as a separate, explicit step.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod tariff;
