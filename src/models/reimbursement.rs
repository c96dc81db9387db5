//! Reimbursement requests and their status machine.
//!
//! Office staff move a PPM reimbursement from request through approval to
//! payment. Transitions outside the allowed edges are reported as
//! [`EngineError::InvalidTransition`] and leave the status untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Cents;
use crate::error::{EngineError, EngineResult};

/// Status of a reimbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReimbursementStatus {
    /// Being prepared by the service member.
    Draft,
    /// Submitted for office review.
    Requested,
    /// Approved by the office.
    Approved,
    /// Rejected by the office.
    Rejected,
    /// Paid out.
    Paid,
}

impl fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReimbursementStatus::Draft => "DRAFT",
            ReimbursementStatus::Requested => "REQUESTED",
            ReimbursementStatus::Approved => "APPROVED",
            ReimbursementStatus::Rejected => "REJECTED",
            ReimbursementStatus::Paid => "PAID",
        };
        f.write_str(name)
    }
}

/// How the reimbursement will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodOfReceipt {
    /// Government travel charge card.
    Gtcc,
    /// Other direct deposit.
    OtherDd,
}

/// A reimbursement request for a personally procured move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reimbursement {
    /// Unique identifier.
    pub id: Uuid,
    /// Amount requested.
    pub requested_amount: Cents,
    /// How the amount will be paid.
    pub method_of_receipt: MethodOfReceipt,
    /// Current status.
    pub status: ReimbursementStatus,
    /// Set when the request is submitted.
    pub requested_date: Option<NaiveDate>,
}

impl Reimbursement {
    /// Creates a draft reimbursement.
    pub fn new_draft(requested_amount: Cents, method_of_receipt: MethodOfReceipt) -> Self {
        Self {
            id: Uuid::new_v4(),
            requested_amount,
            method_of_receipt,
            status: ReimbursementStatus::Draft,
            requested_date: None,
        }
    }

    /// Submits a draft for review.
    pub fn request(&mut self, date: NaiveDate) -> EngineResult<()> {
        self.transition("request", ReimbursementStatus::Draft, ReimbursementStatus::Requested)?;
        self.requested_date = Some(date);
        Ok(())
    }

    /// Approves a requested reimbursement.
    pub fn approve(&mut self) -> EngineResult<()> {
        self.transition("approve", ReimbursementStatus::Requested, ReimbursementStatus::Approved)
    }

    /// Rejects a requested reimbursement.
    pub fn reject(&mut self) -> EngineResult<()> {
        self.transition("reject", ReimbursementStatus::Requested, ReimbursementStatus::Rejected)
    }

    /// Marks an approved reimbursement as paid.
    pub fn pay(&mut self) -> EngineResult<()> {
        self.transition("pay", ReimbursementStatus::Approved, ReimbursementStatus::Paid)
    }

    fn transition(
        &mut self,
        action: &str,
        from: ReimbursementStatus,
        to: ReimbursementStatus,
    ) -> EngineResult<()> {
        if self.status != from {
            return Err(EngineError::InvalidTransition {
                from: self.status.to_string(),
                action: action.to_string(),
            });
        }
        self.status = to;
        Ok(())
    }
}
