//! Claim context
//!
//! The subset of an Assure Claims claim that billing and vendor work need:
//! who is involved, who handles it, and how it is reserved.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{FilterSpec, Record};

use crate::reserve::{Reserve, ReserveSummary};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Open,
    Closed,
    Pending,
    Reopened,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Open => "OPEN",
            ClaimStatus::Closed => "CLOSED",
            ClaimStatus::Pending => "PENDING",
            ClaimStatus::Reopened => "REOPENED",
        }
    }

    /// True for claims that can still accrue billable work
    pub fn is_active(&self) -> bool {
        !matches!(self, ClaimStatus::Closed)
    }
}

/// Line of business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    WorkersComp,
    AutoLiability,
    Property,
    GeneralLiability,
    ProfessionalLiability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyType {
    Claimant,
    Insured,
    Witness,
    Attorney,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A person involved in a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimParty {
    pub party_id: String,
    pub party_type: PartyType,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ClaimParty {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Claims professional responsible for the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimHandler {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreatmentStatus {
    Ongoing,
    Completed,
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryInfo {
    pub description: String,
    pub body_parts: Vec<String>,
    pub treatment_status: TreatmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to_work_date: Option<NaiveDate>,
}

/// An insurance claim, keyed by claim number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub claim_number: String,
    pub claim_status: ClaimStatus,
    pub date_of_loss: NaiveDate,
    pub claim_type: ClaimType,
    pub claimant: ClaimParty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insured: Option<ClaimParty>,
    pub handler: ClaimHandler,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub injury: Option<InjuryInfo>,
    #[serde(default)]
    pub reserves: Vec<Reserve>,
    /// Adjuster assigned to the claim; auto-captured time is billed to them
    pub adjuster_id: String,
    pub carrier_id: String,
    pub carrier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
}

impl Claim {
    /// Totals across every reserve line
    pub fn reserve_summary(&self) -> ReserveSummary {
        ReserveSummary::from_reserves(&self.reserves)
    }

    /// Query keys understood by the claim listing
    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("status", |c: &Claim| Some(Cow::Borrowed(c.claim_status.as_str())))
            .exact("adjusterId", |c: &Claim| Some(Cow::Borrowed(c.adjuster_id.as_str())))
            .substring("carrierName", |c: &Claim| Some(Cow::Borrowed(c.carrier_name.as_str())))
    }
}

impl Record for Claim {
    const ENTITY: &'static str = "Claim";

    fn record_id(&self) -> &str {
        &self.claim_number
    }

    fn claim_number(&self) -> Option<&str> {
        Some(&self.claim_number)
    }

    fn adjuster_id(&self) -> Option<&str> {
        Some(&self.adjuster_id)
    }
}
