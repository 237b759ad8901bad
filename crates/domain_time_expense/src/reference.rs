//! Reference data used to price and classify entries

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FilterSpec, Record};

/// An adjuster who records time and expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjuster {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_id: String,
    pub role_name: String,
    /// Hourly rate applied to auto-captured time
    pub default_rate: Decimal,
    pub is_active: bool,
}

impl Adjuster {
    /// Display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Adjuster {
    const ENTITY: &'static str = "Adjuster";

    fn record_id(&self) -> &str {
        &self.id
    }

    fn adjuster_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

/// Grouping of activity codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityCategory {
    Investigation,
    Communication,
    Reporting,
    Administration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    TimeBased,
    FlatFee,
}

/// A billable activity an adjuster can record time against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCode {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: ActivityCategory,
    pub billing_type: BillingType,
    pub billable: bool,
    pub auto_trigger_enabled: bool,
    pub is_active: bool,
}

impl Record for ActivityCode {
    const ENTITY: &'static str = "Activity code";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// How an expense type is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// Billed at cost
    PassThrough,
    FlatFee,
    /// Quantity × default rate (mileage and the like)
    PerUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseType {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub rate_type: RateType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<Decimal>,
    /// Ceiling for a single expense of this type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_cap: Option<Decimal>,
    pub receipt_required: bool,
    pub is_active: bool,
}

impl Record for ExpenseType {
    const ENTITY: &'static str = "Expense type";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Maps an Assure Claims event code to the activity it bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTrigger {
    pub id: String,
    pub assure_event_name: String,
    pub event_code: String,
    pub mapped_activity_code_id: String,
    pub mapped_activity_code: String,
    pub auto_bill: bool,
    pub requires_review: bool,
    /// Hours booked per event; one increment when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration: Option<Decimal>,
    pub is_active: bool,
}

impl EventTrigger {
    /// True when an event with `event_code` should produce billed time
    pub fn bills(&self, event_code: &str) -> bool {
        self.is_active && self.auto_bill && self.event_code == event_code
    }
}

impl Record for EventTrigger {
    const ENTITY: &'static str = "Event trigger";

    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Query keys for the activity-code listing
pub fn activity_code_filter() -> FilterSpec<ActivityCode> {
    FilterSpec::new().exact("code", |a: &ActivityCode| Some(Cow::Borrowed(a.code.as_str())))
}
