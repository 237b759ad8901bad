//! Assure Claims events
//!
//! Events arrive through the webhook. An event whose code matches an
//! auto-billing trigger produces a time entry, and the event keeps a
//! reference to it.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{EventId, FilterSpec, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssureClaimsEvent {
    pub id: EventId,
    pub claim_number: String,
    pub event_code: String,
    pub event_name: String,
    pub occurred_at: DateTime<Utc>,
    /// A trigger matched the event code
    pub auto_captured: bool,
    /// A time entry was created for the event
    pub auto_billed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entry_id: Option<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl AssureClaimsEvent {
    /// Records an event received now
    pub fn received(
        claim_number: impl Into<String>,
        event_code: impl Into<String>,
        event_name: impl Into<String>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::new(),
            claim_number: claim_number.into(),
            event_code: event_code.into(),
            event_name: event_name.into(),
            occurred_at: Utc::now(),
            auto_captured: false,
            auto_billed: false,
            time_entry_id: None,
            payload,
        }
    }

    /// Links the event to the time entry it produced
    pub fn mark_billed(&mut self, time_entry_id: impl Into<String>) {
        self.auto_captured = true;
        self.auto_billed = true;
        self.time_entry_id = Some(time_entry_id.into());
    }

    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("claimNumber", |e: &AssureClaimsEvent| Some(Cow::Borrowed(e.claim_number.as_str())))
            .exact("eventCode", |e: &AssureClaimsEvent| Some(Cow::Borrowed(e.event_code.as_str())))
    }
}

impl Record for AssureClaimsEvent {
    const ENTITY: &'static str = "Assure Claims event";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn claim_number(&self) -> Option<&str> {
        Some(&self.claim_number)
    }
}
