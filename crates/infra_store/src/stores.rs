//! The full set of stores the API runs against

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use core_kernel::{HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{AssureClaimsEvent, Claim};
use domain_time_expense::{ActivityCode, Adjuster, EventTrigger, ExpenseEntry, ExpenseType, TimeEntry};
use domain_vendor::{Invoice, Referral, Vendor};

use crate::memory::InMemoryStore;
use crate::seed::SeedData;

/// Monotonic counter for human-facing document numbers
#[derive(Debug, Default)]
pub struct Sequence(AtomicUsize);

impl Sequence {
    /// Starts the counter after `issued` numbers have been handed out
    pub fn starting_after(issued: usize) -> Self {
        Self(AtomicUsize::new(issued))
    }

    /// Next number, starting at 1
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// One store per collection, shared by every request handler
#[derive(Debug, Clone)]
pub struct Stores {
    pub adjusters: Arc<InMemoryStore<Adjuster>>,
    pub activity_codes: Arc<InMemoryStore<ActivityCode>>,
    pub expense_types: Arc<InMemoryStore<ExpenseType>>,
    pub event_triggers: Arc<InMemoryStore<EventTrigger>>,
    pub claims: Arc<InMemoryStore<Claim>>,
    pub time_entries: Arc<InMemoryStore<TimeEntry>>,
    pub expense_entries: Arc<InMemoryStore<ExpenseEntry>>,
    pub events: Arc<InMemoryStore<AssureClaimsEvent>>,
    pub vendors: Arc<InMemoryStore<Vendor>>,
    pub referrals: Arc<InMemoryStore<Referral>>,
    pub invoices: Arc<InMemoryStore<Invoice>>,
    pub referral_numbers: Arc<Sequence>,
    pub invoice_numbers: Arc<Sequence>,
}

impl Stores {
    /// Loads `seed` into fresh stores
    pub fn from_seed(seed: SeedData) -> Result<Self, PortError> {
        let referral_numbers = Arc::new(Sequence::starting_after(seed.referrals.len()));
        let invoice_numbers = Arc::new(Sequence::starting_after(seed.invoices.len()));

        Ok(Self {
            adjusters: Arc::new(InMemoryStore::with_records("adjusters", seed.adjusters)?),
            activity_codes: Arc::new(InMemoryStore::with_records("activity-codes", seed.activity_codes)?),
            expense_types: Arc::new(InMemoryStore::with_records("expense-types", seed.expense_types)?),
            event_triggers: Arc::new(InMemoryStore::with_records("event-triggers", seed.event_triggers)?),
            claims: Arc::new(InMemoryStore::with_records("claims", seed.claims)?),
            time_entries: Arc::new(InMemoryStore::with_records("time-entries", seed.time_entries)?),
            expense_entries: Arc::new(InMemoryStore::with_records("expense-entries", seed.expense_entries)?),
            events: Arc::new(InMemoryStore::with_records("assure-events", seed.events)?),
            vendors: Arc::new(InMemoryStore::with_records("vendors", seed.vendors)?),
            referrals: Arc::new(InMemoryStore::with_records("referrals", seed.referrals)?),
            invoices: Arc::new(InMemoryStore::with_records("invoices", seed.invoices)?),
            referral_numbers,
            invoice_numbers,
        })
    }

    /// Empty stores
    pub fn empty() -> Self {
        Self {
            adjusters: Arc::new(InMemoryStore::new("adjusters")),
            activity_codes: Arc::new(InMemoryStore::new("activity-codes")),
            expense_types: Arc::new(InMemoryStore::new("expense-types")),
            event_triggers: Arc::new(InMemoryStore::new("event-triggers")),
            claims: Arc::new(InMemoryStore::new("claims")),
            time_entries: Arc::new(InMemoryStore::new("time-entries")),
            expense_entries: Arc::new(InMemoryStore::new("expense-entries")),
            events: Arc::new(InMemoryStore::new("assure-events")),
            vendors: Arc::new(InMemoryStore::new("vendors")),
            referrals: Arc::new(InMemoryStore::new("referrals")),
            invoices: Arc::new(InMemoryStore::new("invoices")),
            referral_numbers: Arc::new(Sequence::default()),
            invoice_numbers: Arc::new(Sequence::default()),
        }
    }

    /// Stores holding the demo book for business date `today`
    pub fn seeded(today: NaiveDate) -> Result<Self, PortError> {
        let stores = Self::from_seed(SeedData::mock(today)?)?;
        info!(%today, "loaded demo data");
        Ok(stores)
    }

    /// Health of every store
    pub async fn health(&self) -> Vec<HealthCheckResult> {
        vec![
            self.adjusters.health_check().await,
            self.activity_codes.health_check().await,
            self.expense_types.health_check().await,
            self.event_triggers.health_check().await,
            self.claims.health_check().await,
            self.time_entries.health_check().await,
            self.expense_entries.health_check().await,
            self.events.health_check().await,
            self.vendors.health_check().await,
            self.referrals.health_check().await,
            self.invoices.health_check().await,
        ]
    }
}
