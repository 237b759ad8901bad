//! Pre-built Test Fixtures
//!
//! Ready-to-use data for the entities most tests need. Values are fixed so
//! assertions can name them directly.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use domain_claims::{
    Address, Claim, ClaimHandler, ClaimParty, ClaimStatus, ClaimType, PartyType, Reserve, ReserveType,
};
use domain_time_expense::{
    ActivityCategory, ActivityCode, Adjuster, BillingType, EventTrigger, ExpenseType, RateType,
};
use domain_vendor::{
    PaymentConfiguration, PaymentMethod, PaymentTerms, Vendor, VendorAddress, VendorDraft, VendorStatus,
    VendorType,
};

/// Claim numbers used throughout the tests
pub struct ClaimNumbers;

impl ClaimNumbers {
    pub const WORKERS_COMP: &'static str = "CLM-2024-001234";
    pub const AUTO_LIABILITY: &'static str = "CLM-2024-002345";
    pub const UNKNOWN: &'static str = "CLM-1999-000000";
}

/// Fixture for dates and instants
pub struct DateFixtures;

impl DateFixtures {
    /// The "today" most tests run against (Feb 15, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    pub fn yesterday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()
    }

    pub fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    pub fn instant(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 9, 0, 0).unwrap()
    }
}

/// Fixture for claims
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Open workers' comp claim handled by ADJ-001, carried by Acme Insurance
    pub fn workers_comp() -> Claim {
        Claim {
            claim_number: ClaimNumbers::WORKERS_COMP.to_string(),
            claim_status: ClaimStatus::Open,
            date_of_loss: DateFixtures::date(1, 15),
            claim_type: ClaimType::WorkersComp,
            claimant: Self::claimant("PTY-001", "John", "Doe"),
            insured: None,
            handler: Self::handler("USR-001", "Sarah", "Johnson"),
            injury: None,
            reserves: vec![
                Reserve::new(ReserveType::Medical, dec!(50000), dec!(12500), DateFixtures::date(2, 1)).unwrap(),
                Reserve::new(ReserveType::Indemnity, dec!(25000), dec!(5000), DateFixtures::date(2, 1)).unwrap(),
            ],
            adjuster_id: "ADJ-001".to_string(),
            carrier_id: "CAR-001".to_string(),
            carrier_name: "Acme Insurance".to_string(),
            policy_number: Some("POL-WC-2024-5678".to_string()),
        }
    }

    /// Open auto liability claim handled by ADJ-002, carried by Global Indemnity
    pub fn auto_liability() -> Claim {
        Claim {
            claim_number: ClaimNumbers::AUTO_LIABILITY.to_string(),
            claim_status: ClaimStatus::Open,
            date_of_loss: DateFixtures::date(1, 22),
            claim_type: ClaimType::AutoLiability,
            claimant: Self::claimant("PTY-002", "Jane", "Smith"),
            insured: None,
            handler: Self::handler("USR-002", "Michael", "Chen"),
            injury: None,
            reserves: vec![
                Reserve::new(ReserveType::Medical, dec!(75000), dec!(15000), DateFixtures::date(2, 5)).unwrap(),
            ],
            adjuster_id: "ADJ-002".to_string(),
            carrier_id: "CAR-002".to_string(),
            carrier_name: "Global Indemnity".to_string(),
            policy_number: Some("POL-AL-2024-9012".to_string()),
        }
    }

    fn claimant(id: &str, first: &str, last: &str) -> ClaimParty {
        ClaimParty {
            party_id: id.to_string(),
            party_type: PartyType::Claimant,
            first_name: first.to_string(),
            last_name: last.to_string(),
            date_of_birth: None,
            address: Address {
                street1: "123 Main St".to_string(),
                street2: None,
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                postal_code: "62701".to_string(),
            },
            phone: None,
            email: None,
        }
    }

    fn handler(id: &str, first: &str, last: &str) -> ClaimHandler {
        ClaimHandler {
            user_id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@tpa.com", first.to_lowercase(), last.to_lowercase()),
            phone: None,
        }
    }
}

/// Fixture for time & expense reference data
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    pub fn adjuster() -> Adjuster {
        Adjuster {
            id: "ADJ-001".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.johnson@tpa.com".to_string(),
            role_id: "ROLE-002".to_string(),
            role_name: "Senior Adjuster".to_string(),
            default_rate: dec!(125),
            is_active: true,
        }
    }

    pub fn activity_code() -> ActivityCode {
        ActivityCode {
            id: "ACT-001".to_string(),
            code: "FILE_REVIEW".to_string(),
            name: "File Review".to_string(),
            category: ActivityCategory::Investigation,
            billing_type: BillingType::TimeBased,
            billable: true,
            auto_trigger_enabled: true,
            is_active: true,
        }
    }

    pub fn mileage() -> ExpenseType {
        ExpenseType {
            id: "EXT-001".to_string(),
            code: "MILEAGE".to_string(),
            name: "Mileage".to_string(),
            category: "TRAVEL".to_string(),
            rate_type: RateType::PerUnit,
            default_rate: Some(dec!(0.67)),
            rate_cap: None,
            receipt_required: false,
            is_active: true,
        }
    }

    /// Auto-billing trigger for NOTE_ADDED events
    pub fn note_trigger() -> EventTrigger {
        EventTrigger {
            id: "TRG-001".to_string(),
            assure_event_name: "Claim Note Added".to_string(),
            event_code: "NOTE_ADDED".to_string(),
            mapped_activity_code_id: "ACT-001".to_string(),
            mapped_activity_code: "FILE_REVIEW".to_string(),
            auto_bill: true,
            requires_review: false,
            default_duration: Some(dec!(0.2)),
            is_active: true,
        }
    }
}

/// Fixture for vendors
pub struct VendorFixtures;

impl VendorFixtures {
    pub fn draft(legal_name: &str, vendor_type: VendorType, status: VendorStatus) -> VendorDraft {
        VendorDraft {
            legal_name: legal_name.to_string(),
            dba: None,
            status: Some(status),
            vendor_type,
            specialty: None,
            tin: "36-1234567".to_string(),
            w9_status: None,
            corporate_address: VendorAddress {
                street1: "200 W Adams St".to_string(),
                street2: None,
                city: "Chicago".to_string(),
                state: "IL".to_string(),
                postal_code: "60606".to_string(),
                country: "US".to_string(),
            },
            mailing_address: None,
            service_territory: vec!["IL".to_string()],
            licenses: Vec::new(),
            contacts: Vec::new(),
            payment_config: PaymentConfiguration {
                method: PaymentMethod::Ach,
                bank_name: None,
                remittance_address: None,
                terms: PaymentTerms::Net30,
                currency: "USD".to_string(),
                tax_withholding: false,
                requires1099: true,
            },
        }
    }

    pub fn vendor(legal_name: &str, vendor_type: VendorType, status: VendorStatus) -> Vendor {
        Vendor::create(Self::draft(legal_name, vendor_type, status), "USR-001")
    }
}
