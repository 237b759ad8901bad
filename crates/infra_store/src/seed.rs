//! Demo data
//!
//! A small, internally consistent book of business: three claims, the
//! adjusters working them, their time and expenses, and a handful of
//! vendors with referrals and invoices. Dates are laid out relative to the
//! business date the server starts on so the dashboards always have
//! something to show for "today".

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{EventId, ExpenseEntryId, InvoiceId, PortError, ReferralId, TimeEntryId, VendorId};
use domain_claims::{
    Address, AssureClaimsEvent, Claim, ClaimHandler, ClaimParty, ClaimStatus, ClaimType, InjuryInfo, PartyType,
    Reserve, ReserveType, TreatmentStatus,
};
use domain_time_expense::{
    ActivityCategory, ActivityCode, Adjuster, BillingType, CaptureType, EntryStatus, EventTrigger, ExpenseEntry,
    ExpenseEntryDraft, ExpenseType, RateType, TimeEntry, TimeEntryDraft,
};
use domain_vendor::{
    Invoice, InvoiceDraft, License, PaymentConfiguration, PaymentMethod, PaymentTerms, Referral, ReferralDraft,
    ReferralStatus, Vendor, VendorAddress, VendorContact, VendorDraft, VendorStatus, VendorType, W9Status,
};

/// Every collection the API serves, ready to load into stores
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub adjusters: Vec<Adjuster>,
    pub activity_codes: Vec<ActivityCode>,
    pub expense_types: Vec<ExpenseType>,
    pub event_triggers: Vec<EventTrigger>,
    pub claims: Vec<Claim>,
    pub time_entries: Vec<TimeEntry>,
    pub expense_entries: Vec<ExpenseEntry>,
    pub events: Vec<AssureClaimsEvent>,
    pub vendors: Vec<Vendor>,
    pub referrals: Vec<Referral>,
    pub invoices: Vec<Invoice>,
}

fn seed_error(err: impl fmt::Display) -> PortError {
    PortError::internal(format!("invalid seed data: {}", err))
}

/// 09:00 UTC on `date`
fn morning(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)) + Duration::hours(9)
}

impl SeedData {
    /// Builds the demo book with `today` as the current business date
    pub fn mock(today: NaiveDate) -> Result<Self, PortError> {
        let adjusters = adjusters();
        let claims = claims(today)?;
        let vendors = vendors();
        let referrals = referrals(today)?;
        let invoices = invoices(today)?;

        Ok(Self {
            time_entries: time_entries(today, &adjusters),
            expense_entries: expense_entries(today),
            events: events(today),
            activity_codes: activity_codes(),
            expense_types: expense_types(),
            event_triggers: event_triggers(),
            adjusters,
            claims,
            vendors,
            referrals,
            invoices,
        })
    }
}

fn adjusters() -> Vec<Adjuster> {
    let adjuster = |id: &str, first: &str, last: &str, role_id: &str, role: &str, rate: Decimal| Adjuster {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@tpa.com", first.to_lowercase(), last.to_lowercase()),
        role_id: role_id.to_string(),
        role_name: role.to_string(),
        default_rate: rate,
        is_active: true,
    };

    vec![
        adjuster("ADJ-001", "Sarah", "Johnson", "ROLE-002", "Senior Adjuster", dec!(125)),
        adjuster("ADJ-002", "Michael", "Chen", "ROLE-001", "Adjuster", dec!(95)),
        adjuster("ADJ-003", "Emily", "Rodriguez", "ROLE-003", "Claims Supervisor", dec!(150)),
    ]
}

fn activity_codes() -> Vec<ActivityCode> {
    let code = |id: &str, code: &str, name: &str, category: ActivityCategory, auto: bool| ActivityCode {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        category,
        billing_type: BillingType::TimeBased,
        billable: true,
        auto_trigger_enabled: auto,
        is_active: true,
    };

    vec![
        code("ACT-001", "FILE_REVIEW", "File Review", ActivityCategory::Investigation, true),
        code("ACT-002", "PHONE_CALL", "Phone Call", ActivityCategory::Communication, true),
        code("ACT-003", "RECORDED_STATEMENT", "Recorded Statement", ActivityCategory::Investigation, false),
        code("ACT-004", "REPORT_WRITING", "Report Writing", ActivityCategory::Reporting, false),
        code("ACT-005", "RESERVE_CHANGE", "Reserve Change", ActivityCategory::Administration, true),
        ActivityCode {
            billing_type: BillingType::FlatFee,
            ..code("ACT-006", "SITE_INSPECTION", "Site Inspection", ActivityCategory::Investigation, false)
        },
    ]
}

fn expense_types() -> Vec<ExpenseType> {
    vec![
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
        },
        ExpenseType {
            id: "EXT-002".to_string(),
            code: "RECORDS_REQUEST".to_string(),
            name: "Medical Records Request".to_string(),
            category: "RECORDS".to_string(),
            rate_type: RateType::PassThrough,
            default_rate: None,
            rate_cap: Some(dec!(250)),
            receipt_required: true,
            is_active: true,
        },
        ExpenseType {
            id: "EXT-003".to_string(),
            code: "PHOTOS".to_string(),
            name: "Photographs".to_string(),
            category: "DOCUMENTATION".to_string(),
            rate_type: RateType::FlatFee,
            default_rate: Some(dec!(25)),
            rate_cap: None,
            receipt_required: false,
            is_active: true,
        },
        ExpenseType {
            id: "EXT-004".to_string(),
            code: "POSTAGE".to_string(),
            name: "Postage & Courier".to_string(),
            category: "ADMINISTRATIVE".to_string(),
            rate_type: RateType::PassThrough,
            default_rate: None,
            rate_cap: Some(dec!(75)),
            receipt_required: true,
            is_active: true,
        },
    ]
}

fn event_triggers() -> Vec<EventTrigger> {
    let trigger = |id: &str, name: &str, event: &str, act_id: &str, act: &str, hours: Decimal| EventTrigger {
        id: id.to_string(),
        assure_event_name: name.to_string(),
        event_code: event.to_string(),
        mapped_activity_code_id: act_id.to_string(),
        mapped_activity_code: act.to_string(),
        auto_bill: true,
        requires_review: false,
        default_duration: Some(hours),
        is_active: true,
    };

    vec![
        trigger("TRG-001", "Claim Note Added", "NOTE_ADDED", "ACT-001", "FILE_REVIEW", dec!(0.2)),
        trigger("TRG-002", "Phone Call Logged", "PHONE_LOGGED", "ACT-002", "PHONE_CALL", dec!(0.25)),
        EventTrigger {
            requires_review: true,
            ..trigger("TRG-003", "Reserve Changed", "RESERVE_CHANGED", "ACT-005", "RESERVE_CHANGE", dec!(0.3))
        },
        EventTrigger {
            auto_bill: false,
            ..trigger("TRG-004", "Document Uploaded", "DOCUMENT_UPLOADED", "ACT-001", "FILE_REVIEW", dec!(0.1))
        },
    ]
}

fn address(street: &str, city: &str, state: &str, zip: &str) -> Address {
    Address {
        street1: street.to_string(),
        street2: None,
        city: city.to_string(),
        state: state.to_string(),
        postal_code: zip.to_string(),
    }
}

fn party(id: &str, party_type: PartyType, first: &str, last: &str, address: Address) -> ClaimParty {
    ClaimParty {
        party_id: id.to_string(),
        party_type,
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: None,
        address,
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
        phone: Some("555-0100".to_string()),
    }
}

fn claims(today: NaiveDate) -> Result<Vec<Claim>, PortError> {
    let reserve = |kind, amount, paid| Reserve::new(kind, amount, paid, today - Duration::days(7)).map_err(seed_error);

    Ok(vec![
        Claim {
            claim_number: "CLM-2024-001234".to_string(),
            claim_status: ClaimStatus::Open,
            date_of_loss: today - Duration::days(31),
            claim_type: ClaimType::WorkersComp,
            claimant: party(
                "PTY-001",
                PartyType::Claimant,
                "John",
                "Doe",
                address("123 Main St", "Springfield", "IL", "62701"),
            ),
            insured: Some(party(
                "PTY-002",
                PartyType::Insured,
                "Acme",
                "Manufacturing",
                address("500 Industrial Pkwy", "Springfield", "IL", "62703"),
            )),
            handler: handler("USR-001", "Sarah", "Johnson"),
            injury: Some(InjuryInfo {
                description: "Lower back strain lifting materials".to_string(),
                body_parts: vec!["LOWER_BACK".to_string()],
                treatment_status: TreatmentStatus::Ongoing,
                return_to_work_date: None,
            }),
            reserves: vec![
                reserve(ReserveType::Medical, dec!(50000), dec!(12500))?,
                reserve(ReserveType::Indemnity, dec!(25000), dec!(5000))?,
                reserve(ReserveType::Expense, dec!(7500), dec!(1200))?,
            ],
            adjuster_id: "ADJ-001".to_string(),
            carrier_id: "CAR-001".to_string(),
            carrier_name: "Acme Insurance".to_string(),
            policy_number: Some("POL-WC-2024-5678".to_string()),
        },
        Claim {
            claim_number: "CLM-2024-002345".to_string(),
            claim_status: ClaimStatus::Open,
            date_of_loss: today - Duration::days(24),
            claim_type: ClaimType::AutoLiability,
            claimant: party(
                "PTY-003",
                PartyType::Claimant,
                "Jane",
                "Smith",
                address("77 Lake Shore Dr", "Chicago", "IL", "60611"),
            ),
            insured: None,
            handler: handler("USR-002", "Michael", "Chen"),
            injury: None,
            reserves: vec![
                reserve(ReserveType::Medical, dec!(75000), dec!(15000))?,
                reserve(ReserveType::Legal, dec!(20000), dec!(0))?,
            ],
            adjuster_id: "ADJ-002".to_string(),
            carrier_id: "CAR-002".to_string(),
            carrier_name: "Global Indemnity".to_string(),
            policy_number: Some("POL-AL-2024-9012".to_string()),
        },
        Claim {
            claim_number: "CLM-2023-009876".to_string(),
            claim_status: ClaimStatus::Closed,
            date_of_loss: today - Duration::days(210),
            claim_type: ClaimType::Property,
            claimant: party(
                "PTY-004",
                PartyType::Claimant,
                "Robert",
                "Wilson",
                address("9 Elm St", "Peoria", "IL", "61602"),
            ),
            insured: None,
            handler: handler("USR-001", "Sarah", "Johnson"),
            injury: None,
            reserves: vec![reserve(ReserveType::Indemnity, dec!(18000), dec!(18000))?],
            adjuster_id: "ADJ-001".to_string(),
            carrier_id: "CAR-001".to_string(),
            carrier_name: "Acme Insurance".to_string(),
            policy_number: Some("POL-PR-2023-1144".to_string()),
        },
    ])
}

fn time_entries(today: NaiveDate, adjusters: &[Adjuster]) -> Vec<TimeEntry> {
    let entry = |id: &str,
                 claim: &str,
                 adjuster_id: &str,
                 activity: (&str, &str, &str),
                 capture_type: CaptureType,
                 days_ago: i64,
                 hours: Decimal,
                 status: EntryStatus| {
        let adjuster = adjusters.iter().find(|a| a.id == adjuster_id);
        let mut entry = TimeEntry::create(
            TimeEntryDraft {
                claim_number: claim.to_string(),
                adjuster_id: adjuster_id.to_string(),
                adjuster_name: adjuster.map(Adjuster::full_name).unwrap_or_default(),
                role_id: adjuster.map(|a| a.role_id.clone()).unwrap_or_default(),
                role_name: adjuster.map(|a| a.role_name.clone()).unwrap_or_default(),
                activity_code_id: activity.0.to_string(),
                activity_code: activity.1.to_string(),
                activity_description: activity.2.to_string(),
                capture_type: Some(capture_type),
                entry_date: Some(today - Duration::days(days_ago)),
                duration: hours,
                rate: adjuster.map(|a| a.default_rate).unwrap_or_default(),
                status: Some(status),
                carrier_name: None,
                created_by: Some(if capture_type == CaptureType::Auto {
                    "SYSTEM".to_string()
                } else {
                    adjuster_id.to_string()
                }),
                ..Default::default()
            },
            today,
        );
        entry.id = TimeEntryId::from(id);
        entry.created_date = morning(today - Duration::days(days_ago));
        if status != EntryStatus::Draft && status != EntryStatus::Pending {
            entry.submitted_date = Some(entry.created_date + Duration::hours(8));
        }
        entry
    };

    let review = ("ACT-001", "FILE_REVIEW", "File Review");
    let phone = ("ACT-002", "PHONE_CALL", "Phone Call");
    let statement = ("ACT-003", "RECORDED_STATEMENT", "Recorded Statement");
    let report = ("ACT-004", "REPORT_WRITING", "Report Writing");

    let mut auto = entry(
        "TIME-006",
        "CLM-2024-001234",
        "ADJ-001",
        review,
        CaptureType::Auto,
        1,
        dec!(0.2),
        EntryStatus::Pending,
    );
    auto.auto_event_ref = Some("EVT-001".to_string());

    vec![
        entry("TIME-001", "CLM-2024-001234", "ADJ-001", review, CaptureType::Manual, 0, dec!(1.5), EntryStatus::Draft),
        entry("TIME-002", "CLM-2024-001234", "ADJ-001", statement, CaptureType::Timer, 2, dec!(2), EntryStatus::Submitted),
        entry("TIME-003", "CLM-2024-001234", "ADJ-001", report, CaptureType::Manual, 5, dec!(1.25), EntryStatus::Billed),
        entry("TIME-004", "CLM-2024-002345", "ADJ-002", phone, CaptureType::Manual, 0, dec!(0.5), EntryStatus::Pending),
        entry("TIME-005", "CLM-2024-002345", "ADJ-002", review, CaptureType::Timer, 3, dec!(1), EntryStatus::Approved),
        auto,
    ]
}

fn expense_entries(today: NaiveDate) -> Vec<ExpenseEntry> {
    let expense = |id: &str,
                   claim: &str,
                   adjuster: (&str, &str),
                   kind: (&str, &str, &str),
                   amount: Decimal,
                   quantity: Option<Decimal>,
                   receipt: bool,
                   status: EntryStatus| {
        let mut entry = ExpenseEntry::create(
            ExpenseEntryDraft {
                claim_number: claim.to_string(),
                adjuster_id: adjuster.0.to_string(),
                adjuster_name: adjuster.1.to_string(),
                expense_type_id: kind.0.to_string(),
                expense_code: kind.1.to_string(),
                expense_description: kind.2.to_string(),
                entry_date: Some(today - Duration::days(2)),
                amount,
                quantity,
                receipt_attached: receipt,
                status: Some(status),
                ..Default::default()
            },
            today,
        );
        entry.id = ExpenseEntryId::from(id);
        entry.created_date = morning(today - Duration::days(2));
        entry
    };

    let sarah = ("ADJ-001", "Sarah Johnson");
    let michael = ("ADJ-002", "Michael Chen");

    vec![
        expense(
            "EXP-001",
            "CLM-2024-001234",
            sarah,
            ("EXT-001", "MILEAGE", "Mileage to claimant interview"),
            dec!(33.50),
            Some(dec!(50)),
            false,
            EntryStatus::Pending,
        ),
        expense(
            "EXP-002",
            "CLM-2024-001234",
            sarah,
            ("EXT-002", "RECORDS_REQUEST", "Medical records from Springfield Ortho"),
            dec!(85),
            None,
            true,
            EntryStatus::Submitted,
        ),
        expense(
            "EXP-003",
            "CLM-2024-002345",
            michael,
            ("EXT-003", "PHOTOS", "Vehicle damage photos"),
            dec!(25),
            None,
            false,
            EntryStatus::Draft,
        ),
    ]
}

fn events(today: NaiveDate) -> Vec<AssureClaimsEvent> {
    let mut note = AssureClaimsEvent::received(
        "CLM-2024-001234",
        "NOTE_ADDED",
        "Claim Note Added",
        serde_json::json!({ "noteId": "NOTE-5521", "author": "USR-001" }),
    );
    note.id = EventId::from("EVT-001");
    note.occurred_at = morning(today - Duration::days(1));
    note.mark_billed("TIME-006");

    let mut upload = AssureClaimsEvent::received(
        "CLM-2024-002345",
        "DOCUMENT_UPLOADED",
        "Document Uploaded",
        serde_json::json!({ "documentId": "DOC-0042", "fileName": "police_report.pdf" }),
    );
    upload.id = EventId::from("EVT-002");
    upload.occurred_at = morning(today - Duration::days(1));

    vec![note, upload]
}

fn vendor_address(street: &str, city: &str, state: &str, zip: &str) -> VendorAddress {
    VendorAddress {
        street1: street.to_string(),
        street2: None,
        city: city.to_string(),
        state: state.to_string(),
        postal_code: zip.to_string(),
        country: "US".to_string(),
    }
}

fn vendors() -> Vec<Vendor> {
    let vendor = |id: &str,
                  name: &str,
                  vendor_type: VendorType,
                  status: VendorStatus,
                  address: VendorAddress,
                  contact: (&str, &str),
                  terms: PaymentTerms| {
        let mut vendor = Vendor::create(
            VendorDraft {
                legal_name: name.to_string(),
                dba: None,
                status: Some(status),
                vendor_type,
                specialty: None,
                tin: format!("36-1000{}", &id[4..]),
                w9_status: Some(if status == VendorStatus::Active {
                    W9Status::Received
                } else {
                    W9Status::Pending
                }),
                service_territory: vec![address.state.clone()],
                corporate_address: address,
                mailing_address: None,
                licenses: Vec::new(),
                contacts: vec![VendorContact {
                    id: format!("CON-{}", &id[4..]),
                    role: "PRIMARY".to_string(),
                    name: contact.0.to_string(),
                    email: contact.1.to_string(),
                    phone: "555-0199".to_string(),
                    is_primary: true,
                }],
                payment_config: PaymentConfiguration {
                    method: PaymentMethod::Ach,
                    bank_name: None,
                    remittance_address: None,
                    terms,
                    currency: "USD".to_string(),
                    tax_withholding: false,
                    requires1099: true,
                },
            },
            "USR-003",
        );
        vendor.id = VendorId::from(id);
        vendor
    };

    let mut ime = vendor(
        "VEN-001",
        "Midwest IME Services",
        VendorType::Ime,
        VendorStatus::Active,
        vendor_address("200 W Adams St", "Chicago", "IL", "60606"),
        ("Dr. Alan Park", "scheduling@midwestime.com"),
        PaymentTerms::Net30,
    );
    ime.specialty = Some("Orthopedics".to_string());
    ime.licenses.push(License {
        id: "LIC-001".to_string(),
        license_number: "036-112233".to_string(),
        state: "IL".to_string(),
        expiration_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default(),
        status: "ACTIVE".to_string(),
    });

    vec![
        ime,
        vendor(
            "VEN-002",
            "Eagle Eye Surveillance LLC",
            VendorType::Surveillance,
            VendorStatus::Active,
            vendor_address("18 N Main St", "Rockford", "IL", "61101"),
            ("Dana Ruiz", "dispatch@eagleeye.com"),
            PaymentTerms::Net45,
        ),
        vendor(
            "VEN-003",
            "Prairie Auto Appraisals",
            VendorType::Appraiser,
            VendorStatus::Inactive,
            vendor_address("410 Washington St", "Peoria", "IL", "61602"),
            ("Tom Becker", "tom@prairieappraisals.com"),
            PaymentTerms::Net30,
        ),
        vendor(
            "VEN-004",
            "Lakeside Nurse Case Management",
            VendorType::NurseCaseManager,
            VendorStatus::PendingDocumentation,
            vendor_address("1 Lakeside Plaza", "Evanston", "IL", "60201"),
            ("Priya Natarajan", "intake@lakesidencm.com"),
            PaymentTerms::Net60,
        ),
    ]
}

fn referrals(today: NaiveDate) -> Result<Vec<Referral>, PortError> {
    let assign = |id: &str, sequence: usize, vendor: (&str, &str), claim: (&str, &str), service: (&str, &str), days_ago: i64| {
        let mut referral = Referral::assign(
            ReferralDraft {
                vendor_id: vendor.0.to_string(),
                vendor_name: vendor.1.to_string(),
                claim_number: claim.0.to_string(),
                claimant_name: claim.1.to_string(),
                service_type: service.0.to_string(),
                service_category: service.1.to_string(),
                instructions: format!("{} requested for {}", service.0, claim.1),
                estimated_cost: Some(dec!(1200)),
                ..Default::default()
            },
            sequence,
            "USR-001",
            morning(today - Duration::days(days_ago)),
        )
        .map_err(seed_error)?;
        referral.id = ReferralId::from(id);
        Ok::<_, PortError>(referral)
    };

    let ime = ("VEN-001", "Midwest IME Services");
    let surveillance = ("VEN-002", "Eagle Eye Surveillance LLC");
    let doe = ("CLM-2024-001234", "John Doe");
    let smith = ("CLM-2024-002345", "Jane Smith");

    let open = assign("REF-001", 1, ime, doe, ("IME", "MEDICAL"), 3)?;

    let mut late = assign("REF-002", 2, surveillance, doe, ("SURVEILLANCE", "INVESTIGATION"), 20)?;
    late.update_status(ReferralStatus::Accepted, None, "VEN-002", morning(today - Duration::days(19)))
        .map_err(seed_error)?;
    late.update_status(
        ReferralStatus::Complete,
        Some("Three days of activity documented".to_string()),
        "VEN-002",
        morning(today - Duration::days(10)),
    )
    .map_err(seed_error)?;

    let mut on_time = assign("REF-003", 3, ime, smith, ("IME", "MEDICAL"), 12)?;
    on_time
        .update_status(ReferralStatus::InProgress, None, "VEN-001", morning(today - Duration::days(10)))
        .map_err(seed_error)?;
    on_time
        .update_status(ReferralStatus::Complete, None, "VEN-001", morning(today - Duration::days(4)))
        .map_err(seed_error)?;

    Ok(vec![open, late, on_time])
}

fn invoices(today: NaiveDate) -> Result<Vec<Invoice>, PortError> {
    let submit = |id: &str, sequence: usize, referral: &str, vendor: (&str, &str), claim: &str, amount: Decimal, terms| {
        let mut invoice = Invoice::submit(
            InvoiceDraft {
                referral_id: referral.to_string(),
                vendor_id: vendor.0.to_string(),
                vendor_name: vendor.1.to_string(),
                claim_number: claim.to_string(),
                total_amount: amount,
                ..Default::default()
            },
            sequence,
            terms,
            morning(today - Duration::days(3)),
        )
        .map_err(seed_error)?;
        invoice.id = InvoiceId::from(id);
        Ok::<_, PortError>(invoice)
    };

    let pending = submit(
        "INV-001",
        1,
        "REF-003",
        ("VEN-001", "Midwest IME Services"),
        "CLM-2024-002345",
        dec!(1150),
        PaymentTerms::Net30,
    )?;

    let mut approved = submit(
        "INV-002",
        2,
        "REF-002",
        ("VEN-002", "Eagle Eye Surveillance LLC"),
        "CLM-2024-001234",
        dec!(2400),
        PaymentTerms::Net45,
    )?;
    approved
        .approve(Some(dec!(2250)), "USR-003", morning(today - Duration::days(1)))
        .map_err(seed_error)?;

    Ok(vec![pending, approved])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    #[test]
    fn test_every_entry_belongs_to_a_seeded_claim() {
        let seed = SeedData::mock(today()).unwrap();
        let known = |n: &str| seed.claims.iter().any(|c| c.claim_number == n);

        assert!(seed.time_entries.iter().all(|t| known(&t.claim_number)));
        assert!(seed.expense_entries.iter().all(|e| known(&e.claim_number)));
        assert!(seed.referrals.iter().all(|r| known(&r.claim_number)));
    }

    #[test]
    fn test_surveillance_referral_breached_sla() {
        let seed = SeedData::mock(today()).unwrap();
        let breached: Vec<_> = seed.referrals.iter().filter(|r| r.sla_breach).collect();

        assert_eq!(breached.len(), 1);
        assert_eq!(breached[0].id.as_str(), "REF-002");
    }

    #[test]
    fn test_entries_priced_at_adjuster_rate() {
        let seed = SeedData::mock(today()).unwrap();
        let first = &seed.time_entries[0];

        assert_eq!(first.rate, dec!(125));
        assert_eq!(first.amount, dec!(187.5));
        assert_eq!(first.entry_date, today());
    }
}
