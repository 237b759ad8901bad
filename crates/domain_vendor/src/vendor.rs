//! Vendors

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{FilterSpec, Record, VendorId};

/// Onboarding and engagement status of a vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorStatus {
    Prospective,
    PendingDocumentation,
    UnderReview,
    Approved,
    Active,
    Inactive,
    OnHold,
    Terminated,
    Rejected,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Prospective => "PROSPECTIVE",
            VendorStatus::PendingDocumentation => "PENDING_DOCUMENTATION",
            VendorStatus::UnderReview => "UNDER_REVIEW",
            VendorStatus::Approved => "APPROVED",
            VendorStatus::Active => "ACTIVE",
            VendorStatus::Inactive => "INACTIVE",
            VendorStatus::OnHold => "ON_HOLD",
            VendorStatus::Terminated => "TERMINATED",
            VendorStatus::Rejected => "REJECTED",
        }
    }

    /// Vendors that can be handed new referrals
    pub fn accepts_referrals(&self) -> bool {
        matches!(self, VendorStatus::Approved | VendorStatus::Active)
    }
}

impl fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service a vendor provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorType {
    Ime,
    FieldAdjuster,
    Appraiser,
    Surveillance,
    Siu,
    LegalCounsel,
    NurseCaseManager,
    Subrogation,
    SalvageRecovery,
    Restoration,
    MedicalBillReview,
    ExpertWitness,
}

impl VendorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorType::Ime => "IME",
            VendorType::FieldAdjuster => "FIELD_ADJUSTER",
            VendorType::Appraiser => "APPRAISER",
            VendorType::Surveillance => "SURVEILLANCE",
            VendorType::Siu => "SIU",
            VendorType::LegalCounsel => "LEGAL_COUNSEL",
            VendorType::NurseCaseManager => "NURSE_CASE_MANAGER",
            VendorType::Subrogation => "SUBROGATION",
            VendorType::SalvageRecovery => "SALVAGE_RECOVERY",
            VendorType::Restoration => "RESTORATION",
            VendorType::MedicalBillReview => "MEDICAL_BILL_REVIEW",
            VendorType::ExpertWitness => "EXPERT_WITNESS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum W9Status {
    Pending,
    Received,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Ach,
    Check,
    Wire,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentTerms {
    #[serde(rename = "NET_30")]
    Net30,
    #[serde(rename = "NET_45")]
    Net45,
    #[serde(rename = "NET_60")]
    Net60,
}

impl PaymentTerms {
    /// Days until an invoice under these terms is due
    pub fn days(&self) -> u64 {
        match self {
            PaymentTerms::Net30 => 30,
            PaymentTerms::Net45 => 45,
            PaymentTerms::Net60 => 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAddress {
    pub street1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorContact {
    pub id: String,
    /// PRIMARY, BILLING or OPERATIONS
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: String,
    pub license_number: String,
    pub state: String,
    pub expiration_date: NaiveDate,
    pub status: String,
}

/// How and when a vendor gets paid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfiguration {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance_address: Option<String>,
    pub terms: PaymentTerms,
    pub currency: String,
    #[serde(default)]
    pub tax_withholding: bool,
    #[serde(default)]
    pub requires1099: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub legal_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dba: Option<String>,
    pub status: VendorStatus,
    pub vendor_type: VendorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub tin: String,
    pub w9_status: W9Status,
    pub corporate_address: VendorAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailing_address: Option<VendorAddress>,
    #[serde(default)]
    pub service_territory: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub contacts: Vec<VendorContact>,
    pub payment_config: PaymentConfiguration,
    pub created_date: DateTime<Utc>,
    pub created_by: String,
    pub last_modified_date: DateTime<Utc>,
    pub last_modified_by: String,
}

/// Fields supplied when onboarding a vendor
#[derive(Debug, Clone)]
pub struct VendorDraft {
    pub legal_name: String,
    pub dba: Option<String>,
    pub status: Option<VendorStatus>,
    pub vendor_type: VendorType,
    pub specialty: Option<String>,
    pub tin: String,
    pub w9_status: Option<W9Status>,
    pub corporate_address: VendorAddress,
    pub mailing_address: Option<VendorAddress>,
    pub service_territory: Vec<String>,
    pub licenses: Vec<License>,
    pub contacts: Vec<VendorContact>,
    pub payment_config: PaymentConfiguration,
}

#[derive(Debug, Clone, Default)]
pub struct VendorPatch {
    pub legal_name: Option<String>,
    pub dba: Option<String>,
    pub status: Option<VendorStatus>,
    pub vendor_type: Option<VendorType>,
    pub specialty: Option<String>,
    pub tin: Option<String>,
    pub w9_status: Option<W9Status>,
    pub corporate_address: Option<VendorAddress>,
    pub mailing_address: Option<VendorAddress>,
    pub service_territory: Option<Vec<String>>,
    pub licenses: Option<Vec<License>>,
    pub contacts: Option<Vec<VendorContact>>,
    pub payment_config: Option<PaymentConfiguration>,
}

impl Vendor {
    /// Onboards a vendor; new vendors start as PROSPECTIVE unless told otherwise
    pub fn create(draft: VendorDraft, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        let created_by = created_by.into();

        Self {
            id: VendorId::new(),
            legal_name: draft.legal_name,
            dba: draft.dba,
            status: draft.status.unwrap_or(VendorStatus::Prospective),
            vendor_type: draft.vendor_type,
            specialty: draft.specialty,
            tin: draft.tin,
            w9_status: draft.w9_status.unwrap_or(W9Status::Pending),
            corporate_address: draft.corporate_address,
            mailing_address: draft.mailing_address,
            service_territory: draft.service_territory,
            licenses: draft.licenses,
            contacts: draft.contacts,
            payment_config: draft.payment_config,
            created_date: now,
            last_modified_by: created_by.clone(),
            created_by,
            last_modified_date: now,
        }
    }

    /// Merges a partial update and stamps the modification audit fields
    pub fn apply_patch(&mut self, patch: VendorPatch, modified_by: impl Into<String>) {
        if let Some(v) = patch.legal_name {
            self.legal_name = v;
        }
        if let Some(v) = patch.dba {
            self.dba = Some(v);
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.vendor_type {
            self.vendor_type = v;
        }
        if let Some(v) = patch.specialty {
            self.specialty = Some(v);
        }
        if let Some(v) = patch.tin {
            self.tin = v;
        }
        if let Some(v) = patch.w9_status {
            self.w9_status = v;
        }
        if let Some(v) = patch.corporate_address {
            self.corporate_address = v;
        }
        if let Some(v) = patch.mailing_address {
            self.mailing_address = Some(v);
        }
        if let Some(v) = patch.service_territory {
            self.service_territory = v;
        }
        if let Some(v) = patch.licenses {
            self.licenses = v;
        }
        if let Some(v) = patch.contacts {
            self.contacts = v;
        }
        if let Some(v) = patch.payment_config {
            self.payment_config = v;
        }

        self.last_modified_date = Utc::now();
        self.last_modified_by = modified_by.into();
    }

    /// Primary contact, if one is flagged
    pub fn primary_contact(&self) -> Option<&VendorContact> {
        self.contacts.iter().find(|c| c.is_primary)
    }

    /// Query keys understood by the vendor listing
    pub fn filter_spec() -> FilterSpec<Self> {
        FilterSpec::new()
            .exact("status", |v: &Vendor| Some(Cow::Borrowed(v.status.as_str())))
            .exact("type", |v: &Vendor| Some(Cow::Borrowed(v.vendor_type.as_str())))
            .substring("search", |v: &Vendor| Some(Cow::Borrowed(v.legal_name.as_str())))
    }
}

impl Record for Vendor {
    const ENTITY: &'static str = "Vendor";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}
