//! Vendor, referral and invoice DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use domain_vendor::{
    InvoiceDraft, License, PaymentConfiguration, PaymentMethod, PaymentTerms, ReferralDraft,
    ReferralStatus, VendorAddress, VendorContact, VendorDraft, VendorPatch, VendorStatus, VendorType,
    W9Status,
};

use super::non_negative;

/// Used when a new vendor arrives without payment details
fn default_payment_config() -> PaymentConfiguration {
    PaymentConfiguration {
        method: PaymentMethod::Check,
        bank_name: None,
        remittance_address: None,
        terms: PaymentTerms::Net30,
        currency: "USD".to_string(),
        tax_withholding: false,
        requires1099: true,
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, message = "legalName is required"))]
    pub legal_name: String,
    pub dba: Option<String>,
    pub status: Option<VendorStatus>,
    pub vendor_type: VendorType,
    pub specialty: Option<String>,
    #[serde(default)]
    pub tin: String,
    pub w9_status: Option<W9Status>,
    pub corporate_address: VendorAddress,
    pub mailing_address: Option<VendorAddress>,
    #[serde(default)]
    pub service_territory: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<License>,
    #[serde(default)]
    pub contacts: Vec<VendorContact>,
    pub payment_config: Option<PaymentConfiguration>,
    pub created_by: Option<String>,
}

impl CreateVendorRequest {
    /// Splits the request into the draft and the acting user
    pub fn into_draft(self) -> (VendorDraft, Option<String>) {
        let draft = VendorDraft {
            legal_name: self.legal_name,
            dba: self.dba,
            status: self.status,
            vendor_type: self.vendor_type,
            specialty: self.specialty,
            tin: self.tin,
            w9_status: self.w9_status,
            corporate_address: self.corporate_address,
            mailing_address: self.mailing_address,
            service_territory: self.service_territory,
            licenses: self.licenses,
            contacts: self.contacts,
            payment_config: self.payment_config.unwrap_or_else(default_payment_config),
        };
        (draft, self.created_by)
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVendorRequest {
    #[validate(length(min = 1, message = "legalName must not be blank"))]
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
    pub modified_by: Option<String>,
}

impl UpdateVendorRequest {
    pub fn into_patch(self) -> (VendorPatch, Option<String>) {
        let patch = VendorPatch {
            legal_name: self.legal_name,
            dba: self.dba,
            status: self.status,
            vendor_type: self.vendor_type,
            specialty: self.specialty,
            tin: self.tin,
            w9_status: self.w9_status,
            corporate_address: self.corporate_address,
            mailing_address: self.mailing_address,
            service_territory: self.service_territory,
            licenses: self.licenses,
            contacts: self.contacts,
            payment_config: self.payment_config,
        };
        (patch, self.modified_by)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralRequest {
    #[validate(length(min = 1, message = "vendorId is required"))]
    pub vendor_id: String,
    #[serde(default)]
    pub vendor_name: String,
    #[validate(length(min = 1, message = "claimNumber is required"))]
    pub claim_number: String,
    #[serde(default)]
    pub claimant_name: String,
    #[validate(length(min = 1, message = "serviceType is required"))]
    pub service_type: String,
    #[serde(default)]
    pub service_category: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub instructions: String,
    #[validate(custom(function = "non_negative"))]
    pub estimated_cost: Option<Decimal>,
    #[serde(default)]
    pub approval_required: bool,
    pub created_by: Option<String>,
}

impl CreateReferralRequest {
    pub fn into_draft(self) -> (ReferralDraft, Option<String>) {
        let draft = ReferralDraft {
            vendor_id: self.vendor_id,
            vendor_name: self.vendor_name,
            claim_number: self.claim_number,
            claimant_name: self.claimant_name,
            service_type: self.service_type,
            service_category: self.service_category,
            due_date: self.due_date,
            instructions: self.instructions,
            estimated_cost: self.estimated_cost,
            approval_required: self.approval_required,
        };
        (draft, self.created_by)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReferralStatusRequest {
    pub status: ReferralStatus,
    pub notes: Option<String>,
    pub updated_by: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInvoiceRequest {
    #[serde(default)]
    pub referral_id: String,
    #[validate(length(min = 1, message = "vendorId is required"))]
    pub vendor_id: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub claim_number: String,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[validate(custom(function = "non_negative"))]
    pub total_amount: Decimal,
    pub submitted_by: Option<String>,
}

impl From<SubmitInvoiceRequest> for InvoiceDraft {
    fn from(req: SubmitInvoiceRequest) -> Self {
        InvoiceDraft {
            referral_id: req.referral_id,
            vendor_id: req.vendor_id,
            vendor_name: req.vendor_name,
            claim_number: req.claim_number,
            invoice_date: req.invoice_date,
            due_date: req.due_date,
            total_amount: req.total_amount,
            submitted_by: req.submitted_by,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApproveInvoiceRequest {
    #[validate(custom(function = "non_negative"))]
    pub approved_amount: Option<Decimal>,
    pub approved_by: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RejectInvoiceRequest {
    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}
