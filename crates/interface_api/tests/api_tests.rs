//! HTTP tests for interface_api

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use core_kernel::Timezone;
use infra_store::Stores;
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};
use test_utils::{assert_error_envelope, assert_success_envelope, ClaimNumbers};

fn server_with(stores: Stores) -> TestServer {
    let state = AppState::new(stores, ApiConfig::default()).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

/// Server over the demo data, seeded for the same "today" the handlers use
fn seeded_server() -> TestServer {
    server_with(Stores::seeded(Timezone::default().today()).unwrap())
}

fn ids(data: &Value) -> Vec<String> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or_else(|| panic!("expected a number, got {}", value))
}

// ============================================================================
// Envelope Tests
// ============================================================================

mod envelope_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let response = seeded_server().get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_every_store() {
        let body = seeded_server().get("/health/ready").await.json::<Value>();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["stores"].as_array().unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let response = seeded_server()
            .get("/api/v1/adjusters")
            .add_header(
                HeaderName::from_static("x-request-id"),
                HeaderValue::from_static("req-abc-123"),
            )
            .await;

        assert_eq!(response.header("x-request-id"), "req-abc-123");
        assert_eq!(response.json::<Value>()["metadata"]["requestId"], "req-abc-123");
    }

    #[tokio::test]
    async fn test_request_id_is_generated_when_absent() {
        let response = seeded_server().get("/api/v1/adjusters").await;
        let body = response.json::<Value>();

        let generated = body["metadata"]["requestId"].as_str().unwrap().to_string();
        assert!(!generated.is_empty());
        assert_eq!(response.header("x-request-id").to_str().unwrap(), generated);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_envelope() {
        let response = seeded_server().get("/api/v1/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_envelope(&response.json::<Value>(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_malformed_json_is_validation() {
        let response = seeded_server()
            .post("/api/v1/time-entries")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&response.json::<Value>(), "VALIDATION");
    }
}

// ============================================================================
// Time Entry Tests
// ============================================================================

mod time_entry_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_filters_by_adjuster_and_status() {
        let response = seeded_server()
            .get("/api/v1/time-entries")
            .add_query_param("adjusterId", "ADJ-001")
            .add_query_param("status", "DRAFT")
            .await;

        let body = response.json::<Value>();
        assert_eq!(ids(assert_success_envelope(&body)), vec!["TIME-001"]);
    }

    #[tokio::test]
    async fn test_list_rejects_bad_date() {
        let response = seeded_server()
            .get("/api/v1/time-entries")
            .add_query_param("startDate", "02/01/2024")
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&response.json::<Value>(), "VALIDATION");
    }

    #[tokio::test]
    async fn test_stats_for_adjuster() {
        let body = seeded_server()
            .get("/api/v1/time-entries/stats")
            .add_query_param("adjusterId", "ADJ-001")
            .await
            .json::<Value>();
        let stats = assert_success_envelope(&body);

        assert_eq!(number(&stats["todayHours"]), 1.5);
        assert_eq!(number(&stats["weekHours"]), 4.95);
        assert_eq!(stats["weekHours"], stats["monthHours"]);
        assert_eq!(stats["pendingEntries"], 1);
        assert_eq!(stats["autoCaptured"], 1);
    }

    #[tokio::test]
    async fn test_create_defaults_amount_and_status() {
        let server = seeded_server();
        let response = server
            .post("/api/v1/time-entries")
            .json(&json!({
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "adjusterId": "ADJ-002",
                "activityCode": "PHONE_CALL",
                "duration": 1.5,
                "rate": 95
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        let entry = assert_success_envelope(&body);
        assert!(entry["id"].as_str().unwrap().starts_with("TIME-"));
        assert_eq!(entry["status"], "DRAFT");
        assert_eq!(entry["captureType"], "MANUAL");
        assert_eq!(number(&entry["amount"]), 142.5);

        let listed = server
            .get("/api/v1/time-entries")
            .add_query_param("claimNumber", ClaimNumbers::AUTO_LIABILITY)
            .await
            .json::<Value>();
        assert_eq!(listed["data"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_requires_keys_and_non_negative_hours() {
        let server = seeded_server();

        let missing = server
            .post("/api/v1/time-entries")
            .json(&json!({ "claimNumber": "", "adjusterId": "ADJ-001", "duration": 1, "rate": 100 }))
            .await;
        missing.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&missing.json::<Value>(), "VALIDATION");

        let negative = server
            .post("/api/v1/time-entries")
            .json(&json!({
                "claimNumber": ClaimNumbers::WORKERS_COMP,
                "adjusterId": "ADJ-001",
                "duration": -1,
                "rate": 100
            }))
            .await;
        negative.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_amounts_beyond_the_ceiling_are_rejected() {
        let server = seeded_server();

        let huge_rate = server
            .post("/api/v1/time-entries")
            .json(&json!({
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "adjusterId": "ADJ-002",
                "duration": 24,
                "rate": 1e28
            }))
            .await;
        huge_rate.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&huge_rate.json::<Value>(), "VALIDATION");

        for _ in 0..2 {
            let huge_amount = server
                .post("/api/v1/time-entries")
                .json(&json!({
                    "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                    "adjusterId": "ADJ-002",
                    "duration": 1,
                    "rate": 95,
                    "amount": 5e28
                }))
                .await;
            huge_amount.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }

        let detail = server
            .get(&format!("/api/v1/claims/{}", ClaimNumbers::AUTO_LIABILITY))
            .await;
        detail.assert_status_ok();
        assert_eq!(detail.json::<Value>()["data"]["billingSummary"]["totalEntries"], 2);
    }

    #[tokio::test]
    async fn test_patch_cannot_push_amount_past_ceiling() {
        let response = seeded_server()
            .patch("/api/v1/time-entries/TIME-001")
            .json(&json!({ "amount": 5e28 }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_patch_merges_fields() {
        let body = seeded_server()
            .patch("/api/v1/time-entries/TIME-001")
            .json(&json!({ "notes": "Reviewed IME report", "duration": 2 }))
            .await
            .json::<Value>();
        let entry = assert_success_envelope(&body);

        assert_eq!(entry["notes"], "Reviewed IME report");
        assert_eq!(number(&entry["duration"]), 2.0);
        assert_eq!(entry["activityCode"], "FILE_REVIEW");
    }

    #[tokio::test]
    async fn test_patch_unknown_is_not_found() {
        let response = seeded_server()
            .patch("/api/v1/time-entries/TIME-404")
            .json(&json!({ "notes": "x" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_envelope(&response.json::<Value>(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_draft_then_locked() {
        let server = seeded_server();

        let deleted = server.delete("/api/v1/time-entries/TIME-001").await;
        deleted.assert_status_ok();
        let body = deleted.json::<Value>();
        assert_eq!(body["success"], true);
        assert!(body.get("data").is_none());

        let gone = server.patch("/api/v1/time-entries/TIME-001").json(&json!({})).await;
        gone.assert_status(StatusCode::NOT_FOUND);

        let billed = server.delete("/api/v1/time-entries/TIME-003").await;
        billed.assert_status(StatusCode::CONFLICT);
        assert_error_envelope(&billed.json::<Value>(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_submit_counts_actual_transitions() {
        let server = seeded_server();
        let body = server
            .post("/api/v1/time-entries/submit")
            .json(&json!({ "entryIds": ["TIME-001", "TIME-003", "TIME-404", "TIME-004"] }))
            .await
            .json::<Value>();

        assert_eq!(assert_success_envelope(&body)["submitted"], 2);

        let submitted = server
            .get("/api/v1/time-entries")
            .add_query_param("status", "SUBMITTED")
            .await
            .json::<Value>();
        let submitted = ids(&submitted["data"]);
        assert!(submitted.contains(&"TIME-001".to_string()));
        assert!(submitted.contains(&"TIME-004".to_string()));
    }
}

// ============================================================================
// Expense Entry Tests
// ============================================================================

mod expense_entry_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_filter() {
        let server = seeded_server();
        let created = server
            .post("/api/v1/expense-entries")
            .json(&json!({
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "adjusterId": "ADJ-002",
                "expenseTypeId": "EXT-001",
                "expenseCode": "MILEAGE",
                "amount": 40.2,
                "quantity": 60
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body = created.json::<Value>();
        assert!(assert_success_envelope(&body)["id"].as_str().unwrap().starts_with("EXP-"));

        let listed = server
            .get("/api/v1/expense-entries")
            .add_query_param("adjusterId", "ADJ-002")
            .await
            .json::<Value>();
        assert_eq!(listed["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_submitted_expense_cannot_be_deleted() {
        let response = seeded_server().delete("/api/v1/expense-entries/EXP-002").await;
        response.assert_status(StatusCode::CONFLICT);

        let draft = seeded_server().delete("/api/v1/expense-entries/EXP-003").await;
        draft.assert_status_ok();
    }

    #[tokio::test]
    async fn test_expense_beyond_the_ceiling_is_rejected() {
        let response = seeded_server()
            .post("/api/v1/expense-entries")
            .json(&json!({
                "claimNumber": ClaimNumbers::WORKERS_COMP,
                "adjusterId": "ADJ-001",
                "amount": 5e28
            }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&response.json::<Value>(), "VALIDATION");
    }

    #[tokio::test]
    async fn test_negative_quantity_is_rejected() {
        let response = seeded_server()
            .patch("/api/v1/expense-entries/EXP-001")
            .json(&json!({ "quantity": -3 }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_filters_by_carrier_substring() {
        let body = seeded_server()
            .get("/api/v1/claims")
            .add_query_param("carrierName", "acme")
            .await
            .json::<Value>();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_detail_has_entries_and_summary() {
        let body = seeded_server()
            .get(&format!("/api/v1/claims/{}", ClaimNumbers::WORKERS_COMP))
            .await
            .json::<Value>();
        let detail = assert_success_envelope(&body);

        assert_eq!(detail["claimNumber"], ClaimNumbers::WORKERS_COMP);
        assert_eq!(detail["timeEntries"].as_array().unwrap().len(), 4);
        assert_eq!(detail["expenseEntries"].as_array().unwrap().len(), 2);
        assert_eq!(detail["billingSummary"]["totalEntries"], 4);
        assert_eq!(detail["billingSummary"]["autoCapturedCount"], 1);
        assert_eq!(number(&detail["billingSummary"]["autoCapturedPercentage"]), 25.0);
        assert_eq!(number(&detail["billingSummary"]["totalExpenses"]), 118.5);
    }

    #[tokio::test]
    async fn test_unknown_claim() {
        let response = seeded_server()
            .get(&format!("/api/v1/claims/{}", ClaimNumbers::UNKNOWN))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_envelope(&response.json::<Value>(), "NOT_FOUND");
    }
}

// ============================================================================
// Reference Data Tests
// ============================================================================

mod reference_tests {
    use super::*;

    #[tokio::test]
    async fn test_adjusters() {
        let server = seeded_server();
        let all = server.get("/api/v1/adjusters").await.json::<Value>();
        assert_eq!(all["data"].as_array().unwrap().len(), 3);

        let one = server.get("/api/v1/adjusters/ADJ-002").await.json::<Value>();
        assert_eq!(one["data"]["lastName"], "Chen");

        server
            .get("/api/v1/adjusters/ADJ-999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_activity_codes_and_expense_types() {
        let server = seeded_server();
        let codes = server
            .get("/api/v1/activity-codes")
            .add_query_param("code", "PHONE_CALL")
            .await
            .json::<Value>();
        assert_eq!(ids(&codes["data"]), vec!["ACT-002"]);

        let types = server.get("/api/v1/expense-types").await.json::<Value>();
        assert_eq!(types["data"].as_array().unwrap().len(), 4);
    }
}

// ============================================================================
// Vendor, Referral and Invoice Tests
// ============================================================================

mod vendor_tests {
    use super::*;

    fn new_vendor() -> Value {
        json!({
            "legalName": "Northshore Field Appraisals",
            "vendorType": "APPRAISER",
            "tin": "36-2000111",
            "corporateAddress": {
                "street1": "77 Lake St",
                "city": "Evanston",
                "state": "IL",
                "postalCode": "60201",
                "country": "US"
            },
            "createdBy": "USR-003"
        })
    }

    #[tokio::test]
    async fn test_vendor_stats() {
        let body = seeded_server().get("/api/v1/vendors/stats").await.json::<Value>();
        assert_eq!(
            assert_success_envelope(&body),
            &json!({ "totalActive": 2, "totalInactive": 1, "pendingOnboarding": 1, "totalReferrals": 3 })
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let body = seeded_server()
            .get("/api/v1/vendors")
            .add_query_param("search", "eagle")
            .await
            .json::<Value>();
        assert_eq!(ids(&body["data"]), vec!["VEN-002"]);
    }

    #[tokio::test]
    async fn test_onboard_and_patch_vendor() {
        let server = seeded_server();
        let created = server.post("/api/v1/vendors").json(&new_vendor()).await;
        created.assert_status(StatusCode::CREATED);
        let body = created.json::<Value>();
        let vendor = assert_success_envelope(&body);
        assert_eq!(vendor["status"], "PROSPECTIVE");
        assert_eq!(vendor["paymentConfig"]["terms"], "NET_30");
        let id = vendor["id"].as_str().unwrap().to_string();

        let patched = server
            .patch(&format!("/api/v1/vendors/{}", id))
            .json(&json!({ "status": "ACTIVE", "modifiedBy": "USR-004" }))
            .await
            .json::<Value>();
        assert_eq!(patched["data"]["status"], "ACTIVE");
        assert_eq!(patched["data"]["lastModifiedBy"], "USR-004");
        assert_eq!(patched["data"]["createdBy"], "USR-003");
    }

    #[tokio::test]
    async fn test_referral_lifecycle() {
        let server = seeded_server();
        let created = server
            .post("/api/v1/referrals")
            .json(&json!({
                "vendorId": "VEN-002",
                "claimNumber": ClaimNumbers::WORKERS_COMP,
                "claimantName": "John Doe",
                "serviceType": "SURVEILLANCE",
                "instructions": "Two days of activity checks"
            }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let body = created.json::<Value>();
        let referral = assert_success_envelope(&body);
        assert_eq!(referral["status"], "ASSIGNED");
        assert_eq!(referral["vendorName"], "Eagle Eye Surveillance LLC");
        assert!(referral["referralNumber"].as_str().unwrap().ends_with("-0004"));
        let id = referral["id"].as_str().unwrap().to_string();

        let completed = server
            .patch(&format!("/api/v1/referrals/{}/status", id))
            .json(&json!({ "status": "COMPLETE", "notes": "Report uploaded" }))
            .await
            .json::<Value>();
        assert_eq!(completed["data"]["status"], "COMPLETE");
        assert_eq!(completed["data"]["slaBreach"], false);
        assert!(completed["data"]["completedDate"].is_string());

        server
            .patch(&format!("/api/v1/referrals/{}/status", id))
            .json(&json!({ "status": "REVIEWED" }))
            .await
            .assert_status_ok();

        let reopened = server
            .patch(&format!("/api/v1/referrals/{}/status", id))
            .json(&json!({ "status": "ASSIGNED" }))
            .await;
        reopened.assert_status(StatusCode::CONFLICT);
        assert_error_envelope(&reopened.json::<Value>(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_inactive_vendor_cannot_take_referrals() {
        let response = seeded_server()
            .post("/api/v1/referrals")
            .json(&json!({
                "vendorId": "VEN-003",
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "serviceType": "APPRAISAL"
            }))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_referral_stats() {
        let body = seeded_server().get("/api/v1/referrals/stats").await.json::<Value>();
        let stats = assert_success_envelope(&body);
        assert_eq!(stats["totalOpen"], 1);
        assert_eq!(stats["totalCompleted"], 2);
        assert_eq!(stats["slaBreaches"], 1);
    }

    #[tokio::test]
    async fn test_invoice_review() {
        let server = seeded_server();
        let submitted = server
            .post("/api/v1/invoices")
            .json(&json!({
                "referralId": "REF-001",
                "vendorId": "VEN-002",
                "claimNumber": ClaimNumbers::WORKERS_COMP,
                "invoiceDate": "2024-03-01",
                "totalAmount": 900
            }))
            .await;
        submitted.assert_status(StatusCode::CREATED);
        let body = submitted.json::<Value>();
        let invoice = assert_success_envelope(&body);
        assert_eq!(invoice["status"], "PENDING_REVIEW");
        // VEN-002 is paid NET 45
        assert_eq!(invoice["dueDate"], "2024-04-15");
        let id = invoice["id"].as_str().unwrap().to_string();

        let approved = server
            .post(&format!("/api/v1/invoices/{}/approve", id))
            .json(&json!({}))
            .await
            .json::<Value>();
        assert_eq!(approved["data"]["status"], "APPROVED");
        assert_eq!(number(&approved["data"]["approvedAmount"]), 900.0);

        let rejected = server
            .post(&format!("/api/v1/invoices/{}/reject", id))
            .json(&json!({ "reason": "duplicate" }))
            .await;
        rejected.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_approval_cannot_exceed_invoice_total() {
        let server = seeded_server();
        let response = server
            .post("/api/v1/invoices/INV-001/approve")
            .json(&json!({ "approvedAmount": 5000 }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&response.json::<Value>(), "VALIDATION");

        let body = server.get("/api/v1/invoices/INV-001").await.json::<Value>();
        let invoice = assert_success_envelope(&body);
        assert_eq!(invoice["status"], "PENDING_REVIEW");
        assert!(invoice.get("approvedAmount").is_none());
    }

    #[tokio::test]
    async fn test_reject_requires_reason() {
        let response = seeded_server()
            .post("/api/v1/invoices/INV-001/reject")
            .json(&json!({ "reason": "" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_invoice_stats() {
        let body = seeded_server().get("/api/v1/invoices/stats").await.json::<Value>();
        let stats = assert_success_envelope(&body);
        assert_eq!(stats["totalPending"], 1);
        assert_eq!(stats["totalApproved"], 1);
        assert_eq!(stats["totalPaid"], 0);
        assert_eq!(number(&stats["totalAmount"]), 3550.0);
    }
}

// ============================================================================
// Integration Tests
// ============================================================================

mod integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_webhook_auto_bills_matching_event() {
        let server = seeded_server();
        let body = server
            .post("/api/v1/assure/events/webhook")
            .json(&json!({
                "eventCode": "PHONE_LOGGED",
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "eventData": { "callId": "CALL-77" }
            }))
            .await
            .json::<Value>();
        let ack = assert_success_envelope(&body);

        assert_eq!(ack["acknowledged"], true);
        assert_eq!(ack["event"]["autoBilled"], true);
        let entry = &ack["timeEntry"];
        assert_eq!(entry["captureType"], "AUTO");
        assert_eq!(entry["status"], "PENDING");
        assert_eq!(entry["adjusterId"], "ADJ-002");
        assert_eq!(number(&entry["duration"]), 0.25);
        assert_eq!(number(&entry["amount"]), 23.75);
        assert_eq!(entry["autoEventRef"], ack["event"]["id"]);

        let detail = server
            .get(&format!("/api/v1/claims/{}", ClaimNumbers::AUTO_LIABILITY))
            .await
            .json::<Value>();
        assert_eq!(detail["data"]["billingSummary"]["autoCapturedCount"], 1);
    }

    #[tokio::test]
    async fn test_webhook_records_unbilled_event() {
        let body = seeded_server()
            .post("/api/v1/assure/events/webhook")
            .json(&json!({
                "eventCode": "DOCUMENT_UPLOADED",
                "claimNumber": ClaimNumbers::WORKERS_COMP
            }))
            .await
            .json::<Value>();
        let ack = assert_success_envelope(&body);

        assert_eq!(ack["event"]["autoBilled"], false);
        assert!(ack.get("timeEntry").is_none());
    }

    #[tokio::test]
    async fn test_review_trigger_books_draft() {
        let body = seeded_server()
            .post("/api/v1/assure/events/webhook")
            .json(&json!({ "eventCode": "RESERVE_CHANGED", "claimNumber": ClaimNumbers::WORKERS_COMP }))
            .await
            .json::<Value>();
        assert_eq!(body["data"]["timeEntry"]["status"], "DRAFT");
    }

    #[tokio::test]
    async fn test_claim_context_and_payment() {
        let server = seeded_server();
        let context = server
            .get(&format!("/api/v1/assure/claims/{}/context", ClaimNumbers::WORKERS_COMP))
            .await
            .json::<Value>();
        assert_eq!(context["data"]["carrierName"], "Acme Insurance");

        let payment = server
            .post(&format!("/api/v1/assure/claims/{}/payments", ClaimNumbers::WORKERS_COMP))
            .json(&json!({
                "payeeId": "VEN-001",
                "payeeName": "Midwest IME Services",
                "payeeType": "VENDOR",
                "invoiceReference": "INV-2024-0001",
                "claimNumber": ClaimNumbers::WORKERS_COMP,
                "amount": 1150,
                "reserveType": "MEDICAL",
                "serviceDescription": "Independent medical exam",
                "serviceDate": "2024-02-10"
            }))
            .await
            .json::<Value>();
        let status = assert_success_envelope(&payment);
        assert_eq!(status["status"], "PENDING");
        assert!(status["expectedPaymentDate"].is_string());

        let id = status["paymentId"].as_str().unwrap();
        let paid = server
            .get(&format!("/api/v1/assure/payments/{}/status", id))
            .await
            .json::<Value>();
        assert_eq!(paid["data"]["status"], "COMPLETED");
        assert!(paid["data"]["checkNumber"].as_str().unwrap().starts_with("CHK-"));
    }

    #[tokio::test]
    async fn test_legal_reserve_payment_is_rejected() {
        let response = seeded_server()
            .post(&format!("/api/v1/assure/claims/{}/payments", ClaimNumbers::AUTO_LIABILITY))
            .json(&json!({
                "payeeId": "VEN-003",
                "payeeName": "Prairie Auto Appraisals",
                "payeeType": "VENDOR",
                "invoiceReference": "INV-X",
                "claimNumber": ClaimNumbers::AUTO_LIABILITY,
                "amount": 300,
                "reserveType": "LEGAL",
                "serviceDescription": "Appraisal",
                "serviceDate": "2024-02-01"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_error_envelope(&response.json::<Value>(), "VALIDATION");
    }

    #[tokio::test]
    async fn test_activity_for_unknown_claim() {
        let response = seeded_server()
            .post(&format!("/api/v1/assure/claims/{}/activity", ClaimNumbers::UNKNOWN))
            .json(&json!({ "activityType": "NOTE", "description": "x" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_error_envelope(&response.json::<Value>(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_servicenow_case_flow() {
        let server = seeded_server();
        let created = server
            .post("/api/v1/servicenow/cases")
            .json(&json!({ "referral": { "serviceType": "IME", "referralId": "REF-001" } }))
            .await
            .json::<Value>();
        let case = assert_success_envelope(&created);
        assert_eq!(case["status"], "ASSIGNED");
        assert!(case["caseNumber"].as_str().unwrap().starts_with("CSE-"));

        let fetched = server.get("/api/v1/servicenow/cases/CASE-1234").await.json::<Value>();
        assert_eq!(fetched["data"]["caseNumber"], "CSE-1234");
        assert_eq!(fetched["data"]["status"], "IN_PROGRESS");

        let updated = server
            .patch("/api/v1/servicenow/cases/CASE-1234")
            .json(&json!({ "status": "RESOLVED", "milestone": "REPORT_SENT" }))
            .await
            .json::<Value>();
        assert_eq!(updated["data"]["status"], "RESOLVED");

        let sent = server
            .post("/api/v1/servicenow/notifications")
            .json(&json!({ "recipientId": "VEN-001", "notificationType": "EMAIL", "message": "New referral" }))
            .await
            .json::<Value>();
        assert_eq!(sent["data"]["deliveryStatus"], "SENT");
    }
}

// ============================================================================
// Empty Store Tests
// ============================================================================

mod empty_store_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_stats_are_zero() {
        let server = server_with(Stores::empty());
        let body = server.get("/api/v1/time-entries/stats").await.json::<Value>();
        let stats = assert_success_envelope(&body);
        assert_eq!(number(&stats["todayHours"]), 0.0);
        assert_eq!(stats["pendingEntries"], 0);

        let referrals = server.get("/api/v1/referrals/stats").await.json::<Value>();
        assert_eq!(number(&referrals["data"]["avgCompletionTime"]), 0.0);
    }
}
