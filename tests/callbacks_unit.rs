use serde_json::json;

use ringside_server::models::PaymentStatus;
use ringside_server::payments::gateway::{
    parse_chillpay, parse_modernpay, ChillPayCallback, Gateway, ModernPayCallback,
};
use ringside_server::payments::reconcile::{interpret_update, ReconcileResult};

#[test]
fn modernpay_success_payload_maps_to_completed() {
    let payload: ModernPayCallback = serde_json::from_value(json!({
        "status": "success",
        "transactionId": "MP-20250314-001",
        "amount": 1600,
        "paymentMethod": "promptpay",
        "bankCode": "KBANK",
        "bankRefCode": "KB-778",
        "paymentDate": "2025-03-14 21:15:00"
    }))
    .expect("parse modernpay payload");

    let outcome = parse_modernpay(&payload);
    assert_eq!(outcome.status, PaymentStatus::Completed);
    assert_eq!(outcome.transaction_id.as_deref(), Some("MP-20250314-001"));
    assert_eq!(outcome.payment_method.as_deref(), Some("promptpay"));
    assert_eq!(outcome.bank_code.as_deref(), Some("KBANK"));
    assert_eq!(outcome.bank_ref_code.as_deref(), Some("KB-778"));
    assert_eq!(outcome.payment_date.as_deref(), Some("2025-03-14 21:15:00"));
}

#[test]
fn modernpay_zero_string_is_success_but_number_is_not() {
    let zero_string: ModernPayCallback =
        serde_json::from_value(json!({ "status": "0" })).expect("parse");
    assert_eq!(parse_modernpay(&zero_string).status, PaymentStatus::Completed);

    // A numeric 0 is not the literal string "0".
    let zero_number: Result<ModernPayCallback, _> =
        serde_json::from_value(json!({ "status": 0 }));
    assert!(zero_number.is_err());
}

#[test]
fn modernpay_failure_payload_maps_to_failed() {
    let payload: ModernPayCallback = serde_json::from_value(json!({
        "status": "declined",
        "transactionId": "MP-20250314-002"
    }))
    .expect("parse");

    let outcome = parse_modernpay(&payload);
    assert_eq!(outcome.status, PaymentStatus::Failed);
    assert_eq!(outcome.payment_method.as_deref(), Some("modernpay"));
}

#[test]
fn chillpay_success_requires_status_and_code_jointly() {
    let success = ChillPayCallback {
        status: Some("0".to_string()),
        code: Some("200".to_string()),
        transaction_id: Some("CP-1".to_string()),
        order_no: Some("ORD-55".to_string()),
        ..Default::default()
    };
    assert_eq!(parse_chillpay(&success).status, PaymentStatus::Completed);

    let wrong_code = ChillPayCallback {
        status: Some("0".to_string()),
        code: Some("201".to_string()),
        ..Default::default()
    };
    assert_eq!(parse_chillpay(&wrong_code).status, PaymentStatus::Failed);

    let wrong_status = ChillPayCallback {
        status: Some("2".to_string()),
        code: Some("200".to_string()),
        ..Default::default()
    };
    assert_eq!(parse_chillpay(&wrong_status).status, PaymentStatus::Failed);
}

#[test]
fn unknown_gateway_source_is_rejected() {
    assert_eq!(Gateway::parse("modernpay"), Some(Gateway::ModernPay));
    assert_eq!(Gateway::parse("chillpay"), Some(Gateway::ChillPay));
    assert_eq!(Gateway::parse("omise"), None);
}

#[test]
fn repeated_successful_callback_is_a_noop() {
    // First callback: row was PENDING, conditional update fires.
    let first = interpret_update(1, PaymentStatus::Completed, None);
    assert_eq!(first, ReconcileResult::Applied(PaymentStatus::Completed));

    // Second identical callback: zero rows affected, row already COMPLETED.
    let second = interpret_update(0, PaymentStatus::Completed, Some("COMPLETED".to_string()));
    assert_eq!(
        second,
        ReconcileResult::AlreadyTerminal("COMPLETED".to_string())
    );
}

#[test]
fn late_failure_callback_cannot_flip_a_completed_booking() {
    let result = interpret_update(0, PaymentStatus::Failed, Some("COMPLETED".to_string()));
    assert_eq!(
        result,
        ReconcileResult::AlreadyTerminal("COMPLETED".to_string())
    );
}
