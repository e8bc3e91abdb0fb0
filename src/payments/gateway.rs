use serde::Deserialize;
use uuid::Uuid;

use crate::models::PaymentStatus;

/// The payment processors whose callbacks we accept. Each encodes success
/// differently; parsing normalizes both into a [`CallbackOutcome`] so the
/// reconciler is written once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gateway {
    ModernPay,
    ChillPay,
}

impl Gateway {
    pub fn parse(source: &str) -> Option<Self> {
        match source.to_ascii_lowercase().as_str() {
            "modernpay" => Some(Gateway::ModernPay),
            "chillpay" => Some(Gateway::ChillPay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::ModernPay => "modernpay",
            Gateway::ChillPay => "chillpay",
        }
    }
}

/// ModernPay posts a JSON body. Success is the literal string "success" or
/// the literal string "0" in `status`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModernPayCallback {
    pub status: Option<String>,
    pub transaction_id: Option<String>,
    pub amount: Option<serde_json::Value>,
    pub payment_method: Option<String>,
    pub bank_code: Option<String>,
    pub bank_ref_code: Option<String>,
    pub payment_date: Option<String>,
}

/// ChillPay calls back with a GET and PascalCase query parameters. Success
/// requires Status == "0" AND Code == "200", jointly.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChillPayCallback {
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "TransactionId")]
    pub transaction_id: Option<String>,
    #[serde(rename = "Amount")]
    pub amount: Option<String>,
    #[serde(rename = "OrderNo")]
    pub order_no: Option<String>,
    #[serde(rename = "bookingId")]
    pub booking_id: Option<Uuid>,
}

/// Gateway-agnostic result of a callback, ready for the reconciler.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackOutcome {
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub payment_method: Option<String>,
    pub bank_code: Option<String>,
    pub bank_ref_code: Option<String>,
    pub payment_date: Option<String>,
    pub order_no: Option<String>,
    pub message: Option<String>,
}

pub fn parse_modernpay(payload: &ModernPayCallback) -> CallbackOutcome {
    let succeeded = matches!(payload.status.as_deref(), Some("success") | Some("0"));

    CallbackOutcome {
        status: if succeeded {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        },
        transaction_id: payload.transaction_id.clone(),
        payment_method: payload
            .payment_method
            .clone()
            .or_else(|| Some(Gateway::ModernPay.as_str().to_string())),
        bank_code: payload.bank_code.clone(),
        bank_ref_code: payload.bank_ref_code.clone(),
        payment_date: payload.payment_date.clone(),
        order_no: None,
        message: None,
    }
}

pub fn parse_chillpay(payload: &ChillPayCallback) -> CallbackOutcome {
    let succeeded =
        payload.status.as_deref() == Some("0") && payload.code.as_deref() == Some("200");

    CallbackOutcome {
        status: if succeeded {
            PaymentStatus::Completed
        } else {
            PaymentStatus::Failed
        },
        transaction_id: payload.transaction_id.clone(),
        payment_method: Some(Gateway::ChillPay.as_str().to_string()),
        bank_code: None,
        bank_ref_code: None,
        payment_date: None,
        order_no: payload.order_no.clone(),
        message: payload.message.clone(),
    }
}
