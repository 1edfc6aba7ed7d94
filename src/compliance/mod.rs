//! Receipt compliance and Australian retail validators.
//!
//! ATO rules require a tax invoice for sales over $75 (GST-exclusive
//! threshold aside, retail practice keys off the receipt total): the
//! receipt must identify the supplier, its ABN, the date, and show the
//! GST amount separately. Failures are reported as data rather than
//! errors so callers can repair a record and re-check it.

mod address;
mod hours;

pub use address::*;
pub use hours::*;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Business, Transaction};

/// Receipt total above which the full supplier detail set is mandatory.
pub const RECEIPT_THRESHOLD: Decimal = dec!(75.00);

/// Field view of a transaction record for compliance checking.
///
/// Fields are optional because the checker also runs against untrusted
/// or partially populated records. `None`, blank strings, and zero
/// amounts all count as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub business_name: Option<String>,
    pub abn: Option<String>,
    pub transaction_datetime: Option<NaiveDateTime>,
    pub receipt_number: Option<String>,
    pub total_inc_gst: Option<Decimal>,
    pub gst_amount: Option<Decimal>,
}

impl ReceiptRecord {
    /// Assemble the checkable field set for a transaction issued by
    /// the given business.
    pub fn for_transaction(business: &Business, transaction: &Transaction) -> Self {
        Self {
            business_name: Some(business.business_name.clone()),
            abn: Some(transaction.business_abn.clone()),
            transaction_datetime: Some(transaction.transaction_datetime),
            receipt_number: Some(transaction.receipt_number.clone()),
            total_inc_gst: Some(transaction.total_inc_gst),
            gst_amount: Some(transaction.gst_amount),
        }
    }
}

/// Outcome of a receipt compliance check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptCompliance {
    pub compliant: bool,
    pub violations: Vec<String>,
}

/// Check the mandatory receipt field set for transactions over the
/// disclosure threshold.
///
/// Receipts totalling at or under $75 always pass. Above that, the
/// identity fields are checked in a fixed order, then the GST amount
/// is required separately with its own message, since a tax invoice
/// must show the GST breakdown rather than just another field.
pub fn check_receipt_fields(record: &ReceiptRecord) -> ReceiptCompliance {
    let mut violations = Vec::new();
    let total = record.total_inc_gst.unwrap_or(Decimal::ZERO);

    if total > RECEIPT_THRESHOLD {
        if !present_str(&record.business_name) {
            violations.push(missing("business_name"));
        }
        if !present_str(&record.abn) {
            violations.push(missing("abn"));
        }
        if record.transaction_datetime.is_none() {
            violations.push(missing("transaction_datetime"));
        }
        if !present_str(&record.receipt_number) {
            violations.push(missing("receipt_number"));
        }
        if !present_amount(record.total_inc_gst) {
            violations.push(missing("total_inc_gst"));
        }

        if !present_amount(record.gst_amount) {
            violations.push("GST breakdown required for tax invoice".to_string());
        }
    }

    if !violations.is_empty() {
        debug!(
            total = %total,
            violations = violations.len(),
            "receipt failed compliance check"
        );
    }

    ReceiptCompliance {
        compliant: violations.is_empty(),
        violations,
    }
}

fn missing(field: &str) -> String {
    format!("Missing required field: {field}")
}

fn present_str(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn present_amount(value: Option<Decimal>) -> bool {
    value.is_some_and(|d| !d.is_zero())
}
