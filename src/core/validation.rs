use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::{PosError, ValidationError};
use super::types::*;
use crate::compliance::validate_postcode_state;
use crate::gst::{self, round_to_cash, round_to_cent};
use crate::abn;

/// Calculate the derived monetary fields of a transaction in place.
///
/// Each line's GST split is computed on the line total (inclusive unit
/// price times quantity); the exclusive unit price is the exclusive
/// subtotal divided by quantity, left unrounded. Transaction totals
/// are the sums of the line fields.
pub fn calculate_totals(transaction: &mut Transaction) -> Result<(), PosError> {
    for (i, line) in transaction.items.iter_mut().enumerate() {
        let line_total = round_to_cent(line.unit_price_inc_gst * line.quantity);
        let breakdown = gst::decompose(line_total, line.classification)
            .map_err(|e| PosError::Builder(format!("items[{i}]: {e}")))?;

        line.line_total_inc_gst = breakdown.inclusive;
        line.line_gst_amount = breakdown.gst_amount;
        line.line_subtotal_ex_gst = breakdown.exclusive;
        line.unit_price_ex_gst = if line.quantity.is_zero() {
            Decimal::ZERO
        } else {
            breakdown.exclusive / line.quantity
        };
    }

    transaction.subtotal_ex_gst = transaction
        .items
        .iter()
        .map(|l| l.line_subtotal_ex_gst)
        .sum();
    transaction.gst_amount = transaction.items.iter().map(|l| l.line_gst_amount).sum();
    transaction.total_inc_gst = transaction
        .items
        .iter()
        .map(|l| l.line_total_inc_gst)
        .sum();

    Ok(())
}

/// Validate a transaction record.
/// Returns all validation errors found (not just the first).
pub fn validate_transaction(transaction: &Transaction) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if transaction.transaction_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "transaction_id",
            "transaction identifier must not be empty",
        ));
    }

    if transaction.store_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "store_id",
            "store identifier must not be empty",
        ));
    }

    if transaction.receipt_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "receipt_number",
            "receipt number must not be empty",
        ));
    }

    if transaction.currency_code != "AUD" {
        errors.push(ValidationError::new(
            "currency_code",
            format!(
                "currency code must be AUD, got '{}'",
                transaction.currency_code
            ),
        ));
    }

    if let Err(e) = abn::validate_abn(&transaction.business_abn) {
        errors.push(ValidationError::new("business_abn", e.to_string()));
    }

    if transaction.total_inc_gst <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "total_inc_gst",
            "total amount must be positive",
        ));
    }

    if transaction.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "transaction must have at least one line item",
        ));
    }

    for (i, line) in transaction.items.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    // Cash tenders settle to 5 cents and may legitimately fall a
    // couple of cents short of the exact total; every other method
    // must cover it in full.
    let minimum_tender = if transaction.payment_method == PaymentMethod::Cash {
        round_to_cash(transaction.total_inc_gst)
    } else {
        transaction.total_inc_gst
    };
    if transaction.tender_amount < minimum_tender {
        errors.push(ValidationError::new(
            "tender_amount",
            format!(
                "tender {} does not cover the total {}",
                transaction.tender_amount, transaction.total_inc_gst
            ),
        ));
    }

    let expected_change = transaction.tender_amount - transaction.total_inc_gst;
    if transaction.change_amount != expected_change {
        errors.push(ValidationError::new(
            "change_amount",
            format!(
                "change {} does not match tender {} minus total {}",
                transaction.change_amount, transaction.tender_amount, transaction.total_inc_gst
            ),
        ));
    }

    errors.extend(validate_arithmetic(transaction));

    errors
}

/// Validate transaction arithmetic: totals must equal the sums of the
/// line fields exactly, and every breakdown must be self-consistent.
pub fn validate_arithmetic(transaction: &Transaction) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let line_subtotal: Decimal = transaction
        .items
        .iter()
        .map(|l| l.line_subtotal_ex_gst)
        .sum();
    let line_gst: Decimal = transaction.items.iter().map(|l| l.line_gst_amount).sum();
    let line_total: Decimal = transaction
        .items
        .iter()
        .map(|l| l.line_total_inc_gst)
        .sum();

    if transaction.subtotal_ex_gst != line_subtotal {
        errors.push(ValidationError::new(
            "subtotal_ex_gst",
            format!(
                "subtotal {} does not match sum of line subtotals {}",
                transaction.subtotal_ex_gst, line_subtotal
            ),
        ));
    }

    if transaction.gst_amount != line_gst {
        errors.push(ValidationError::new(
            "gst_amount",
            format!(
                "GST total {} does not match sum of line GST amounts {}",
                transaction.gst_amount, line_gst
            ),
        ));
    }

    if transaction.total_inc_gst != line_total {
        errors.push(ValidationError::new(
            "total_inc_gst",
            format!(
                "total {} does not match sum of line totals {}",
                transaction.total_inc_gst, line_total
            ),
        ));
    }

    if !gst::validate_components(
        transaction.total_inc_gst,
        transaction.subtotal_ex_gst,
        transaction.gst_amount,
    ) {
        errors.push(ValidationError::new(
            "total_inc_gst",
            format!(
                "total {} is not the sum of subtotal {} and GST {}",
                transaction.total_inc_gst, transaction.subtotal_ex_gst, transaction.gst_amount
            ),
        ));
    }

    for (i, line) in transaction.items.iter().enumerate() {
        if !gst::validate_components(
            line.line_total_inc_gst,
            line.line_subtotal_ex_gst,
            line.line_gst_amount,
        ) {
            errors.push(ValidationError::new(
                format!("items[{i}].line_total_inc_gst"),
                format!(
                    "line total {} is not the sum of subtotal {} and GST {}",
                    line.line_total_inc_gst, line.line_subtotal_ex_gst, line.line_gst_amount
                ),
            ));
        }

        let expected_total = round_to_cent(line.unit_price_inc_gst * line.quantity);
        if (line.line_total_inc_gst - expected_total).abs() >= dec!(0.01) {
            errors.push(ValidationError::new(
                format!("items[{i}].line_total_inc_gst"),
                format!(
                    "line total {} does not match unit price {} x quantity {}",
                    line.line_total_inc_gst, line.unit_price_inc_gst, line.quantity
                ),
            ));
        }
    }

    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if line.product_name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.product_name"),
            "product name must not be empty",
        ));
    }

    if line.quantity <= Decimal::ZERO {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must be positive",
        ));
    }

    if line.unit_price_inc_gst.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price_inc_gst"),
            "unit price must not be negative",
        ));
    }

    if line.discount_amount.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.discount_amount"),
            "discount amount must not be negative",
        ));
    }

    if !line.classification.is_taxable() && !line.line_gst_amount.is_zero() {
        errors.push(ValidationError::new(
            format!("{prefix}.line_gst_amount"),
            format!(
                "GST amount must be 0 for classification {}",
                line.classification.code()
            ),
        ));
    }
}

/// Validate a business record.
pub fn validate_business(business: &Business) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if business.store_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "store_id",
            "store identifier must not be empty",
        ));
    }

    if business.business_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "business_name",
            "business name must not be empty",
        ));
    }

    if let Err(e) = abn::validate_abn(&business.abn) {
        errors.push(ValidationError::new("abn", e.to_string()));
    }

    if let Some(acn) = &business.acn {
        let cleaned: String = acn.chars().filter(|c| *c != ' ').collect();
        if cleaned.len() != 9 || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(ValidationError::new("acn", "ACN must be 9 digits"));
        }
    }

    validate_postcode(&business.postcode, Some(business.state), "postcode", &mut errors);

    if business.terminal_count == 0 {
        errors.push(ValidationError::new(
            "terminal_count",
            "store must have at least one POS terminal",
        ));
    }

    errors
}

/// Validate a customer record.
pub fn validate_customer(customer: &Customer) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if customer.customer_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "customer_id",
            "customer identifier must not be empty",
        ));
    }

    match (&customer.customer_type, &customer.customer_abn) {
        (CustomerType::Business, None) => {
            errors.push(ValidationError::new(
                "customer_abn",
                "business customers must have an ABN",
            ));
        }
        (_, Some(customer_abn)) => {
            if let Err(e) = abn::validate_abn(customer_abn) {
                errors.push(ValidationError::new("customer_abn", e.to_string()));
            }
        }
        _ => {}
    }

    if let Some(postcode) = &customer.postcode {
        validate_postcode(postcode, customer.state, "postcode", &mut errors);
    }

    errors
}

/// Validate a return record.
pub fn validate_return(ret: &ReturnTransaction) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if ret.return_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "return_id",
            "return identifier must not be empty",
        ));
    }

    if ret.original_transaction_id.trim().is_empty() {
        errors.push(ValidationError::new(
            "original_transaction_id",
            "original transaction reference must not be empty",
        ));
    }

    if ret.original_receipt_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "original_receipt_number",
            "original receipt reference must not be empty",
        ));
    }

    if ret.refund_amount <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "refund_amount",
            "refund amount must be positive",
        ));
    }

    if ret.store_credit_issued.is_sign_negative() {
        errors.push(ValidationError::new(
            "store_credit_issued",
            "store credit must not be negative",
        ));
    }

    if ret.restocking_fee.is_sign_negative() {
        errors.push(ValidationError::new(
            "restocking_fee",
            "restocking fee must not be negative",
        ));
    }

    if ret.return_time.date() != ret.return_date {
        errors.push(ValidationError::new(
            "return_date",
            format!(
                "return date {} does not match return time {}",
                ret.return_date, ret.return_time
            ),
        ));
    }

    if let Some(purchased) = ret.original_purchase_date {
        if purchased > ret.return_date {
            errors.push(ValidationError::new(
                "return_date",
                "return predates the original purchase",
            ));
        }
    }

    errors
}

fn validate_postcode(
    postcode: &str,
    state: Option<State>,
    field: &str,
    errors: &mut Vec<ValidationError>,
) {
    if postcode.len() != 4 || !postcode.bytes().all(|b| b.is_ascii_digit()) {
        errors.push(ValidationError::new(field, "postcode must be 4 digits"));
        return;
    }

    if let Some(state) = state {
        if !validate_postcode_state(postcode, state) {
            errors.push(ValidationError::new(
                field,
                format!("postcode {} is not in {}", postcode, state.code()),
            ));
        }
    }
}
