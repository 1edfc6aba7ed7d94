use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::PosError;
use super::types::*;
use super::validation;
use crate::gst::{GstClassification, round_to_cash};

/// Builder for a transaction line item.
///
/// ```
/// use auspos::core::*;
/// use auspos::gst::GstClassification;
/// use rust_decimal_macros::dec;
///
/// let line = LineItemBuilder::new(1, "Panadol 20pk", "pharmacy", dec!(1), dec!(8.99))
///     .classification(GstClassification::GstFree)
///     .sku("PAN-020")
///     .build();
/// assert_eq!(line.unit_price_inc_gst, dec!(8.99));
/// ```
///
/// The derived monetary fields (line totals, GST split, exclusive unit
/// price) are zero until the line is attached to a transaction and the
/// transaction is built.
pub struct LineItemBuilder {
    line_number: u32,
    kind: LineItemKind,
    product_id: String,
    sku: String,
    barcode: Option<String>,
    product_name: String,
    category: String,
    brand: Option<String>,
    quantity: Decimal,
    unit_price_inc_gst: Decimal,
    classification: GstClassification,
    discount_amount: Decimal,
    discount_type: String,
    promotion_id: Option<String>,
}

impl LineItemBuilder {
    pub fn new(
        line_number: u32,
        product_name: impl Into<String>,
        category: impl Into<String>,
        quantity: Decimal,
        unit_price_inc_gst: Decimal,
    ) -> Self {
        Self {
            line_number,
            kind: LineItemKind::Sale,
            product_id: String::new(),
            sku: String::new(),
            barcode: None,
            product_name: product_name.into(),
            category: category.into(),
            brand: None,
            quantity,
            unit_price_inc_gst,
            classification: GstClassification::Standard,
            discount_amount: Decimal::ZERO,
            discount_type: "NONE".to_string(),
            promotion_id: None,
        }
    }

    pub fn kind(mut self, kind: LineItemKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = id.into();
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn classification(mut self, classification: GstClassification) -> Self {
        self.classification = classification;
        self
    }

    pub fn discount(mut self, amount: Decimal, discount_type: impl Into<String>) -> Self {
        self.discount_amount = amount;
        self.discount_type = discount_type.into();
        self
    }

    pub fn promotion_id(mut self, id: impl Into<String>) -> Self {
        self.promotion_id = Some(id.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            transaction_id: String::new(),
            line_number: self.line_number,
            kind: self.kind,
            product_id: self.product_id,
            sku: self.sku,
            barcode: self.barcode,
            product_name: self.product_name,
            category: self.category,
            brand: self.brand,
            quantity: self.quantity,
            unit_price_ex_gst: Decimal::ZERO,
            unit_price_inc_gst: self.unit_price_inc_gst,
            line_subtotal_ex_gst: Decimal::ZERO,
            line_gst_amount: Decimal::ZERO,
            line_total_inc_gst: Decimal::ZERO,
            classification: self.classification,
            discount_amount: self.discount_amount,
            discount_type: self.discount_type,
            promotion_id: self.promotion_id,
        }
    }
}

/// Builder for constructing valid transactions.
///
/// Derived monetary fields come from the GST engine: each line's split
/// is computed on its inclusive line total, transaction totals are the
/// line sums, and cash tenders are rounded to 5 cents. `build()` runs
/// full validation and returns every error found.
pub struct TransactionBuilder {
    transaction_id: String,
    store_id: String,
    workstation_id: String,
    employee_id: String,
    transaction_type: TransactionType,
    business_day_date: Option<NaiveDate>,
    transaction_datetime: NaiveDateTime,
    sequence_number: u64,
    receipt_number: Option<String>,
    customer_id: Option<String>,
    payment_method: PaymentMethod,
    tender_amount: Option<Decimal>,
    currency_code: String,
    operator_id: String,
    shift_id: String,
    business_abn: Option<String>,
    items: Vec<LineItem>,
}

impl TransactionBuilder {
    pub fn new(
        transaction_id: impl Into<String>,
        store_id: impl Into<String>,
        transaction_datetime: NaiveDateTime,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            store_id: store_id.into(),
            workstation_id: String::new(),
            employee_id: String::new(),
            transaction_type: TransactionType::Sale,
            business_day_date: None,
            transaction_datetime,
            sequence_number: 0,
            receipt_number: None,
            customer_id: None,
            payment_method: PaymentMethod::Eftpos,
            tender_amount: None,
            currency_code: "AUD".to_string(),
            operator_id: String::new(),
            shift_id: String::new(),
            business_abn: None,
            items: Vec::new(),
        }
    }

    pub fn workstation_id(mut self, id: impl Into<String>) -> Self {
        self.workstation_id = id.into();
        self
    }

    pub fn employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = id.into();
        self
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    /// Business day the sale is booked under; defaults to the date of
    /// the transaction timestamp.
    pub fn business_day_date(mut self, date: NaiveDate) -> Self {
        self.business_day_date = Some(date);
        self
    }

    pub fn sequence_number(mut self, n: u64) -> Self {
        self.sequence_number = n;
        self
    }

    pub fn receipt_number(mut self, number: impl Into<String>) -> Self {
        self.receipt_number = Some(number.into());
        self
    }

    pub fn customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
    }

    pub fn payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Explicit tender amount. When not set, the tender defaults to the
    /// exact total, or the total rounded to 5 cents for cash.
    pub fn tender_amount(mut self, amount: Decimal) -> Self {
        self.tender_amount = Some(amount);
        self
    }

    pub fn operator_id(mut self, id: impl Into<String>) -> Self {
        self.operator_id = id.into();
        self
    }

    pub fn shift_id(mut self, id: impl Into<String>) -> Self {
        self.shift_id = id.into();
        self
    }

    pub fn business_abn(mut self, abn: impl Into<String>) -> Self {
        self.business_abn = Some(abn.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.items.push(line);
        self
    }

    /// Build the transaction, deriving totals and running validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Transaction, PosError> {
        let tender = self.tender_amount;
        let mut transaction = self.assemble()?;

        validation::calculate_totals(&mut transaction)?;
        finish_tender(&mut transaction, tender);

        let errors = validation::validate_transaction(&transaction);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PosError::Validation(msg));
        }

        Ok(transaction)
    }

    /// Build without validation, for tests or importing external data.
    pub fn build_unchecked(self) -> Result<Transaction, PosError> {
        let tender = self.tender_amount;
        let mut transaction = self.assemble()?;
        validation::calculate_totals(&mut transaction)?;
        finish_tender(&mut transaction, tender);
        Ok(transaction)
    }

    fn assemble(self) -> Result<Transaction, PosError> {
        let receipt_number = self
            .receipt_number
            .ok_or_else(|| PosError::Builder("receipt number is required".into()))?;
        let business_abn = self
            .business_abn
            .ok_or_else(|| PosError::Builder("business ABN is required".into()))?;

        if self.items.is_empty() {
            return Err(PosError::Builder(
                "at least one line item is required".into(),
            ));
        }

        if self.items.len() > 1_000 {
            return Err(PosError::Builder(
                "transaction cannot have more than 1,000 line items".into(),
            ));
        }

        let mut items = self.items;
        for line in &mut items {
            line.transaction_id = self.transaction_id.clone();
        }

        Ok(Transaction {
            transaction_id: self.transaction_id,
            store_id: self.store_id,
            workstation_id: self.workstation_id,
            employee_id: self.employee_id,
            transaction_type: self.transaction_type,
            business_day_date: self
                .business_day_date
                .unwrap_or_else(|| self.transaction_datetime.date()),
            transaction_datetime: self.transaction_datetime,
            sequence_number: self.sequence_number,
            receipt_number,
            customer_id: self.customer_id,
            subtotal_ex_gst: Decimal::ZERO,
            gst_amount: Decimal::ZERO,
            total_inc_gst: Decimal::ZERO,
            payment_method: self.payment_method,
            tender_amount: self.tender_amount.unwrap_or(Decimal::ZERO),
            change_amount: Decimal::ZERO,
            currency_code: self.currency_code,
            operator_id: self.operator_id,
            shift_id: self.shift_id,
            business_abn,
            items,
        })
    }
}

/// Resolve the tender and change once totals are known. An unset
/// tender defaults to the exact total, rounded to 5 cents for cash.
fn finish_tender(transaction: &mut Transaction, tender: Option<Decimal>) {
    transaction.tender_amount = match tender {
        Some(t) => t,
        None => match transaction.payment_method {
            PaymentMethod::Cash => round_to_cash(transaction.total_inc_gst),
            _ => transaction.total_inc_gst,
        },
    };
    transaction.change_amount = transaction.tender_amount - transaction.total_inc_gst;
}

/// Builder for a return referencing one line of an original transaction.
pub struct ReturnBuilder<'a> {
    original: &'a Transaction,
    line_number: u32,
    return_id: String,
    reason: ReturnReason,
    return_time: NaiveDateTime,
    processed_by_employee_id: String,
    refund_method: Option<PaymentMethod>,
    store_credit_issued: Decimal,
    restocking_fee: Decimal,
    condition_code: String,
}

impl<'a> ReturnBuilder<'a> {
    pub fn new(
        original: &'a Transaction,
        line_number: u32,
        return_id: impl Into<String>,
        reason: ReturnReason,
        return_time: NaiveDateTime,
    ) -> Self {
        Self {
            original,
            line_number,
            return_id: return_id.into(),
            reason,
            return_time,
            processed_by_employee_id: String::new(),
            refund_method: None,
            store_credit_issued: Decimal::ZERO,
            restocking_fee: Decimal::ZERO,
            condition_code: "NEW".to_string(),
        }
    }

    pub fn processed_by(mut self, employee_id: impl Into<String>) -> Self {
        self.processed_by_employee_id = employee_id.into();
        self
    }

    /// Override the refund method; defaults to the original payment method.
    pub fn refund_method(mut self, method: PaymentMethod) -> Self {
        self.refund_method = Some(method);
        self
    }

    pub fn store_credit(mut self, amount: Decimal) -> Self {
        self.store_credit_issued = amount;
        self
    }

    pub fn restocking_fee(mut self, amount: Decimal) -> Self {
        self.restocking_fee = amount;
        self
    }

    pub fn condition(mut self, code: impl Into<String>) -> Self {
        self.condition_code = code.into();
        self
    }

    /// Build the return. The refund is the referenced line's
    /// GST-inclusive total, keeping the refund consistent with the tax
    /// already collected on the sale.
    pub fn build(self) -> Result<ReturnTransaction, PosError> {
        let line = self
            .original
            .items
            .iter()
            .find(|l| l.line_number == self.line_number)
            .ok_or_else(|| {
                PosError::Builder(format!(
                    "line {} not found on transaction {}",
                    self.line_number, self.original.transaction_id
                ))
            })?;

        if self.return_time < self.original.transaction_datetime {
            return Err(PosError::Builder(format!(
                "return time {} predates the purchase at {}",
                self.return_time, self.original.transaction_datetime
            )));
        }

        let description = format!(
            "Customer returned {} due to {}",
            line.product_name,
            self.reason.code().to_ascii_lowercase().replace('_', " ")
        );

        let ret = ReturnTransaction {
            return_id: self.return_id,
            original_transaction_id: self.original.transaction_id.clone(),
            original_receipt_number: self.original.receipt_number.clone(),
            return_date: self.return_time.date(),
            return_time: self.return_time,
            return_reason_code: self.reason,
            return_reason_description: description,
            returned_by_customer_id: self.original.customer_id.clone(),
            processed_by_employee_id: self.processed_by_employee_id,
            refund_method: self.refund_method.unwrap_or(self.original.payment_method),
            refund_amount: line.line_total_inc_gst,
            store_credit_issued: self.store_credit_issued,
            restocking_fee: self.restocking_fee,
            condition_code: self.condition_code,
            original_purchase_date: Some(self.original.transaction_datetime.date()),
        };

        let errors = validation::validate_return(&ret);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PosError::Validation(msg));
        }

        Ok(ret)
    }
}
