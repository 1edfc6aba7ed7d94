use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::gst::GstClassification;

/// Australian states and territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Nt,
    Act,
}

impl State {
    /// Two-to-three letter postal abbreviation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Nt => "NT",
            Self::Act => "ACT",
        }
    }

    /// Parse from a postal abbreviation.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NSW" => Some(Self::Nsw),
            "VIC" => Some(Self::Vic),
            "QLD" => Some(Self::Qld),
            "WA" => Some(Self::Wa),
            "SA" => Some(Self::Sa),
            "TAS" => Some(Self::Tas),
            "NT" => Some(Self::Nt),
            "ACT" => Some(Self::Act),
            _ => None,
        }
    }
}

/// Payment methods accepted at Australian POS terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Eftpos,
    CreditCard,
    DebitCard,
    Contactless,
    GiftCard,
    Afterpay,
    Zip,
    BuyNowPayLater,
}

/// Transaction types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Sale,
    Return,
    Void,
    Exchange,
    Layby,
}

/// Whether a line item records a sale or a returned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineItemKind {
    Sale,
    Return,
}

/// Return reason codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnReason {
    Defective,
    WrongSize,
    WrongItem,
    ChangeMind,
    Duplicate,
    GiftReturn,
    Warranty,
    DamagedShipping,
}

impl ReturnReason {
    /// Wire code as it appears in exported datasets.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Defective => "DEFECTIVE",
            Self::WrongSize => "WRONG_SIZE",
            Self::WrongItem => "WRONG_ITEM",
            Self::ChangeMind => "CHANGE_MIND",
            Self::Duplicate => "DUPLICATE",
            Self::GiftReturn => "GIFT_RETURN",
            Self::Warranty => "WARRANTY",
            Self::DamagedShipping => "DAMAGED_SHIPPING",
        }
    }
}

/// Customer categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerType {
    Individual,
    Business,
    Loyalty,
    Staff,
}

/// A registered business operating one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Unique store identifier.
    pub store_id: String,
    /// Registered business name.
    pub business_name: String,
    /// Australian Business Number, canonical 11 digits.
    pub abn: String,
    /// Australian Company Number (9 digits), if incorporated.
    pub acn: Option<String>,
    /// Trading name where it differs from the registered name.
    pub trading_name: Option<String>,
    /// Store street address.
    pub store_address: String,
    pub suburb: String,
    pub state: State,
    pub postcode: String,
    pub phone: String,
    pub email: String,
    /// GST registration status; registered businesses issue tax invoices.
    pub gst_registered: bool,
    /// POS platform the store runs.
    pub pos_system_type: String,
    /// Number of POS terminals on site.
    pub terminal_count: u32,
}

/// A retail customer, individual or business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_type: CustomerType,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Company name for business customers.
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub loyalty_member: bool,
    pub loyalty_points_earned: u32,
    pub loyalty_points_redeemed: u32,
    pub address: Option<String>,
    pub suburb: Option<String>,
    pub state: Option<State>,
    pub postcode: Option<String>,
    /// ABN, required for business customers.
    pub customer_abn: Option<String>,
}

/// One line of a transaction.
///
/// The monetary fields are derived, not free: the GST split is
/// computed on the line total (inclusive unit price times quantity)
/// and the exclusive unit price is the exclusive subtotal divided by
/// the quantity, left unrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Parent transaction identifier, stamped when the transaction is built.
    pub transaction_id: String,
    pub line_number: u32,
    pub kind: LineItemKind,
    pub product_id: String,
    /// Stock keeping unit.
    pub sku: String,
    pub barcode: Option<String>,
    pub product_name: String,
    pub category: String,
    pub brand: Option<String>,
    pub quantity: Decimal,
    pub unit_price_ex_gst: Decimal,
    pub unit_price_inc_gst: Decimal,
    pub line_subtotal_ex_gst: Decimal,
    pub line_gst_amount: Decimal,
    pub line_total_inc_gst: Decimal,
    pub classification: GstClassification,
    pub discount_amount: Decimal,
    pub discount_type: String,
    pub promotion_id: Option<String>,
}

/// A completed POS transaction with its owned line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub store_id: String,
    /// POS terminal identifier.
    pub workstation_id: String,
    /// Employee who rang the sale up.
    pub employee_id: String,
    pub transaction_type: TransactionType,
    pub business_day_date: NaiveDate,
    pub transaction_datetime: NaiveDateTime,
    /// Sequential transaction number within the run.
    pub sequence_number: u64,
    pub receipt_number: String,
    /// Anonymous cash sales have no customer.
    pub customer_id: Option<String>,
    pub subtotal_ex_gst: Decimal,
    pub gst_amount: Decimal,
    pub total_inc_gst: Decimal,
    pub payment_method: PaymentMethod,
    pub tender_amount: Decimal,
    pub change_amount: Decimal,
    pub currency_code: String,
    pub operator_id: String,
    pub shift_id: String,
    /// ABN of the issuing business, repeated on every record for export.
    pub business_abn: String,
    pub items: Vec<LineItem>,
}

/// A return/refund referencing one original transaction line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnTransaction {
    pub return_id: String,
    pub original_transaction_id: String,
    pub original_receipt_number: String,
    pub return_date: NaiveDate,
    pub return_time: NaiveDateTime,
    pub return_reason_code: ReturnReason,
    pub return_reason_description: String,
    pub returned_by_customer_id: Option<String>,
    pub processed_by_employee_id: String,
    /// Defaults to the original payment method.
    pub refund_method: PaymentMethod,
    /// The returned line's GST-inclusive total.
    pub refund_amount: Decimal,
    pub store_credit_issued: Decimal,
    pub restocking_fee: Decimal,
    /// Condition of the returned goods (e.g. "NEW", "OPENED").
    pub condition_code: String,
    pub original_purchase_date: Option<NaiveDate>,
}
