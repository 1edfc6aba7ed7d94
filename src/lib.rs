//! # auspos
//!
//! Core engines for synthesizing Australian point-of-sale transaction
//! datasets: GST calculation, ABN validation and generation, and
//! receipt compliance checking, plus the typed transaction model and
//! builders the surrounding bulk generator drives.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating
//! point, and round half-up to the cent as the ATO requires. Money
//! serializes as fixed-point decimal strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use auspos::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let when = NaiveDate::from_ymd_opt(2024, 6, 15)
//!     .unwrap()
//!     .and_hms_opt(12, 30, 0)
//!     .unwrap();
//!
//! let tx = TransactionBuilder::new("TXN-0001", "ST001", when)
//!     .business_abn("51824753556")
//!     .receipt_number("ST001-20240615-001")
//!     .payment_method(PaymentMethod::Eftpos)
//!     .add_line(LineItemBuilder::new(1, "Flat White", "beverages", dec!(2), dec!(5.50)).build())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(tx.total_inc_gst, dec!(11.00));
//! assert_eq!(tx.gst_amount, dec!(1.00));
//! assert_eq!(tx.subtotal_ex_gst, dec!(10.00));
//! ```

pub mod abn;
pub mod compliance;
pub mod core;
pub mod gst;

// Re-export core types at crate root for convenience
pub use crate::core::*;
