//! Core transaction types, builders, validation, and receipt numbering.
//!
//! This module provides the foundational types for Australian POS
//! dataset synthesis: businesses, customers, transactions with their
//! line items, and returns, together with collect-all-errors
//! validation of each record kind.

mod builder;
mod error;
mod numbering;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use types::*;
pub use validation::*;
