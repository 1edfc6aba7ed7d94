//! Australian GST calculation.
//!
//! Converts between GST-inclusive and GST-exclusive amounts using the
//! ATO formula for a 10% rate (GST component = inclusive price / 11),
//! with half-up rounding to the cent. All arithmetic is done on
//! [`rust_decimal::Decimal`]; binary floating point never touches a
//! monetary value.

mod calc;
mod rounding;

pub use calc::*;
pub use rounding::*;
