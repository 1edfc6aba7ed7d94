use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rounding::round_to_cent;

/// Statutory GST rate.
pub const STANDARD_RATE: Decimal = dec!(0.10);

/// Divisor for extracting the GST component from a GST-inclusive
/// amount. For a 10% rate: GST = inclusive / 11.
pub const GST_DIVISOR: Decimal = dec!(11);

/// Errors from the GST engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GstError {
    /// Monetary input was negative. Bad amounts are rejected eagerly
    /// rather than trusted to the caller.
    #[error("amount must not be negative, got {0}")]
    InvalidAmount(Decimal),
}

/// GST classification codes used on Australian tax invoices.
///
/// Every classification except [`GstClassification::Standard`] carries
/// no GST: the exclusive amount equals the inclusive amount and the
/// GST component is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstClassification {
    /// GST — standard 10% rate, prices quoted GST-inclusive.
    #[serde(rename = "GST")]
    Standard,
    /// GST_FREE — basic food, medicine, exports.
    #[serde(rename = "GST_FREE")]
    GstFree,
    /// INPUT_TAXED — financial services, residential rent.
    #[serde(rename = "INPUT_TAXED")]
    InputTaxed,
    /// GST_EXEMPT — outside the scope of GST entirely.
    #[serde(rename = "GST_EXEMPT")]
    Exempt,
}

impl GstClassification {
    /// Wire code as it appears in exported datasets.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "GST",
            Self::GstFree => "GST_FREE",
            Self::InputTaxed => "INPUT_TAXED",
            Self::Exempt => "GST_EXEMPT",
        }
    }

    /// Parse from a wire code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GST" => Some(Self::Standard),
            "GST_FREE" => Some(Self::GstFree),
            "INPUT_TAXED" => Some(Self::InputTaxed),
            "GST_EXEMPT" => Some(Self::Exempt),
            _ => None,
        }
    }

    /// True only for the standard-rated classification.
    pub fn is_taxable(&self) -> bool {
        matches!(self, Self::Standard)
    }
}

/// Decomposition of a GST-inclusive amount into its components.
///
/// Invariant: `exclusive + gst_amount == inclusive`, exactly. The
/// exclusive amount is defined as inclusive minus the rounded GST
/// component, so the identity holds without tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    /// Amount including GST.
    pub inclusive: Decimal,
    /// Amount excluding GST.
    pub exclusive: Decimal,
    /// GST component.
    pub gst_amount: Decimal,
    /// Applied rate: 0.10 for standard-rated, 0.00 otherwise.
    pub rate: Decimal,
    /// Classification the decomposition was computed under.
    pub classification: GstClassification,
}

impl GstBreakdown {
    /// Arithmetic self-consistency of this breakdown.
    pub fn is_consistent(&self) -> bool {
        validate_components(self.inclusive, self.exclusive, self.gst_amount)
    }
}

/// Decompose a GST-inclusive amount under the given classification.
///
/// Standard-rated amounts split as `gst = round_to_cent(amount / 11)`,
/// `exclusive = amount - gst`. All other classifications pass the
/// amount through untaxed. Inputs with more than two decimal places
/// are rounded to the cent before the split; zero decomposes to all
/// zeros under every classification.
pub fn decompose(
    amount_inc_gst: Decimal,
    classification: GstClassification,
) -> Result<GstBreakdown, GstError> {
    if amount_inc_gst.is_sign_negative() && !amount_inc_gst.is_zero() {
        return Err(GstError::InvalidAmount(amount_inc_gst));
    }

    let inclusive = round_to_cent(amount_inc_gst);

    if !classification.is_taxable() {
        return Ok(GstBreakdown {
            inclusive,
            exclusive: inclusive,
            gst_amount: Decimal::ZERO,
            rate: Decimal::ZERO,
            classification,
        });
    }

    let gst_amount = round_to_cent(inclusive / GST_DIVISOR);
    let exclusive = inclusive - gst_amount;

    Ok(GstBreakdown {
        inclusive,
        exclusive,
        gst_amount,
        rate: STANDARD_RATE,
        classification,
    })
}

/// GST component of a standard-rated GST-inclusive amount.
pub fn gst_component(amount_inc_gst: Decimal) -> Result<Decimal, GstError> {
    Ok(decompose(amount_inc_gst, GstClassification::Standard)?.gst_amount)
}

/// GST-exclusive share of a standard-rated GST-inclusive amount.
pub fn exclusive_amount(amount_inc_gst: Decimal) -> Result<Decimal, GstError> {
    Ok(decompose(amount_inc_gst, GstClassification::Standard)?.exclusive)
}

/// Gross up a GST-exclusive amount, returning `(inclusive, gst)`.
///
/// Rounds independently of [`decompose`], so the two directions are
/// not exact inverses: a round trip is only guaranteed to agree within
/// one cent. This mirrors how Australian retail systems price in both
/// directions and must not be "fixed" to be a strict inverse.
pub fn gross_up(amount_ex_gst: Decimal) -> Result<(Decimal, Decimal), GstError> {
    if amount_ex_gst.is_sign_negative() && !amount_ex_gst.is_zero() {
        return Err(GstError::InvalidAmount(amount_ex_gst));
    }

    let exclusive = round_to_cent(amount_ex_gst);
    let gst = round_to_cent(exclusive * STANDARD_RATE);
    Ok((exclusive + gst, gst))
}

/// Check an externally supplied (inclusive, exclusive, gst) triple for
/// arithmetic self-consistency: the components must sum to the
/// inclusive amount within one cent.
pub fn validate_components(inclusive: Decimal, exclusive: Decimal, gst: Decimal) -> bool {
    (inclusive - exclusive - gst).abs() < dec!(0.01)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_decomposition_round_figures() {
        let b = decompose(dec!(110.00), GstClassification::Standard).unwrap();
        assert_eq!(b.inclusive, dec!(110.00));
        assert_eq!(b.exclusive, dec!(100.00));
        assert_eq!(b.gst_amount, dec!(10.00));
        assert_eq!(b.rate, dec!(0.10));
    }

    #[test]
    fn standard_decomposition_repeating_division() {
        // 104.99 / 11 = 9.5445... rounds down to 9.54
        let b = decompose(dec!(104.99), GstClassification::Standard).unwrap();
        assert_eq!(b.gst_amount, dec!(9.54));
        assert_eq!(b.exclusive, dec!(95.45));
    }

    #[test]
    fn gst_above_half_cent_rounds_up() {
        // 5.45 / 11 = 0.49545... -> 0.50
        let b = decompose(dec!(5.45), GstClassification::Standard).unwrap();
        assert_eq!(b.gst_amount, dec!(0.50));
        assert_eq!(b.exclusive, dec!(4.95));
    }

    #[test]
    fn gross_up_half_cent_rounds_up() {
        // 0.05 * 0.10 = 0.005, a true midpoint: must round to 0.01,
        // never to the even neighbour 0.00.
        let (inclusive, gst) = gross_up(dec!(0.05)).unwrap();
        assert_eq!(gst, dec!(0.01));
        assert_eq!(inclusive, dec!(0.06));
    }

    #[test]
    fn components_always_sum_exactly() {
        for cents in [1u32, 33, 99, 1001, 7549, 10499, 99999] {
            let amount = Decimal::new(i64::from(cents), 2);
            let b = decompose(amount, GstClassification::Standard).unwrap();
            assert_eq!(b.exclusive + b.gst_amount, b.inclusive, "amount {amount}");
        }
    }

    #[test]
    fn gst_free_passes_through() {
        let b = decompose(dec!(100.00), GstClassification::GstFree).unwrap();
        assert_eq!(b.inclusive, dec!(100.00));
        assert_eq!(b.exclusive, dec!(100.00));
        assert_eq!(b.gst_amount, dec!(0.00));
        assert_eq!(b.rate, dec!(0.00));
    }

    #[test]
    fn all_untaxed_classifications_identical() {
        for c in [
            GstClassification::GstFree,
            GstClassification::InputTaxed,
            GstClassification::Exempt,
        ] {
            let b = decompose(dec!(42.37), c).unwrap();
            assert_eq!(b.exclusive, dec!(42.37));
            assert!(b.gst_amount.is_zero());
            assert!(b.rate.is_zero());
        }
    }

    #[test]
    fn zero_decomposes_to_zeros() {
        for c in [
            GstClassification::Standard,
            GstClassification::GstFree,
            GstClassification::InputTaxed,
            GstClassification::Exempt,
        ] {
            let b = decompose(dec!(0.00), c).unwrap();
            assert!(b.inclusive.is_zero());
            assert!(b.exclusive.is_zero());
            assert!(b.gst_amount.is_zero());
        }
    }

    #[test]
    fn negative_amount_rejected() {
        assert_eq!(
            decompose(dec!(-1.00), GstClassification::Standard),
            Err(GstError::InvalidAmount(dec!(-1.00)))
        );
        assert!(gross_up(dec!(-0.01)).is_err());
    }

    #[test]
    fn over_precise_input_rounded_first() {
        let b = decompose(dec!(10.004), GstClassification::Standard).unwrap();
        assert_eq!(b.inclusive, dec!(10.00));
        assert_eq!(b.gst_amount, dec!(0.91));
        assert_eq!(b.exclusive, dec!(9.09));
    }

    #[test]
    fn gross_up_adds_ten_percent() {
        let (inclusive, gst) = gross_up(dec!(100.00)).unwrap();
        assert_eq!(gst, dec!(10.00));
        assert_eq!(inclusive, dec!(110.00));
    }

    #[test]
    fn gross_up_is_not_a_strict_inverse() {
        // decompose(104.99) gives exclusive 95.45; grossing that back up
        // gives 95.45 + 9.55 = 105.00, one cent away from the original.
        let b = decompose(dec!(104.99), GstClassification::Standard).unwrap();
        let (inclusive, _) = gross_up(b.exclusive).unwrap();
        assert_ne!(inclusive, b.inclusive);
        assert!((inclusive - b.inclusive).abs() <= dec!(0.01));
    }

    #[test]
    fn convenience_accessors_match_decompose() {
        assert_eq!(gst_component(dec!(110.00)).unwrap(), dec!(10.00));
        assert_eq!(exclusive_amount(dec!(110.00)).unwrap(), dec!(100.00));
    }

    #[test]
    fn validate_components_tolerance() {
        assert!(validate_components(dec!(110.00), dec!(100.00), dec!(10.00)));
        assert!(validate_components(dec!(110.00), dec!(100.00), dec!(9.995)));
        assert!(!validate_components(dec!(110.00), dec!(100.00), dec!(9.98)));
    }

    #[test]
    fn classification_codes_round_trip() {
        for c in [
            GstClassification::Standard,
            GstClassification::GstFree,
            GstClassification::InputTaxed,
            GstClassification::Exempt,
        ] {
            assert_eq!(GstClassification::from_code(c.code()), Some(c));
        }
        assert_eq!(GstClassification::from_code("VAT"), None);
    }
}
