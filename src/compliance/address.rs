//! Australian address validation and formatting.

use std::ops::Range;

use crate::core::State;

/// Delivery postcode range for a state or territory.
pub fn postcode_range(state: State) -> Range<u32> {
    match state {
        State::Nsw => 1000..3000,
        State::Vic => 3000..4000,
        State::Qld => 4000..5000,
        State::Sa => 5000..6000,
        State::Wa => 6000..7000,
        State::Tas => 7000..8000,
        State::Nt => 800..1000,
        State::Act => 200..300,
    }
}

/// Validate that a postcode falls in the issuing state's range.
///
/// NT and ACT postcodes are written with a leading zero ("0800",
/// "0200"); the numeric value is what is range-checked.
pub fn validate_postcode_state(postcode: &str, state: State) -> bool {
    postcode
        .parse::<u32>()
        .map(|pc| postcode_range(state).contains(&pc))
        .unwrap_or(false)
}

/// Format an address as it appears on Australian receipts:
/// street, suburb, STATE postcode.
pub fn format_address(street: &str, suburb: &str, state: State, postcode: &str) -> String {
    let locality = format!("{} {}", state.code(), postcode);
    [street, suburb, locality.as_str()]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postcodes_match_their_state() {
        assert!(validate_postcode_state("2000", State::Nsw));
        assert!(validate_postcode_state("3121", State::Vic));
        assert!(validate_postcode_state("4000", State::Qld));
        assert!(validate_postcode_state("5000", State::Sa));
        assert!(validate_postcode_state("6000", State::Wa));
        assert!(validate_postcode_state("7000", State::Tas));
        assert!(validate_postcode_state("0800", State::Nt));
        assert!(validate_postcode_state("0200", State::Act));
    }

    #[test]
    fn postcodes_rejected_outside_state() {
        assert!(!validate_postcode_state("3000", State::Nsw));
        assert!(!validate_postcode_state("2000", State::Vic));
        assert!(!validate_postcode_state("0800", State::Act));
    }

    #[test]
    fn range_boundaries() {
        assert!(validate_postcode_state("1000", State::Nsw));
        assert!(!validate_postcode_state("2999", State::Vic));
        assert!(validate_postcode_state("2999", State::Nsw));
    }

    #[test]
    fn non_numeric_postcode_rejected() {
        assert!(!validate_postcode_state("20O0", State::Nsw));
        assert!(!validate_postcode_state("", State::Nsw));
    }

    #[test]
    fn address_formatting() {
        assert_eq!(
            format_address("12 George St", "Sydney", State::Nsw, "2000"),
            "12 George St, Sydney, NSW 2000"
        );
    }

    #[test]
    fn blank_parts_skipped() {
        assert_eq!(
            format_address("", "Parramatta", State::Nsw, "2150"),
            "Parramatta, NSW 2150"
        );
    }
}
