use auspos::abn::{
    self, AbnError, GENERATION_ATTEMPT_BUDGET, format_abn, generate_abn,
    generate_abn_with_budget, validate_abn, validate_abn_checksum, validate_abn_format,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

// --- Validation ---

#[test]
fn ato_example_abn_is_valid() {
    assert!(validate_abn_checksum("51824753556"));
    assert!(validate_abn("51 824 753 556").is_ok());
}

#[test]
fn checksum_scenarios() {
    assert!(validate_abn_checksum("83914571673"));
    assert!(!validate_abn_checksum("12345678900"));
}

#[test]
fn format_precedes_checksum() {
    // A short input fails on format, never reaching the checksum.
    assert_eq!(validate_abn("839145716"), Err(AbnError::Format));
    // Right shape, wrong digits fails on the check digit.
    assert_eq!(validate_abn("83914571674"), Err(AbnError::Checksum));
}

#[test]
fn error_messages() {
    assert_eq!(
        AbnError::Format.to_string(),
        "ABN must be 11 digits (spaces allowed)"
    );
    assert_eq!(AbnError::Checksum.to_string(), "invalid ABN check digit");
}

#[test]
fn format_validation_strips_spaces_only() {
    assert!(validate_abn_format("51 824 753 556"));
    assert!(validate_abn_format("51824753556"));
    assert!(!validate_abn_format("51-824-753-556"));
    assert!(!validate_abn_format("5182475355"));
    assert!(!validate_abn_format("518247535567"));
}

#[test]
fn every_single_digit_mutation_fails() {
    // Changing any one digit of a valid ABN must break the checksum:
    // each weight is coprime with 89, so a single-digit delta shifts
    // the sum by a non-multiple of 89.
    let valid = "51824753556";
    for pos in 0..11 {
        for replacement in b'0'..=b'9' {
            if valid.as_bytes()[pos] == replacement {
                continue;
            }
            let mut mutated = valid.as_bytes().to_vec();
            mutated[pos] = replacement;
            let mutated = String::from_utf8(mutated).unwrap();
            assert!(
                !validate_abn_checksum(&mutated),
                "mutation {mutated} unexpectedly valid"
            );
        }
    }
}

// --- Formatting ---

#[test]
fn display_format_scenarios() {
    assert_eq!(format_abn("83914571673").unwrap(), "83 914 571 673");
    assert_eq!(format_abn("51824753556").unwrap(), "51 824 753 556");
}

#[test]
fn formatting_is_idempotent() {
    let formatted = format_abn("83914571673").unwrap();
    assert_eq!(format_abn(&formatted).unwrap(), formatted);
}

#[test]
fn format_rejects_non_abn_input() {
    assert_eq!(format_abn("12345"), Err(AbnError::Format));
    assert_eq!(format_abn("8391457167x"), Err(AbnError::Format));
}

// --- Generation ---

#[test]
fn generated_abns_always_validate() {
    // Independent seeds, one draw each: every accepted candidate must
    // verify under the same checksum it was screened with.
    for seed in 0..1_000u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let abn = generate_abn(&mut rng).unwrap();
        assert_eq!(abn.len(), 11);
        assert!(validate_abn_checksum(&abn), "seed {seed} produced {abn}");
    }
}

#[test]
fn same_seed_same_abn_sequence() {
    let run = |seed: u64| -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20).map(|_| generate_abn(&mut rng).unwrap()).collect()
    };
    assert_eq!(run(2024), run(2024));
    assert_ne!(run(2024), run(2025));
}

#[test]
fn default_budget_is_generous() {
    // Expected attempts per ABN is about 89; the default budget leaves
    // enormous headroom.
    assert!(GENERATION_ATTEMPT_BUDGET >= 10 * 89);
}

#[test]
fn tiny_budget_can_exhaust() {
    let mut rng = StdRng::seed_from_u64(0);
    let result = generate_abn_with_budget(&mut rng, 1);
    if let Err(e) = result {
        assert_eq!(e, AbnError::GenerationExhausted { attempts: 1 });
    }
}

#[test]
fn generated_abns_format_cleanly() {
    let mut rng = StdRng::seed_from_u64(99);
    let abn = generate_abn(&mut rng).unwrap();
    let formatted = format_abn(&abn).unwrap();
    assert_eq!(formatted.len(), 14);
    assert_eq!(formatted.matches(' ').count(), 3);
}
