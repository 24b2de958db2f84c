//! Custom assertions for mask testing.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use masker::{apply_custom_mask, tokenize, MaskOutput, MaskSpec};

/// Asserts that applying `spec` to `value` yields exactly the given outputs.
///
/// # Panics
/// Panics with the full output if either value differs.
pub fn assert_mask(value: &str, spec: &MaskSpec, masked: &str, unmasked: &str) {
    let out = apply_custom_mask(value, spec);
    assert_eq!(
        out,
        MaskOutput::new(masked, unmasked),
        "Unexpected result masking '{}' with {:?}",
        value,
        spec
    );
}

/// Asserts the structural invariants every pattern result must hold.
///
/// - the unmasked value never exceeds the template's `max_length`
/// - the unmasked value is a subsequence of the cleaned input
/// - every unmasked character also appears in the masked value, in order
///
/// # Panics
/// Panics if any invariant is violated.
pub fn assert_pattern_invariants(value: &str, template: &str) {
    let out = apply_custom_mask(value, &MaskSpec::template(template));
    let max_length = tokenize(template).max_length();

    assert!(
        out.unmasked.chars().count() <= max_length,
        "Unmasked '{}' exceeds max length {} of '{}'",
        out.unmasked,
        max_length,
        template
    );

    let cleaned = masker::clean_input(value);
    assert!(
        is_subsequence(&out.unmasked, &cleaned),
        "Unmasked '{}' is not a subsequence of cleaned input '{}'",
        out.unmasked,
        cleaned
    );
    assert!(
        is_subsequence(&out.unmasked, &out.masked),
        "Unmasked '{}' is not contained in masked '{}'",
        out.unmasked,
        out.masked
    );
    assert!(
        out.unmasked.chars().all(|c| c.is_ascii_alphanumeric()),
        "Unmasked '{}' contains non-alphanumeric characters",
        out.unmasked
    );
}

/// Asserts that re-applying a mask to its own output changes nothing.
///
/// # Panics
/// Panics if the second application differs from the first.
pub fn assert_idempotent(value: &str, spec: &MaskSpec) {
    let first = apply_custom_mask(value, spec);
    let from_masked = apply_custom_mask(&first.masked, spec);
    assert_eq!(
        first, from_masked,
        "Re-masking '{}' (from '{}') changed the result",
        first.masked, value
    );
}

/// Returns true if `needle` appears in `haystack` in order, gaps allowed.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}
