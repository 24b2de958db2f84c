//! Public masking entry points.
//!
//! [`apply_custom_mask`] decides between numeric and pattern masking,
//! cleans the input, selects a template, compiles it and applies it.

pub mod output;
pub mod spec;

pub use output::MaskOutput;
pub use spec::{MaskAlternative, MaskSpec};

use crate::domain::{apply_tokens, clean_input, format_numeric, select_template, tokenize};

/// Applies `spec` to `value`.
///
/// Never fails: malformed templates, noise characters and overflowing
/// input all degrade to partial or empty output.
///
/// # Examples
///
/// ```
/// use masker::{apply_custom_mask, MaskSpec};
///
/// let out = apply_custom_mask("11912345678", &MaskSpec::template("(99) [9 ]9999-9999"));
/// assert_eq!(out.masked, "(11) 9 1234-5678");
/// assert_eq!(out.unmasked, "11912345678");
/// ```
pub fn apply_custom_mask(value: &str, spec: &MaskSpec) -> MaskOutput {
    if let MaskSpec::Numeric(config) = spec {
        return format_numeric(value, config);
    }

    let raw = clean_input(value);
    let template = select_template(&raw, spec);
    let seq = tokenize(template);

    tracing::trace!(template, raw = %raw, "applying pattern mask");

    apply_tokens(&raw, &seq).truncate_unmasked(seq.max_length())
}

/// Like [`apply_custom_mask`], treating a missing value as empty.
pub fn apply_custom_mask_opt(value: Option<&str>, spec: &MaskSpec) -> MaskOutput {
    apply_custom_mask(value.unwrap_or_default(), spec)
}
