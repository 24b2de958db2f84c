//! Declarative input masking for form-style values.
//!
//! Given a raw value and a mask specification, this library produces a
//! human-formatted "masked" string and the canonical "unmasked" value.
//! It targets phone numbers, document numbers, dates, currency amounts
//! and vehicle plates, where a template governs how raw characters are
//! arranged around literal separators.
//!
//! # Features
//!
//! - **Templates**: `9` digit, `A` letter, `*` alphanumeric, `\x` escapes
//! - **Optional Groups**: `[9 ]` blocks emitted all or nothing, only when
//!   the input is long enough to also fill every mandatory placeholder
//! - **Alternatives**: pick a template by regex or by input length
//! - **Numeric Masks**: thousands grouping, decimal placement, prefix and
//!   suffix, with a canonical dot-decimal unmasked value
//!
//! # Architecture
//!
//! - [`domain`]: Tokenizer, applier, selector and numeric formatter
//! - [`masking`]: Specification types and the public entry points
//! - [`error`]: Errors raised while building specifications
//!
//! # Quick Start
//!
//! ```
//! use masker::{apply_custom_mask, MaskSpec};
//!
//! let out = apply_custom_mask("12345678909", &MaskSpec::template("999.999.999-99"));
//! assert_eq!(out.masked, "123.456.789-09");
//! assert_eq!(out.unmasked, "12345678909");
//! ```
//!
//! # Examples
//!
//! ## Choose Between Alternatives
//!
//! ```
//! use masker::{apply_custom_mask, MaskAlternative, MaskSpec};
//!
//! # fn main() -> Result<(), masker::MaskerError> {
//! let spec = MaskSpec::Alternatives(vec![
//!     MaskAlternative::literal("*9.999.999-9"),
//!     MaskAlternative::pattern("A-99.999.999", "/^[a-zA-Z]/")?,
//! ]);
//!
//! assert_eq!(apply_custom_mask("123456789", &spec).masked, "12.345.678-9");
//! assert_eq!(apply_custom_mask("A12345678", &spec).masked, "A-12.345.678");
//! # Ok(())
//! # }
//! ```
//!
//! ## Currency
//!
//! ```
//! use masker::{apply_custom_mask, MaskSpec, NumericConfig};
//!
//! let spec = MaskSpec::numeric(NumericConfig::default().with_prefix("R$ ").with_decimal(2));
//! let out = apply_custom_mask("12345", &spec);
//! assert_eq!(out.masked, "R$ 123,45");
//! assert_eq!(out.unmasked, "123.45");
//! ```
//!
//! ## Load a Specification from JSON
//!
//! ```
//! use masker::{apply_custom_mask, MaskSpec};
//!
//! # fn main() -> Result<(), masker::MaskerError> {
//! let spec = MaskSpec::from_json(r#"["AAA-9*99", {"mask": "AAA9A99", "regex": "/^[A-Z]{3}\\d[A-Z]/i"}]"#)?;
//! assert_eq!(apply_custom_mask("ABC1D23", &spec).masked, "ABC1D23");
//! assert_eq!(apply_custom_mask("ABC1234", &spec).masked, "ABC-1234");
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod masking;

// Re-exports for convenient access
pub use domain::{
    apply_tokens, clean_input, format_numeric, select_template, tokenize, CharClass, NumericConfig,
    Token, TokenSequence,
};
pub use error::{MaskerError, MaskerResult};
pub use masking::{apply_custom_mask, apply_custom_mask_opt, MaskAlternative, MaskOutput, MaskSpec};
