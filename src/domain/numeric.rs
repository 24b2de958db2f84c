//! Currency-like formatting for pure numeric masks.
//!
//! The canonical unmasked value always uses a dot as decimal point and
//! is validated against `^\d+(\.\d+)?$`. Anything else collapses both
//! outputs to empty strings, so callers never see a malformed number.

use serde::{Deserialize, Deserializer, Serialize};

use super::MaskPatterns;
use crate::masking::MaskOutput;

/// Numeric mask configuration.
///
/// Every field is optional when deserialized; see [`Default`] for the
/// values used when a field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct NumericConfig {
    /// Text placed before the number
    pub prefix: String,

    /// Text placed after the number
    pub suffix: String,

    /// Thousands delimiter inserted every three integer digits
    pub delimiter: String,

    /// Decimal separator used in the masked value
    pub separator: String,

    /// Number of decimal digits; negative values count as zero
    #[serde(deserialize_with = "non_negative")]
    pub decimal: usize,

    /// Maximum number of digits kept; `None` or zero disables truncation
    #[serde(alias = "max_length")]
    pub max_length: Option<usize>,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            delimiter: ".".to_string(),
            separator: ",".to_string(),
            decimal: 0,
            max_length: None,
        }
    }
}

impl NumericConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_decimal(mut self, decimal: usize) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

fn non_negative<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(usize::try_from(value.max(0)).unwrap_or(usize::MAX))
}

/// Inserts `delimiter` every three digits counting from the right.
fn group_thousands(integer: &str, delimiter: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * delimiter.len());
    for (idx, c) in integer.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push_str(delimiter);
        }
        grouped.push(c);
    }
    grouped
}

/// Formats the digits of `value` according to `config`.
pub fn format_numeric(value: &str, config: &NumericConfig) -> MaskOutput {
    let mut digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if let Some(max) = config.max_length.filter(|&max| max > 0) {
        digits.truncate(max);
    }

    if digits.is_empty() {
        return MaskOutput::empty();
    }

    let trimmed = digits.trim_start_matches('0');
    let mut digits = if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    };

    let decimal = config.decimal;
    let (integer, fraction) = if decimal > 0 {
        if digits.len() < decimal {
            digits = "0".repeat(decimal - digits.len()) + &digits;
        }
        let split = digits.len() - decimal;
        let integer = if split == 0 { "0" } else { &digits[..split] };
        (integer.to_string(), Some(digits[split..].to_string()))
    } else {
        (digits, None)
    };

    let grouped = group_thousands(&integer, &config.delimiter);
    let (core, canonical) = match &fraction {
        Some(fraction) => (
            format!("{grouped}{}{fraction}", config.separator),
            format!("{integer}.{fraction}"),
        ),
        None => (grouped, integer),
    };

    if !MaskPatterns::canonical_number().is_match(&canonical) {
        tracing::debug!(canonical = %canonical, "rejected malformed numeric value");
        return MaskOutput::empty();
    }

    MaskOutput::new(
        format!("{}{core}{}", config.prefix, config.suffix),
        canonical,
    )
}
