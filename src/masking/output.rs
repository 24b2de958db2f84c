//! Result of applying a mask.

use serde::Serialize;

/// Masked and canonical values produced by a mask.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaskOutput {
    /// Fully formatted value, literals included
    pub masked: String,

    /// Characters consumed from the input, without formatting
    pub unmasked: String,
}

impl MaskOutput {
    pub fn new(masked: impl Into<String>, unmasked: impl Into<String>) -> Self {
        Self {
            masked: masked.into(),
            unmasked: unmasked.into(),
        }
    }

    /// Both values empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.masked.is_empty() && self.unmasked.is_empty()
    }

    /// Keeps at most `max` characters of the unmasked value.
    pub(crate) fn truncate_unmasked(mut self, max: usize) -> Self {
        if let Some((byte_idx, _)) = self.unmasked.char_indices().nth(max) {
            self.unmasked.truncate(byte_idx);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output() {
        assert!(MaskOutput::empty().is_empty());
        assert!(!MaskOutput::new("1", "1").is_empty());
    }

    #[test]
    fn test_truncate_unmasked() {
        let out = MaskOutput::new("12:34", "123456").truncate_unmasked(4);
        assert_eq!(out.unmasked, "1234");
        assert_eq!(out.masked, "12:34");

        let out = MaskOutput::new("1", "1").truncate_unmasked(4);
        assert_eq!(out.unmasked, "1");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&MaskOutput::new("12:34", "1234")).unwrap();
        assert_eq!(json, r#"{"masked":"12:34","unmasked":"1234"}"#);
    }
}
