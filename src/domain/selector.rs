//! Picks one template out of a specification.
//!
//! Regex-guarded alternatives win first, in list order. Otherwise the
//! plain alternatives are ranked by their compiled `max_length` and the
//! smallest one that can hold the input is chosen; if none can, the
//! largest one is used so selection never fails.

use super::tokenize;
use crate::masking::{MaskAlternative, MaskSpec};

/// Returns the template to apply to `raw`.
///
/// Numeric specifications have no template and yield an empty string.
pub fn select_template<'a>(raw: &str, spec: &'a MaskSpec) -> &'a str {
    match spec {
        MaskSpec::Single(alternative) => alternative.template(),
        MaskSpec::Numeric(_) => "",
        MaskSpec::Alternatives(alternatives) => select_alternative(raw, alternatives),
    }
}

fn select_alternative<'a>(raw: &str, alternatives: &'a [MaskAlternative]) -> &'a str {
    if let Some(hit) = alternatives.iter().find(|alt| alt.matches(raw)) {
        tracing::debug!(template = hit.template(), "alternative selected by regex");
        return hit.template();
    }

    let mut candidates: Vec<(usize, &str)> = alternatives
        .iter()
        .filter(|alt| alt.regex().is_none())
        .map(|alt| (tokenize(alt.template()).max_length(), alt.template()))
        .collect();
    candidates.sort_by_key(|&(max_length, _)| max_length);

    let input_len = raw.chars().count();
    if let Some(&(max_length, template)) = candidates
        .iter()
        .find(|&&(max_length, _)| input_len <= max_length)
    {
        tracing::debug!(template, max_length, input_len, "alternative selected by length");
        return template;
    }

    match candidates.last() {
        Some(&(max_length, template)) => {
            tracing::debug!(
                template,
                max_length,
                input_len,
                "input overflows every alternative, using the largest"
            );
            template
        }
        None => "",
    }
}
