//! Mask specifications.
//!
//! A specification is a single template, a numeric configuration, or an
//! ordered list of alternatives. Regexes guarding alternatives are
//! compiled when the specification is built, never while applying it.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Deserializer};

use crate::domain::{MaskPatterns, NumericConfig};
use crate::error::{MaskerError, MaskerResult};

/// One candidate template.
#[derive(Debug, Clone)]
pub enum MaskAlternative {
    /// Template selected by length
    Literal(String),

    /// Template selected whenever its regex matches the cleaned input
    Pattern { template: String, matcher: Regex },
}

impl MaskAlternative {
    pub fn literal(template: impl Into<String>) -> Self {
        Self::Literal(template.into())
    }

    /// Builds a regex-guarded alternative.
    ///
    /// `source` is either a serialized literal such as `/^[a-z]/i` or a
    /// bare pattern body. Flags `i`, `m` and `s` are honored; `g`, `u`
    /// and `y` are accepted and ignored.
    ///
    /// A bare body such as `^[a-z]` compiles to a live matcher. Callers
    /// that treat only the `/pattern/flags` form as a regex would instead
    /// leave such an entry inert, neither matching nor ranked by length.
    pub fn pattern(template: impl Into<String>, source: &str) -> MaskerResult<Self> {
        let template = template.into();
        let matcher = compile_matcher(&template, source)?;
        Ok(Self::Pattern { template, matcher })
    }

    pub fn with_regex(template: impl Into<String>, matcher: Regex) -> Self {
        Self::Pattern {
            template: template.into(),
            matcher,
        }
    }

    pub fn template(&self) -> &str {
        match self {
            Self::Literal(template) | Self::Pattern { template, .. } => template,
        }
    }

    pub fn regex(&self) -> Option<&Regex> {
        match self {
            Self::Literal(_) => None,
            Self::Pattern { matcher, .. } => Some(matcher),
        }
    }

    /// Returns true if this alternative carries a regex matching `raw`.
    pub fn matches(&self, raw: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(raw))
    }
}

impl From<&str> for MaskAlternative {
    fn from(template: &str) -> Self {
        Self::literal(template)
    }
}

impl From<String> for MaskAlternative {
    fn from(template: String) -> Self {
        Self::Literal(template)
    }
}

fn compile_matcher(template: &str, source: &str) -> MaskerResult<Regex> {
    let (body, flags) = match MaskPatterns::regex_literal().captures(source) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => (source, ""),
    };

    RegexBuilder::new(body)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()
        .map_err(|err| MaskerError::invalid_regex(template, source, err))
}

/// Complete mask specification.
#[derive(Debug, Clone)]
pub enum MaskSpec {
    /// A single template; any regex it carries is never consulted
    Single(MaskAlternative),

    /// Currency-like numeric formatting
    Numeric(NumericConfig),

    /// Ordered candidates; regex entries win first, in list order
    Alternatives(Vec<MaskAlternative>),
}

impl MaskSpec {
    pub fn template(template: impl Into<String>) -> Self {
        Self::Single(MaskAlternative::literal(template))
    }

    pub fn numeric(config: NumericConfig) -> Self {
        Self::Numeric(config)
    }

    pub fn alternatives<I, A>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<MaskAlternative>,
    {
        Self::Alternatives(alternatives.into_iter().map(Into::into).collect())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Parses a JSON specification.
    ///
    /// Accepted shapes: `"99:99"`, `{"mask": "...", "regex": "/.../"}`,
    /// a numeric object such as `{"prefix": "R$ ", "decimal": 2}`, or an
    /// array of the non-numeric shapes.
    pub fn from_json(json: &str) -> MaskerResult<Self> {
        let raw: RawMaskSpec = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawMaskSpec) -> MaskerResult<Self> {
        match raw {
            RawMaskSpec::Item(RawMaskItem::Numeric(config)) => Ok(Self::Numeric(config)),
            RawMaskSpec::Item(item) => {
                let alternative = item.into_alternative()?;
                Ok(Self::Single(alternative.unwrap_or_else(|| {
                    MaskAlternative::literal(String::new())
                })))
            }
            RawMaskSpec::List(items) => {
                let mut alternatives = Vec::with_capacity(items.len());
                for item in items {
                    match item.into_alternative()? {
                        Some(alternative) => alternatives.push(alternative),
                        None => tracing::debug!("ignoring numeric config inside alternative list"),
                    }
                }
                Ok(Self::Alternatives(alternatives))
            }
        }
    }
}

impl From<&str> for MaskSpec {
    fn from(template: &str) -> Self {
        Self::template(template)
    }
}

impl From<String> for MaskSpec {
    fn from(template: String) -> Self {
        Self::template(template)
    }
}

impl From<MaskAlternative> for MaskSpec {
    fn from(alternative: MaskAlternative) -> Self {
        Self::Single(alternative)
    }
}

impl From<NumericConfig> for MaskSpec {
    fn from(config: NumericConfig) -> Self {
        Self::Numeric(config)
    }
}

impl From<Vec<MaskAlternative>> for MaskSpec {
    fn from(alternatives: Vec<MaskAlternative>) -> Self {
        Self::Alternatives(alternatives)
    }
}

impl<'de> Deserialize<'de> for MaskSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawMaskSpec::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// Serialized form of a specification entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMaskItem {
    Template(String),
    Alternative {
        mask: String,
        #[serde(default)]
        regex: Option<String>,
    },
    Numeric(NumericConfig),
}

impl RawMaskItem {
    /// `None` for numeric configs, which have no template.
    fn into_alternative(self) -> MaskerResult<Option<MaskAlternative>> {
        match self {
            Self::Template(template) => Ok(Some(MaskAlternative::Literal(template))),
            Self::Alternative { mask, regex } => match regex.filter(|r| !r.is_empty()) {
                Some(source) => MaskAlternative::pattern(mask, &source).map(Some),
                None => Ok(Some(MaskAlternative::Literal(mask))),
            },
            Self::Numeric(_) => Ok(None),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMaskSpec {
    List(Vec<RawMaskItem>),
    Item(RawMaskItem),
}
