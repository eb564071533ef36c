use std::fmt;

use thiserror::Error;

/// The sequential checks, in the order they run.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Separator,
    EmptyPart,
    LocalPart,
    DomainPart,
    Tld,
    Length,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Separator => "separator",
            Rule::EmptyPart => "empty-part",
            Rule::LocalPart => "local-part",
            Rule::DomainPart => "domain-part",
            Rule::Tld => "tld",
            Rule::Length => "length",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single validation call.
///
/// `reason` and `rule` are both `None` exactly when `valid` is true.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rule: Option<Rule>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub reason: Option<String>,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            rule: None,
            reason: None,
        }
    }

    pub fn invalid(rule: Rule, reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            rule: Some(rule),
            reason: Some(reason.into()),
        }
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            None => f.write_str("Valid"),
            Some(reason) => write!(f, "Invalid: {reason}"),
        }
    }
}

/// Limits applied by the validator.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    pub max_total_len: usize,
    pub max_local_len: usize,
    pub max_domain_len: usize,
    pub max_label_len: usize,
    pub tld_min_len: usize,
    pub tld_max_len: usize,
    /// strip leading/trailing whitespace before checking
    pub trim: bool,
}

impl ValidationOptions {
    pub fn standard() -> Self {
        Self {
            max_total_len: 254,
            max_local_len: 64,
            max_domain_len: 255,
            max_label_len: 63,
            tld_min_len: 2,
            tld_max_len: 24,
            trim: true,
        }
    }

    /// Same as [`standard`](Self::standard) but accepts TLDs up to a full
    /// DNS label (63 chars).
    pub fn long_tld() -> Self {
        Self {
            tld_max_len: 63,
            ..Self::standard()
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Candidate split into its parts, domain lower-cased, with its verdict.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEmail {
    pub original: String,
    pub local: String,
    pub domain: String,
    pub verdict: Verdict,
}

impl NormalizedEmail {
    pub fn is_valid(&self) -> bool {
        self.verdict.valid
    }

    /// `local@domain` with the normalized domain, only for valid candidates.
    pub fn address(&self) -> Option<String> {
        self.verdict
            .valid
            .then(|| format!("{}@{}", self.local, self.domain))
    }
}

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("unsupported input type: expected a string, got {found}")]
    InputType {
        found: &'static str,
        #[source]
        source: Option<std::str::Utf8Error>,
    },
}

impl EmailError {
    pub(crate) fn not_utf8(source: std::str::Utf8Error) -> Self {
        Self::InputType {
            found: "non-UTF-8 bytes",
            source: Some(source),
        }
    }

    pub(crate) fn missing() -> Self {
        Self::InputType {
            found: "no value",
            source: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Rejection {
    pub rule: Rule,
    pub reason: String,
}

impl Rejection {
    pub(crate) fn new(rule: Rule, reason: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
        }
    }
}

impl From<Rejection> for Verdict {
    fn from(rejection: Rejection) -> Self {
        Verdict::invalid(rejection.rule, rejection.reason)
    }
}
