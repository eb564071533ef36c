mod domain;
mod length;
mod local;
mod types;

pub use types::{EmailError, NormalizedEmail, Rule, ValidationOptions, Verdict};

use domain::{check_domain, check_tld, normalize_domain};
use length::check_lengths;
use local::check_local;
use types::Rejection;

/// Validates with [`ValidationOptions::standard`].
pub fn validate(candidate: &str) -> Verdict {
    validate_with(candidate, &ValidationOptions::standard())
}

/// Shorthand for `validate(candidate).valid`.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).valid
}

/// Runs the checks in order and reports the first failure.
pub fn validate_with(candidate: &str, options: &ValidationOptions) -> Verdict {
    match run_checks(prepare(candidate, options), options) {
        Ok(()) => Verdict::valid(),
        Err(rejection) => {
            #[cfg(feature = "with-tracing")]
            tracing::debug!(
                rule = %rejection.rule,
                reason = %rejection.reason,
                "candidate rejected"
            );
            rejection.into()
        }
    }
}

/// Entry point for raw input: bytes that are not UTF-8 are an
/// [`EmailError::InputType`], never an invalid verdict.
pub fn validate_bytes(candidate: &[u8]) -> Result<Verdict, EmailError> {
    validate_bytes_with(candidate, &ValidationOptions::standard())
}

pub fn validate_bytes_with(
    candidate: &[u8],
    options: &ValidationOptions,
) -> Result<Verdict, EmailError> {
    let text = std::str::from_utf8(candidate).map_err(EmailError::not_utf8)?;
    Ok(validate_with(text, options))
}

/// Entry point for optional input (e.g. a missing form field).
pub fn validate_input(candidate: Option<&str>) -> Result<Verdict, EmailError> {
    candidate.map(validate).ok_or_else(EmailError::missing)
}

/// Normalizes with [`ValidationOptions::standard`].
pub fn normalize(candidate: &str) -> NormalizedEmail {
    normalize_with(candidate, &ValidationOptions::standard())
}

/// Splits on the first '@' (even when invalid) and lower-cases the domain.
pub fn normalize_with(candidate: &str, options: &ValidationOptions) -> NormalizedEmail {
    let input = prepare(candidate, options);
    let (local, domain) = input.split_once('@').unwrap_or(("", ""));

    NormalizedEmail {
        original: candidate.to_string(),
        local: local.to_string(),
        domain: normalize_domain(domain),
        verdict: validate_with(candidate, options),
    }
}

pub fn normalize_bytes_with(
    candidate: &[u8],
    options: &ValidationOptions,
) -> Result<NormalizedEmail, EmailError> {
    let text = std::str::from_utf8(candidate).map_err(EmailError::not_utf8)?;
    Ok(normalize_with(text, options))
}

fn prepare<'a>(candidate: &'a str, options: &ValidationOptions) -> &'a str {
    if options.trim {
        candidate.trim()
    } else {
        candidate
    }
}

fn split_address(address: &str) -> Option<(&str, &str)> {
    let (local, domain) = address.split_once('@')?;
    if domain.contains('@') {
        return None;
    }
    Some((local, domain))
}

fn run_checks(address: &str, options: &ValidationOptions) -> Result<(), Rejection> {
    let (local, domain) = split_address(address)
        .ok_or_else(|| Rejection::new(Rule::Separator, "must contain exactly one '@'"))?;

    if local.is_empty() || domain.is_empty() {
        return Err(Rejection::new(Rule::EmptyPart, "local or domain part empty"));
    }

    check_local(local).map_err(|reason| Rejection::new(Rule::LocalPart, reason))?;
    check_domain(domain).map_err(|reason| Rejection::new(Rule::DomainPart, reason))?;
    check_tld(domain, options).map_err(|reason| Rejection::new(Rule::Tld, reason))?;
    check_lengths(address, local, domain, options).map_err(|exceeded| {
        #[cfg(feature = "with-tracing")]
        tracing::debug!(limit = %exceeded, "length limit hit");
        #[cfg(not(feature = "with-tracing"))]
        let _ = exceeded;
        Rejection::new(Rule::Length, length::REASON)
    })?;

    Ok(())
}
