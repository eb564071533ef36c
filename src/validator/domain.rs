use std::sync::LazyLock;

use regex::Regex;

use super::types::ValidationOptions;

static LABEL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("label pattern compiles"));

static TLD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("tld pattern compiles"));

/// Dot/hyphen placement on the whole domain, then the shape of each label.
/// Label lengths are left to the length check.
pub(crate) fn check_domain(domain: &str) -> Result<(), String> {
    if !domain.contains('.') {
        return Err("domain must contain at least one dot".to_string());
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return Err("domain must not start or end with a dot".to_string());
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return Err("domain must not start or end with a hyphen".to_string());
    }
    if domain.contains("..") {
        return Err("domain must not contain consecutive dots".to_string());
    }

    for label in domain.split('.') {
        if !LABEL_CHARS.is_match(label) {
            return Err(format!("domain label '{label}' has invalid characters"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!(
                "domain label '{label}' must not start or end with a hyphen"
            ));
        }
    }
    Ok(())
}

/// The last label must be alphabetic and within the configured length range.
pub(crate) fn check_tld(domain: &str, options: &ValidationOptions) -> Result<(), String> {
    let plausible = domain.rsplit_once('.').is_some_and(|(_, tld)| {
        (options.tld_min_len..=options.tld_max_len).contains(&tld.len()) && TLD_CHARS.is_match(tld)
    });
    if plausible {
        Ok(())
    } else {
        Err("invalid or missing TLD".to_string())
    }
}

/// ASCII lower-casing only; no IDNA mapping.
pub(crate) fn normalize_domain(domain: &str) -> String {
    domain.to_ascii_lowercase()
}
