use std::fmt;

use super::types::ValidationOptions;

pub(crate) const REASON: &str = "exceeds maximum length";

/// Which limit was hit; only logged, the verdict carries [`REASON`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LengthExceeded {
    pub what: &'static str,
    pub len: usize,
    pub max: usize,
}

impl fmt::Display for LengthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {} characters (max {})", self.what, self.len, self.max)
    }
}

pub(crate) fn check_lengths(
    address: &str,
    local: &str,
    domain: &str,
    options: &ValidationOptions,
) -> Result<(), LengthExceeded> {
    let over =
        |what: &'static str, len: usize, max: usize| Err(LengthExceeded { what, len, max });

    if address.len() > options.max_total_len {
        return over("address", address.len(), options.max_total_len);
    }
    if local.len() > options.max_local_len {
        return over("local part", local.len(), options.max_local_len);
    }
    if domain.len() > options.max_domain_len {
        return over("domain", domain.len(), options.max_domain_len);
    }
    if let Some(label) = domain
        .split('.')
        .find(|label| label.len() > options.max_label_len)
    {
        return over("domain label", label.len(), options.max_label_len);
    }
    Ok(())
}
