#![forbid(unsafe_code)]
//! addrcheck — heuristic syntactic validation of e-mail addresses.
//!
//! One separator, a whitelisted local part, a well-formed domain, a plausible
//! TLD and sane lengths. No DNS, no mailbox probing, no IDNA.
//!
//! ```
//! let verdict = addrcheck::validate("user@example.com");
//! assert!(verdict.valid);
//!
//! let verdict = addrcheck::validate("user@example.c");
//! assert_eq!(verdict.reason(), Some("invalid or missing TLD"));
//! ```

pub mod validator;
pub use validator::{
    EmailError, NormalizedEmail, Rule, ValidationOptions, Verdict, is_valid, normalize,
    normalize_bytes_with, normalize_with, validate, validate_bytes, validate_bytes_with,
    validate_input, validate_with,
};
