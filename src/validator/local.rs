use phf::phf_set;

/// Symbols allowed in an unquoted local part besides ASCII letters and digits.
static LOCAL_SYMBOLS: phf::Set<char> = phf_set! {
    '!', '#', '$', '%', '&', '\'', '*', '+', '-', '/', '=', '?', '^', '_', '`', '{', '|', '}', '~',
    '.',
};

/// Dot placement first, then the character whitelist.
pub(crate) fn check_local(local: &str) -> Result<(), String> {
    if local.starts_with('.') || local.ends_with('.') {
        return Err("local part must not start or end with a dot".to_string());
    }
    if local.contains("..") {
        return Err("local part must not contain consecutive dots".to_string());
    }
    match local
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !LOCAL_SYMBOLS.contains(c))
    {
        Some(c) => Err(format!("invalid character {c:?} in local part")),
        None => Ok(()),
    }
}
