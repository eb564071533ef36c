use addrcheck::{EmailError, Rule, ValidationOptions, validate, validate_bytes, validate_with};

#[test]
fn documented_examples() {
    assert!(validate("user@example.com").valid);
    for candidate in [
        "user..name@example.com",
        "user@.example.com",
        "user@example.c",
        "@example.com",
        "user@",
    ] {
        let v = validate(candidate);
        assert!(!v.valid, "{candidate} should be invalid");
        assert!(v.reason.is_some());
    }
}

#[test]
fn reasons_snapshot() {
    let candidates = [
        "user@example.com",
        "user..name@example.com",
        "user@.example.com",
        "user@example.c",
        "@example.com",
        "user@",
        "a@b@c.com",
        ".abc@example.com",
        "a b@example.com",
        "user@-example.com",
        "user@example..com",
        "user@example",
        "user@example.123",
        "user@exa_mple.com",
        "user@example-.com",
        "user@example.com-",
    ];
    let report = candidates
        .iter()
        .map(|c| format!("{c} => {}", validate(c)))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(report, @r#"
    user@example.com => Valid
    user..name@example.com => Invalid: local part must not contain consecutive dots
    user@.example.com => Invalid: domain must not start or end with a dot
    user@example.c => Invalid: invalid or missing TLD
    @example.com => Invalid: local or domain part empty
    user@ => Invalid: local or domain part empty
    a@b@c.com => Invalid: must contain exactly one '@'
    .abc@example.com => Invalid: local part must not start or end with a dot
    a b@example.com => Invalid: invalid character ' ' in local part
    user@-example.com => Invalid: domain must not start or end with a hyphen
    user@example..com => Invalid: domain must not contain consecutive dots
    user@example => Invalid: domain must contain at least one dot
    user@example.123 => Invalid: invalid or missing TLD
    user@exa_mple.com => Invalid: domain label 'exa_mple' has invalid characters
    user@example-.com => Invalid: domain label 'example-' must not start or end with a hyphen
    user@example.com- => Invalid: domain must not start or end with a hyphen
    "#);
}

#[test]
fn length_limits() {
    let local = "a".repeat(64);
    assert!(validate(&format!("{local}@example.com")).valid);

    let v = validate(&format!("{local}a@example.com"));
    assert_eq!(v.rule, Some(Rule::Length));
    assert_eq!(v.reason(), Some("exceeds maximum length"));

    let domain = format!(
        "{}.{}.{}.com",
        "b".repeat(63),
        "c".repeat(63),
        "d".repeat(63)
    );
    let v = validate(&format!("{local}@{domain}"));
    assert_eq!(v.rule, Some(Rule::Length));
    assert_eq!(v.reason(), Some("exceeds maximum length"));

    let v = validate(&format!("user@{}.com", "x".repeat(64)));
    assert_eq!(v.rule, Some(Rule::Length));
    assert_eq!(v.reason(), Some("exceeds maximum length"));

    let tight = ValidationOptions {
        max_domain_len: 10,
        ..ValidationOptions::standard()
    };
    let v = validate_with("user@example.com", &tight);
    assert_eq!(v.rule, Some(Rule::Length));
    assert_eq!(v.reason(), Some("exceeds maximum length"));
}

#[test]
fn tld_profiles() {
    let address = format!("user@example.{}", "z".repeat(30));
    assert_eq!(validate(&address).rule, Some(Rule::Tld));
    assert!(validate_with(&address, &ValidationOptions::long_tld()).valid);
}

#[test]
fn non_text_input_is_an_error() {
    let err = validate_bytes(b"user@exa\xc3mple.com").unwrap_err();
    assert!(matches!(err, EmailError::InputType { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn same_input_same_verdict() {
    for candidate in ["user@example.com", "bad@@input", "  spaced@example.org  "] {
        assert_eq!(validate(candidate), validate(candidate));
    }
}
