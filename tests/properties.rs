use addrcheck::{Rule, normalize, validate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn no_separator_is_invalid(s in "[^@]{0,40}") {
        let v = validate(&s);
        prop_assert!(!v.valid);
        prop_assert_eq!(v.rule, Some(Rule::Separator));
    }

    #[test]
    fn several_separators_are_invalid(
        a in "[a-z.]{0,10}",
        b in "[a-z.]{0,10}",
        c in "[a-z.@]{0,10}",
    ) {
        let v = validate(&format!("{a}@{b}@{c}"));
        prop_assert!(!v.valid);
        prop_assert_eq!(v.rule, Some(Rule::Separator));
    }

    #[test]
    fn idempotent(s in ".{0,80}") {
        prop_assert_eq!(validate(&s), validate(&s));
    }

    #[test]
    fn reason_present_iff_invalid(s in "[a-zA-Z0-9.@_+-]{0,40}") {
        let v = validate(&s);
        prop_assert_eq!(v.valid, v.reason.is_none());
        prop_assert_eq!(v.valid, v.rule.is_none());
    }

    #[test]
    fn simple_addresses_are_valid(
        local in "[a-z0-9]{1,20}(\\.[a-z0-9+_-]{1,10}){0,2}",
        labels in proptest::collection::vec("[a-z0-9]{1,20}", 1..4),
        tld in "[a-z]{2,24}",
    ) {
        let address = format!("{local}@{}.{tld}", labels.join("."));
        let v = validate(&address);
        prop_assert!(v.valid, "{} -> {:?}", address, v.reason);
    }

    #[test]
    fn normalizing_a_normalized_address_is_stable(
        local in "[a-zA-Z0-9]{1,20}",
        host in "[a-zA-Z0-9]{1,20}",
        tld in "[a-zA-Z]{2,6}",
    ) {
        let first = normalize(&format!("{local}@{host}.{tld}"));
        let address = first.address().expect("valid address");
        let second = normalize(&address);
        prop_assert_eq!(second.address(), Some(address));
        prop_assert_eq!(second.domain, first.domain);
    }
}
