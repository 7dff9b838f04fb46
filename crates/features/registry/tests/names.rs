use elemental_registry::name::{NameViolation, is_valid_name, validate_name};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lowercase_hyphenated_names_are_valid(prefix in "[a-z][a-z0-9]{0,8}", suffix in "[a-z0-9._]{0,8}") {
        let name = format!("{prefix}-{suffix}");
        prop_assume!(!matches!(name.as_str(), "font-face" | "color-profile" | "missing-glyph"));
        prop_assert!(is_valid_name(&name), "{name}");
    }

    #[test]
    fn names_without_hyphen_are_rejected(name in "[a-z][a-z0-9._]{0,16}") {
        prop_assert_eq!(validate_name(&name), Err(NameViolation::MissingHyphen));
    }

    #[test]
    fn uppercase_anywhere_is_rejected(head in "[a-z]{1,4}", upper in "[A-Z]", tail in "[a-z]{0,4}") {
        let name = format!("{head}-{upper}{tail}");
        prop_assert_eq!(validate_name(&name), Err(NameViolation::Uppercase));
    }
}

#[test]
fn every_reserved_name_is_rejected() {
    for name in elemental_domain::constants::RESERVED_ELEMENT_NAMES {
        assert_eq!(validate_name(name), Err(NameViolation::Reserved), "{name}");
    }
}
