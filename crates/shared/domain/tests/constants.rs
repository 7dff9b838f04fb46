use elemental_domain::constants::{
    DEFAULT_FRAME_INTERVAL_MS, DEFAULT_WAIT_MS, ENV_PREFIX, ENV_SEPARATOR, RESERVED_ELEMENT_NAMES,
};

#[test]
fn constants_match_host_conventions() {
    assert_eq!(ENV_PREFIX, "ELEMENTAL");
    assert_eq!(ENV_SEPARATOR, "__");
    assert_eq!(DEFAULT_FRAME_INTERVAL_MS, 16);
    assert_eq!(DEFAULT_WAIT_MS, 100);
}

#[test]
fn reserved_names_all_contain_a_hyphen() {
    assert!(RESERVED_ELEMENT_NAMES.iter().all(|name| name.contains('-')));
    assert!(RESERVED_ELEMENT_NAMES.contains(&"annotation-xml"));
}
