use elemental_domain::convert::{attr2bool, bool2attr, is_different, is_different_value};
use elemental_domain::{SameValue, ToValue, Value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn same_value_is_reflexive_for_every_float(x in any::<f64>()) {
        prop_assert!(x.same_value(&x));
        prop_assert!(!is_different(&x, &x));
        prop_assert!(!is_different_value(&x.to_value(), &x.to_value()));
    }

    #[test]
    fn same_value_agrees_with_eq_away_from_nan_and_zero(a in any::<f64>(), b in any::<f64>()) {
        prop_assume!(!a.is_nan() && !b.is_nan() && a != 0.0 && b != 0.0);
        #[allow(clippy::float_cmp)]
        let eq = a == b;
        prop_assert_eq!(a.same_value(&b), eq);
    }

    #[test]
    fn attribute_round_trip_preserves_booleans(flag in any::<bool>()) {
        prop_assert_eq!(attr2bool(&bool2attr(flag)), flag);
    }

    #[test]
    fn any_present_attribute_is_true(text in ".*") {
        prop_assert!(attr2bool(&Value::string(text)));
    }
}

#[test]
fn documented_edge_cases() {
    assert!(!is_different(&f64::NAN, &f64::NAN));
    assert!(is_different(&0.0_f64, &-0.0_f64));
    assert!(is_different(&1, &2));
    assert!(!attr2bool(&Value::Null));
    assert!(attr2bool(&Value::string("")));
    assert_eq!(bool2attr(true), Value::string(""));
    assert_eq!(bool2attr(false), Value::Null);
}
