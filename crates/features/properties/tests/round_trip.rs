use elemental_properties::{Properties, ReactiveElement, SameValue, ToValue, Value};
use proptest::prelude::*;

#[derive(Debug, Default, Properties)]
struct Sample {
    #[property]
    ratio: f64,
    #[property]
    tag: Option<String>,
    #[property]
    items: Vec<i32>,
    calls: Vec<(&'static str, Value, Value)>,
}

impl ReactiveElement for Sample {
    fn request_update(&mut self, name: &'static str, old: Value, new: Value) {
        self.calls.push((name, old, new));
    }
}

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>(),
        Just(f64::NAN),
        Just(0.0),
        Just(-0.0),
        Just(f64::INFINITY),
    ]
}

proptest! {
    #[test]
    fn set_then_get_returns_the_same_value(
        ratios in prop::collection::vec(any_f64(), 1..8),
        tag in prop::option::of("[a-z]{0,6}"),
        items in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        let mut sample = Sample::default();

        for ratio in &ratios {
            sample.set_ratio(*ratio);
            prop_assert!(sample.ratio().same_value(ratio));
        }
        sample.set_tag(tag.clone());
        prop_assert_eq!(sample.tag(), &tag);
        sample.set_items(items.clone());
        prop_assert_eq!(sample.items(), &items);

        prop_assert_eq!(sample.calls.len(), ratios.len() + 2);
    }

    #[test]
    fn hook_sees_previous_and_current_values(ratios in prop::collection::vec(any_f64(), 1..8)) {
        let mut sample = Sample::default();
        let mut previous = 0.0_f64;

        for ratio in ratios {
            sample.set_ratio(ratio);
            let (name, old, new) = sample.calls.last().cloned().unwrap();
            prop_assert_eq!(name, "ratio");
            prop_assert!(old.same_value(&previous.to_value()));
            prop_assert!(new.same_value(&ratio.to_value()));
            previous = ratio;
        }
    }
}
