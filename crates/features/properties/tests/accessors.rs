use elemental_properties::convert::{attr2bool, bool2attr, is_different_value};
use elemental_properties::{
    Properties, PropertyDeclaration, PropertyTableBuilder, ReactiveElement, SameValue, Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};

fn to_attr(value: &Value) -> Value {
    bool2attr(value.as_bool().unwrap_or(false))
}

fn from_attr(value: &Value) -> Value {
    Value::Bool(attr2bool(value))
}

fn never_modified(_: &Value, _: &Value) -> bool {
    false
}

type Update = (&'static str, Value, Value);

#[derive(Debug, Default, Properties)]
struct Slider {
    #[property]
    value: f64,
    #[property(reflect, prop2attr = to_attr, attr2prop = from_attr)]
    disabled: bool,
    #[property(observe = false, modified = never_modified)]
    label: Option<String>,
    #[property(name = "aria-valuetext")]
    value_text: String,
    #[property]
    nothing: (),
    #[property]
    r#type: u8,
    updates: Vec<Update>,
}

impl ReactiveElement for Slider {
    fn request_update(&mut self, name: &'static str, old: Value, new: Value) {
        self.updates.push((name, old, new));
    }
}

/// Exposes its own accessors and only registers metadata.
#[derive(Debug, Default, Properties)]
struct Clock {
    #[property(accessor, reflect = true)]
    seconds: u64,
    changes: usize,
}

impl Clock {
    fn seconds(&self) -> u64 {
        self.seconds
    }

    fn set_seconds(&mut self, seconds: u64) {
        let old = self.seconds;
        self.seconds = seconds;
        self.request_update("seconds", Value::from(old), Value::from(seconds));
    }
}

impl ReactiveElement for Clock {
    fn request_update(&mut self, _: &'static str, old: Value, new: Value) {
        if is_different_value(&old, &new) {
            self.changes += 1;
        }
    }
}

static HOOKED: AtomicUsize = AtomicUsize::new(0);

#[derive(Default, Properties)]
struct Hooked {
    #[property]
    first: i32,
    #[property]
    second: i32,
}

impl ReactiveElement for Hooked {
    fn request_update(&mut self, _: &'static str, _: Value, _: Value) {}

    fn add_class_property(
        builder: &mut PropertyTableBuilder,
        name: &'static str,
        declaration: PropertyDeclaration,
    ) {
        HOOKED.fetch_add(1, Ordering::SeqCst);
        builder.insert(name, declaration);
    }
}

#[test]
fn setter_reports_old_and_new_values() {
    let mut slider = Slider::default();
    slider.set_value(0.5);
    slider.set_value(0.75);

    assert!(0.75_f64.same_value(slider.value()));
    assert_eq!(
        slider.updates,
        [
            ("value", Value::Number(0.0), Value::Number(0.5)),
            ("value", Value::Number(0.5), Value::Number(0.75)),
        ]
    );
}

#[test]
fn hook_fires_even_when_the_value_is_unchanged() {
    let mut slider = Slider::default();
    slider.set_disabled(false);
    slider.set_disabled(false);

    assert_eq!(slider.updates.len(), 2);
    assert!(slider.updates.iter().all(|(_, old, new)| old == new));
}

#[test]
fn round_trips_awkward_values() {
    let mut slider = Slider::default();

    slider.set_value(f64::NAN);
    assert!(slider.value().is_nan());

    slider.set_label(Some("volume".into()));
    assert_eq!(slider.label().as_deref(), Some("volume"));
    slider.set_label(None);
    assert!(slider.label().is_none());

    slider.set_nothing(());
    assert_eq!(slider.nothing(), &());

    let (_, old, new) = &slider.updates[0];
    assert_eq!(old, &Value::Number(0.0));
    assert!(new.same_value(&Value::Number(f64::NAN)));
    assert_eq!(slider.updates[2], ("label", Value::string("volume"), Value::Null));
    assert_eq!(slider.updates[3], ("nothing", Value::Undefined, Value::Undefined));
}

#[test]
fn names_and_raw_identifiers() {
    let mut slider = Slider::default();
    slider.set_value_text("half".to_owned());
    slider.set_type(3);

    assert_eq!(slider.value_text(), "half");
    assert_eq!(*slider.r#type(), 3);
    assert_eq!(slider.updates[0].0, "aria-valuetext");
    assert_eq!(slider.updates[1].0, "type");
}

#[test]
fn class_table_carries_the_declarations() {
    let table = Slider::class_properties();

    assert_eq!(
        table.names().collect::<Vec<_>>(),
        ["value", "disabled", "label", "aria-valuetext", "nothing", "type"]
    );
    assert!(table.owner().ends_with("Slider"));
    assert!(!table.contains("updates"));

    let disabled = Slider::property_declaration("disabled").unwrap();
    assert!(disabled.reflect());
    assert_eq!(disabled.to_attribute(&Value::Bool(true)), Value::string(""));
    assert_eq!(disabled.to_attribute(&Value::Bool(false)), Value::Null);
    assert_eq!(disabled.from_attribute(&Value::string("")), Value::Bool(true));

    let label = table.get("label").unwrap();
    assert!(!label.observe());
    assert!(!label.is_modified(&Value::Null, &Value::string("x")));

    let value = table.get("value").unwrap();
    assert!(value.observe());
    assert!(!value.reflect());
    assert!(!value.is_modified(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));

    assert_eq!(table.reflected().map(|(n, _)| n).collect::<Vec<_>>(), ["disabled"]);
}

#[test]
fn accessor_properties_only_register_metadata() {
    let mut clock = Clock::default();
    clock.set_seconds(5);
    clock.set_seconds(5);

    assert_eq!(clock.seconds(), 5);
    assert_eq!(clock.changes, 1);

    let seconds = Clock::class_properties().get("seconds").unwrap();
    assert!(seconds.reflect());
    assert!(seconds.observe());
}

#[test]
fn table_is_built_once_per_type() {
    let first = Hooked::class_properties();
    let second = Hooked::class_properties();

    assert!(std::ptr::eq(first, second));
    assert_eq!(HOOKED.load(Ordering::SeqCst), 2);
    assert_eq!(first.len(), 2);

    let mut hooked = Hooked::default();
    hooked.set_first(1);
    hooked.set_second(*hooked.first() + 1);
    assert_eq!(*hooked.second(), 2);
}

#[test]
fn macros_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/properties_pass.rs");
}
