use elemental_properties::{Properties, ReactiveElement, Value};

fn shout(value: &Value) -> Value {
    Value::string(value.to_string().to_uppercase())
}

#[derive(Default, Properties)]
struct Badge {
    #[property(reflect = false, prop2attr = "shout")]
    text: String,
    #[property(observe = false)]
    count: Vec<u16>,
    #[property(accessor)]
    tone: char,
}

impl ReactiveElement for Badge {
    fn request_update(&mut self, _name: &'static str, _old: Value, _new: Value) {}
}

fn main() {
    let mut badge = Badge::default();
    badge.set_text("new".to_owned());
    badge.set_count(vec![1, 2]);
    let _ = (badge.text(), badge.count(), badge.tone);
    let _ = Badge::class_properties().len();
}
