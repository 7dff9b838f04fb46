use elemental_derive::elemental_error;
use std::borrow::Cow;

#[elemental_error]
#[derive(Debug)]
pub enum GatedError {
    #[error("Plain failure: {message}")]
    Plain { message: Cow<'static, str> },

    #[cfg(any())]
    #[error("Never compiled{}: {source}", format_context(.context))]
    Gated { source: std::fmt::Error, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = GatedError::Plain { message: "plain".into() };
    assert_eq!(err.to_string(), "Plain failure: plain");
}
