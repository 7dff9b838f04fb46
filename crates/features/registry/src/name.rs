//! Custom element naming rules.
//!
//! A valid name starts with an ASCII lowercase letter, contains a hyphen, has no ASCII
//! uppercase letters, is built from potential custom element name characters, and is not
//! one of the reserved SVG/MathML names.

use elemental_domain::constants::RESERVED_ELEMENT_NAMES;

/// Why a tag was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameViolation {
    Empty,
    InvalidStart,
    MissingHyphen,
    Uppercase,
    InvalidCharacter(char),
    Reserved,
}

impl NameViolation {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Empty => "name is empty",
            Self::InvalidStart => "name must start with an ASCII lowercase letter",
            Self::MissingHyphen => "name must contain a hyphen",
            Self::Uppercase => "name must not contain ASCII uppercase letters",
            Self::InvalidCharacter(_) => "name contains a character that is not allowed",
            Self::Reserved => "name is reserved",
        }
    }
}

/// Checks `name` against the custom element naming rules.
///
/// # Errors
/// Returns the first [`NameViolation`] found.
pub fn validate_name(name: &str) -> Result<(), NameViolation> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(NameViolation::Empty);
    };
    if !first.is_ascii_lowercase() {
        return Err(NameViolation::InvalidStart);
    }

    let mut hyphen = false;
    for c in chars {
        if c.is_ascii_uppercase() {
            return Err(NameViolation::Uppercase);
        }
        if !is_pcen_char(c) {
            return Err(NameViolation::InvalidCharacter(c));
        }
        hyphen |= c == '-';
    }

    if !hyphen {
        return Err(NameViolation::MissingHyphen);
    }
    if RESERVED_ELEMENT_NAMES.contains(&name) {
        return Err(NameViolation::Reserved);
    }
    Ok(())
}

#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

const fn is_pcen_char(c: char) -> bool {
    matches!(c,
        '-' | '.' | '0'..='9' | '_' | 'a'..='z'
        | '\u{B7}'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{203F}'..='\u{2040}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}
