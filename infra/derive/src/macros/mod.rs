pub mod element;
pub mod error;
pub mod properties;
