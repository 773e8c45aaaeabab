//! Parts shared by every OOXML package deckbook writes.

pub mod properties;

pub use properties::{DocumentProperties, app_properties_xml};
