//! Page document and its embedded data contracts.
//!
//! The surrounding page is an external data producer. This module models what
//! it hands over ([`document`]) and how embedded JSON attributes are read
//! ([`contract`]).

pub mod contract;
pub mod document;

pub use contract::{parse_blob, Validate};
pub use document::{Anchors, DependencyCarrier, Page, VariantElement, VariantSection};
