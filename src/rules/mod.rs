//! Rules module - Engine rule model and conversion

pub mod convert;
pub mod existing;
pub mod imported;
pub mod severity;

pub use convert::Converter;
pub use imported::{ImportedRule, ImportedRuleset};
pub use severity::{Confidence, Severity};
