//! # appshell-domain
//!
//! Domain layer for the appshell application core: the shared error type,
//! the setting value objects persisted by the settings store, the
//! replay-latest state cell, and the port traits implemented by the
//! provider and infrastructure layers.
//!
//! This crate contains no I/O. Everything here is types and contracts.

pub mod error;
pub mod ports;
pub mod sync;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{SettingValue, Size};
