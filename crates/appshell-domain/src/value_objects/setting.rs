//! Setting value types
//!
//! The settings store persists a string-keyed map of [`SettingValue`]s.
//! The enum is tagged on serialization so every variant round-trips through
//! the JSON backing file without losing its type: a stored `Uuid` comes back
//! as a `Uuid`, not as a string that happens to parse as one.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A two-dimensional size, as used for window and image measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A value storable in the settings map
///
/// Covers the types the backing file is required to round-trip: strings,
/// booleans, integers, floats, GUIDs, URIs, and a 2D size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SettingValue {
    /// UTF-8 text
    Text(String),
    /// Boolean flag
    Flag(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Globally unique identifier
    Uuid(Uuid),
    /// Absolute URL
    Url(Url),
    /// Two-dimensional size
    Size(Size),
}

impl SettingValue {
    /// Short label for the stored variant, used in error messages
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Uuid(_) => "uuid",
            Self::Url(_) => "url",
            Self::Size(_) => "size",
        }
    }

    /// Borrow the text value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the flag value, if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Uuid> for SettingValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<Url> for SettingValue {
    fn from(value: Url) -> Self {
        Self::Url(value)
    }
}

impl From<Size> for SettingValue {
    fn from(value: Size) -> Self {
        Self::Size(value)
    }
}

/// Conversion out of a stored [`SettingValue`]
///
/// Implemented for every type a setting can hold. Conversions are strict:
/// asking for a `bool` from a stored integer returns `None` rather than
/// guessing at truthiness.
pub trait FromSetting: Sized {
    /// Extract a typed value from the stored setting, if the variant matches
    fn from_setting(value: &SettingValue) -> Option<Self>;
}

impl FromSetting for SettingValue {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromSetting for String {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl FromSetting for bool {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        value.as_flag()
    }
}

impl FromSetting for i64 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromSetting for f64 {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromSetting for Uuid {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }
}

impl FromSetting for Url {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Url(url) => Some(url.clone()),
            _ => None,
        }
    }
}

impl FromSetting for Size {
    fn from_setting(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Size(size) => Some(*size),
            _ => None,
        }
    }
}
