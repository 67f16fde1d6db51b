//! Value objects shared across the appshell layers

mod setting;

pub use setting::{FromSetting, SettingValue, Size};
