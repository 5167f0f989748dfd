use crate::common::*;

/// Free-form index settings, rollover conditions or query bodies.
///
/// The cluster owns this schema, so it is never modelled statically.
pub type Settings = Map<String, Value>;

#[doc = "Function that merges two settings maps, keys of `override_settings` win"]
/// # Arguments
/// * `base`              - starting settings
/// * `override_settings` - settings applied on top of `base`
///
/// # Returns
/// * Settings
pub fn merge_settings(base: &Settings, override_settings: &Settings) -> Settings {
    let mut merged: Settings = base.clone();

    for (key, value) in override_settings {
        merged.insert(key.clone(), value.clone());
    }

    merged
}

#[doc = "Function that returns a setting value or `null` when the caller did not supply it"]
pub fn setting_or_null(settings: &Settings, key: &str) -> Value {
    settings.get(key).cloned().unwrap_or(Value::Null)
}
