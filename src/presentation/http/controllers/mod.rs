// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod categories;
pub mod interactions;
pub mod tags;

use serde::{Deserialize, Deserializer};

/// Splits a comma-separated query value, dropping blank segments.
pub(crate) fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
