// Domain layer - Portfolio content and contact models
pub mod collection;
pub mod contact;
pub mod defaults;
pub mod experience;
pub mod offering;
pub mod profile;
pub mod project;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
