use serde::{Deserialize, Deserializer};

/// Catalog documents are keyed by time-ordered UUIDs (v7).
pub type ItemId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Allocate a fresh document id.
pub fn new_item_id() -> ItemId {
    uuid::Uuid::now_v7()
}

/// Read `null` the same as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
