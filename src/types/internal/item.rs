use chrono::{DateTime, SecondsFormat, Utc};

/// Item as held by the store
///
/// `id` and `created_at` are fixed when the record is created; only `name` and
/// `description` change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Creation time as ISO 8601 with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
