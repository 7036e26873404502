use crate::shared::Result;
use chrono::{DateTime, Utc};

/// One package version row of the metadata store
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRecord {
    pub version_id: i64,
    /// `group:artifact`
    pub package_name: String,
    pub version: String,
    pub created_at: DateTime<Utc>,
}

impl ReleaseRecord {
    pub fn new(
        version_id: i64,
        package_name: impl Into<String>,
        version: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version_id,
            package_name: package_name.into(),
            version: version.into(),
            created_at,
        }
    }
}

/// MetadataStore port for querying published package versions
///
/// The store is synchronous and fails fast; no retry is attempted.
pub trait MetadataStore {
    /// Returns every package version created within `[start, end]`
    ///
    /// # Arguments
    /// * `start` - Inclusive lower bound of the creation timestamp
    /// * `end` - Inclusive upper bound of the creation timestamp
    ///
    /// # Returns
    /// Matching rows in no particular order
    ///
    /// # Errors
    /// Returns an error if the store cannot be queried
    fn fetch_releases(&self, start: DateTime<Utc>, end: DateTime<Utc>)
        -> Result<Vec<ReleaseRecord>>;
}
