use callgraph_sampler::prelude::*;
use chrono::{DateTime, Utc};

/// Mock MetadataStore returning the records inside the requested frame
pub struct MockMetadataStore {
    records: Vec<ReleaseRecord>,
}

impl MockMetadataStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn with_release(
        mut self,
        package_name: &str,
        version: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let id = self.records.len() as i64 + 1;
        self.records
            .push(ReleaseRecord::new(id, package_name, version, created_at));
        self
    }
}

impl MetadataStore for MockMetadataStore {
    fn fetch_releases(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReleaseRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.created_at >= start && r.created_at <= end)
            .cloned()
            .collect())
    }
}
