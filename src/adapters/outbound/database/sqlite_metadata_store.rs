use crate::ports::outbound::{MetadataStore, ReleaseRecord};
use crate::shared::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const RELEASES_IN_FRAME: &str = "\
SELECT pv.id, p.package_name, pv.version, pv.created_at
FROM package_versions pv
JOIN packages p ON p.id = pv.package_id
WHERE pv.created_at >= ?1 AND pv.created_at <= ?2";

/// SqliteMetadataStore adapter reading package versions from SQLite
///
/// Expected tables:
/// - `packages(id INTEGER, package_name TEXT)` with `group:artifact` names
/// - `package_versions(id INTEGER, package_id INTEGER, version TEXT, created_at INTEGER)`
///
/// `created_at` holds Unix epoch seconds. The database is opened read-only.
pub struct SqliteMetadataStore {
    conn: Connection,
}

impl SqliteMetadataStore {
    /// Opens an existing database file
    ///
    /// # Errors
    /// Returns an error if the file does not exist or is not a SQLite database
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("open metadata database {}", path.display()))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .context("configure sqlite busy timeout")?;

        Ok(Self { conn })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl MetadataStore for SqliteMetadataStore {
    fn fetch_releases(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReleaseRecord>> {
        let mut stmt = self
            .conn
            .prepare(RELEASES_IN_FRAME)
            .context("prepare release query")?;

        let rows = stmt
            .query_map(params![start.timestamp(), end.timestamp()], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })
            .context("query package versions")?;

        let mut records = Vec::new();
        for row in rows {
            let (id, package_name, version, created_at) = row.context("read package version row")?;
            let created_at = DateTime::from_timestamp(created_at, 0).with_context(|| {
                format!("package version {} has an invalid created_at {}", id, created_at)
            })?;
            records.push(ReleaseRecord::new(id, package_name, version, created_at));
        }

        Ok(records)
    }
}
