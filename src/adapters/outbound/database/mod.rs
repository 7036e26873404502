/// Database adapters for the package metadata store
mod sqlite_metadata_store;

pub use sqlite_metadata_store::SqliteMetadataStore;
