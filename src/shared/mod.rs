/// Shared utilities: result alias, error taxonomy, filesystem security checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
