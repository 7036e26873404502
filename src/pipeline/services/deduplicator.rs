use crate::pipeline::domain::Release;
use std::collections::HashSet;
use std::hash::Hash;

/// Key used to decide whether two releases are duplicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupKey {
    /// One release per group id
    Group,
    /// One release per `group:artifact`
    Package,
}

impl DedupKey {
    pub fn extract(&self, release: &Release) -> String {
        match self {
            DedupKey::Group => release.group().to_string(),
            DedupKey::Package => release.package_name(),
        }
    }
}

/// Deduplicator keeps the first occurrence of every key
pub struct Deduplicator;

impl Deduplicator {
    /// Retains the first item per extracted key, preserving input order.
    /// Later duplicates are dropped silently.
    pub fn by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|item| seen.insert(key(item)))
            .collect()
    }

    pub fn by_release<T, F>(items: Vec<T>, dedup_key: DedupKey, release_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &Release,
    {
        Self::by_key(items, |item| dedup_key.extract(release_of(item)))
    }
}
