use crate::pipeline::domain::Release;

/// Substrings marking testing-framework artefacts
pub const TEST_ARTIFACT_DENYLIST: [&str; 4] = ["test", "junit", "mock", "assertj"];

/// TestArtifactPolicy excludes testing-framework noise from populations
///
/// A release is a test artefact if its group id or its artifact id contains
/// any denylisted substring. Matching is case-sensitive.
pub struct TestArtifactPolicy;

impl TestArtifactPolicy {
    pub fn is_test_artifact(group: &str, artifact: &str) -> bool {
        TEST_ARTIFACT_DENYLIST
            .iter()
            .any(|needle| group.contains(needle) || artifact.contains(needle))
    }

    pub fn is_test_release(release: &Release) -> bool {
        Self::is_test_artifact(release.group(), release.artifact())
    }

    /// Keeps the items whose release is not a test artefact, in input order
    pub fn exclude<T, F>(items: Vec<T>, release_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &Release,
    {
        items
            .into_iter()
            .filter(|item| !Self::is_test_release(release_of(item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_match() {
        assert!(TestArtifactPolicy::is_test_artifact("org.junit", "core"));
        assert!(TestArtifactPolicy::is_test_artifact("org.test", "harness"));
    }

    #[test]
    fn test_artifact_match() {
        assert!(TestArtifactPolicy::is_test_artifact("org.mockito", "mockito-core"));
        assert!(TestArtifactPolicy::is_test_artifact("org.x", "assertj-core"));
        assert!(TestArtifactPolicy::is_test_artifact("org.x", "spring-test"));
    }

    #[test]
    fn test_non_test_artifact() {
        assert!(!TestArtifactPolicy::is_test_artifact("org.apache", "commons-lang3"));
        assert!(!TestArtifactPolicy::is_test_artifact("com.google.guava", "guava"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!TestArtifactPolicy::is_test_artifact("org.JUnit", "Core"));
        assert!(!TestArtifactPolicy::is_test_artifact("org.x", "TestKit"));
    }

    #[test]
    fn test_exclude_preserves_order() {
        let releases = vec![
            Release::new("org.b", "app", "2.0"),
            Release::new("org.test", "harness", "1.0"),
            Release::new("org.c", "cli", "3.0"),
        ];
        let kept = TestArtifactPolicy::exclude(releases, |r| r);
        assert_eq!(
            kept,
            vec![Release::new("org.b", "app", "2.0"), Release::new("org.c", "cli", "3.0")]
        );
    }

    proptest! {
        #[test]
        fn prop_exclude_is_idempotent(names in prop::collection::vec(("[a-z.]{1,12}", "[a-z-]{1,12}"), 0..40)) {
            let releases: Vec<Release> = names
                .iter()
                .map(|(g, a)| Release::new(g.as_str(), a.as_str(), "1.0"))
                .collect();
            let once = TestArtifactPolicy::exclude(releases, |r| r);
            let twice = TestArtifactPolicy::exclude(once.clone(), |r| r);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_matches_denylist_exactly(group in "[a-z.]{0,16}", artifact in "[a-z-]{0,16}") {
            let expected = TEST_ARTIFACT_DENYLIST
                .iter()
                .any(|n| group.contains(n) || artifact.contains(n));
            prop_assert_eq!(TestArtifactPolicy::is_test_artifact(&group, &artifact), expected);
        }
    }
}
