use crate::pipeline::domain::{Release, ResolvedRelease, Scope};

/// Result of checking a dependent's dependency set against its seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMembership {
    Present,
    Absent,
}

/// SeedMembershipPolicy guards call-graph generation
///
/// The resolver occasionally reports a dependent whose own resolved
/// dependency set does not contain the seed (for instance when a newer
/// version of the seed wins conflict resolution). Such a dependent does not
/// exercise the seed release, so its call graph is never built.
///
/// A dependency set is valid only if it contains the seed release
/// (`group`, `artifact` and `version` equal) with `COMPILE` scope.
pub struct SeedMembershipPolicy;

impl SeedMembershipPolicy {
    pub fn check(seed: &Release, dependencies: &[ResolvedRelease]) -> SeedMembership {
        let present = dependencies
            .iter()
            .any(|dependency| dependency.scope() == Scope::Compile && dependency.release() == seed);

        if present {
            SeedMembership::Present
        } else {
            SeedMembership::Absent
        }
    }
}
