mod seed_membership;
mod test_artifact_policy;

pub use seed_membership::{SeedMembership, SeedMembershipPolicy};
pub use test_artifact_policy::{TestArtifactPolicy, TEST_ARTIFACT_DENYLIST};
