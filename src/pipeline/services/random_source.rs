use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random source shared by sampling and dependent capping within one run.
/// A fixed seed makes a run reproducible; without one it is seeded from
/// operating-system entropy.
pub fn random_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
