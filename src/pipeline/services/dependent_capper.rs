use rand::seq::SliceRandom;
use rand::Rng;

/// Default maximum number of dependents kept per seed release
pub const DEFAULT_MAX_DEPENDENTS: usize = 100;

/// DependentCapper bounds the number of dependents analysed per seed
pub struct DependentCapper;

impl DependentCapper {
    /// Returns at most `max` items chosen uniformly at random without
    /// replacement (shuffle, then truncate). Inputs within the cap are
    /// returned unchanged.
    pub fn cap<T, R: Rng + ?Sized>(mut items: Vec<T>, max: usize, rng: &mut R) -> Vec<T> {
        if items.len() <= max {
            return items;
        }

        items.shuffle(rng);
        items.truncate(max);
        items
    }
}
