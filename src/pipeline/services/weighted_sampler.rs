use crate::pipeline::domain::{Release, SampleConfig, SampleSet, WeightedCandidate};
use crate::shared::error::PipelineError;
use crate::shared::Result;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashSet;

/// WeightedSampler draws fixed-size samples from a weighted population
///
/// Draws are made with replacement and a draw already present in the
/// sample is rejected, so every release in a sample is distinct while
/// heavier releases remain more likely to be picked. The distribution is
/// built once and shared, unchanged, by every configuration.
///
/// Rejection slows down as the sample approaches the number of drawable
/// candidates; this is fine up to the canonical 1831 but gets expensive
/// for samples close to the population size.
pub struct WeightedSampler {
    candidates: Vec<WeightedCandidate>,
    index: Option<WeightedIndex<f64>>,
    drawable: usize,
}

impl WeightedSampler {
    pub fn new(candidates: Vec<WeightedCandidate>) -> Self {
        // Fails only when there is no candidate or every weight is zero
        let index = WeightedIndex::new(candidates.iter().map(WeightedCandidate::weight)).ok();
        let drawable = candidates.iter().filter(|c| c.weight() > 0.0).count();

        Self {
            candidates,
            index,
            drawable,
        }
    }

    pub fn population_size(&self) -> usize {
        self.candidates.len()
    }

    /// Number of candidates with a positive weight
    pub fn drawable_count(&self) -> usize {
        self.drawable
    }

    pub fn candidates(&self) -> &[WeightedCandidate] {
        &self.candidates
    }

    /// Draws `config.size` distinct releases.
    ///
    /// # Errors
    /// `PipelineError::InsufficientPopulation` if the population, or the part
    /// of it with a positive weight, is smaller than the requested size.
    pub fn sample<R: Rng + ?Sized>(&self, config: SampleConfig, rng: &mut R) -> Result<SampleSet> {
        if self.population_size() < config.size {
            return Err(PipelineError::InsufficientPopulation {
                required: config.size,
                available: self.population_size(),
            }
            .into());
        }

        if self.drawable < config.size {
            return Err(PipelineError::InsufficientPopulation {
                required: config.size,
                available: self.drawable,
            }
            .into());
        }

        let Some(index) = self.index.as_ref() else {
            // drawable >= size > 0 guarantees a distribution; size 0 lands here
            return Ok(SampleSet::new(config, Vec::new()));
        };

        let mut seen: HashSet<&Release> = HashSet::with_capacity(config.size);
        let mut drawn = Vec::with_capacity(config.size);

        while drawn.len() < config.size {
            let release = self.candidates[index.sample(rng)].release();
            if seen.insert(release) {
                drawn.push(release.clone());
            }
        }

        Ok(SampleSet::new(config, drawn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(weights: &[f64]) -> Vec<WeightedCandidate> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| {
                WeightedCandidate::new(Release::new(format!("g{}", i), "a", "1.0"), *w).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_sample_exact_size_and_distinct() {
        let sampler = WeightedSampler::new(population(&[1.0; 50]));
        let mut rng = StdRng::seed_from_u64(7);

        let sample = sampler.sample(SampleConfig::new(95, 5, 20), &mut rng).unwrap();

        assert_eq!(sample.len(), 20);
        assert_eq!(sample.to_set().len(), 20);
    }

    #[test]
    fn test_sample_whole_population() {
        let sampler = WeightedSampler::new(population(&[1.0, 5.0, 2.0, 9.0]));
        let mut rng = StdRng::seed_from_u64(1);

        let sample = sampler.sample(SampleConfig::new(95, 5, 4), &mut rng).unwrap();

        assert_eq!(sample.to_set().len(), 4);
    }

    #[test]
    fn test_population_smaller_than_size_is_skipped() {
        let sampler = WeightedSampler::new(population(&[1.0; 10]));
        let mut rng = StdRng::seed_from_u64(1);

        let err = sampler
            .sample(SampleConfig::new(95, 5, 384), &mut rng)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::InsufficientPopulation {
                required: 384,
                available: 10
            })
        ));
    }

    #[test]
    fn test_zero_weights_are_never_drawn() {
        let sampler = WeightedSampler::new(population(&[0.0, 3.0, 0.0, 4.0, 1.0]));
        let mut rng = StdRng::seed_from_u64(3);

        let sample = sampler.sample(SampleConfig::new(95, 5, 3), &mut rng).unwrap();

        assert!(!sample.contains(&Release::new("g0", "a", "1.0")));
        assert!(!sample.contains(&Release::new("g2", "a", "1.0")));
        assert_eq!(sampler.drawable_count(), 3);
    }

    #[test]
    fn test_too_few_positive_weights_is_skipped() {
        let sampler = WeightedSampler::new(population(&[0.0, 0.0, 1.0]));
        let mut rng = StdRng::seed_from_u64(3);

        let err = sampler.sample(SampleConfig::new(95, 5, 2), &mut rng).unwrap_err();
        assert!(err.to_string().contains("Not enough artefacts"));
    }

    #[test]
    fn test_all_zero_population() {
        let sampler = WeightedSampler::new(population(&[0.0, 0.0]));
        let mut rng = StdRng::seed_from_u64(3);

        assert!(sampler.sample(SampleConfig::new(95, 5, 1), &mut rng).is_err());
    }

    #[test]
    fn test_heavier_release_is_favoured() {
        let mut weights = vec![1.0; 99];
        weights.push(10_000.0);
        let sampler = WeightedSampler::new(population(&weights));
        let heavy = Release::new("g99", "a", "1.0");

        let hits = (0..50)
            .filter(|seed| {
                let mut rng = StdRng::seed_from_u64(*seed);
                sampler
                    .sample(SampleConfig::new(95, 5, 1), &mut rng)
                    .unwrap()
                    .contains(&heavy)
            })
            .count();

        assert!(hits > 40, "heavy release drawn only {} times", hits);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let sampler = WeightedSampler::new(population(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        let config = SampleConfig::new(95, 5, 3);

        let first = sampler.sample(config, &mut StdRng::seed_from_u64(11)).unwrap();
        let second = sampler.sample(config, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(first.releases(), second.releases());
    }

    proptest! {
        #[test]
        fn prop_sample_is_distinct_subset(
            weights in prop::collection::vec(0.1f64..100.0, 1..60),
            size in 0usize..60,
            seed in any::<u64>(),
        ) {
            let candidates = population(&weights);
            let sampler = WeightedSampler::new(candidates.clone());
            let mut rng = StdRng::seed_from_u64(seed);
            let result = sampler.sample(SampleConfig::new(95, 5, size), &mut rng);

            if size > weights.len() {
                prop_assert!(result.is_err());
            } else {
                let sample = result.unwrap();
                prop_assert_eq!(sample.len(), size);
                prop_assert_eq!(sample.to_set().len(), size);
                for release in sample.releases() {
                    prop_assert!(candidates.iter().any(|c| c.release() == release));
                }
            }
        }
    }
}
