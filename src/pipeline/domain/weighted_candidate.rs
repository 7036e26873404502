use super::Release;
use crate::shared::Result;

/// A sampling candidate weighted by its number of distinct dependent groups
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedCandidate {
    release: Release,
    weight: f64,
}

impl WeightedCandidate {
    pub fn new(release: Release, weight: f64) -> Result<Self> {
        if !weight.is_finite() || weight < 0.0 {
            anyhow::bail!(
                "Weight of {} must be a finite, non-negative number (got {})",
                release,
                weight
            );
        }
        Ok(Self { release, weight })
    }

    /// Candidate whose weight could not be computed; it stays in the
    /// population but can never be drawn.
    pub fn unweighted(release: Release) -> Self {
        Self {
            release,
            weight: 0.0,
        }
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
