use crate::pipeline::domain::WeightedCandidate;

/// DependentCountReport renders the `dependents-count.txt` listing
pub struct DependentCountReport;

impl DependentCountReport {
    /// `group:artifact:version,count` lines sorted ascending by count.
    /// Ties keep population order.
    pub fn lines(candidates: &[WeightedCandidate]) -> Vec<String> {
        let mut sorted: Vec<&WeightedCandidate> = candidates.iter().collect();
        sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

        sorted
            .into_iter()
            .map(|c| format!("{},{}", c.release().coordinate(), c.weight() as u64))
            .collect()
    }
}
