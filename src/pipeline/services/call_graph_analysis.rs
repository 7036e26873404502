use petgraph::graphmap::UnGraphMap;
use std::collections::{HashMap, HashSet};

const URI_PREFIX: &str = "fasten://mvn!";
const EIGENVECTOR_MAX_ITERATIONS: usize = 100;
const EIGENVECTOR_TOLERANCE: f64 = 1e-6;

/// Call-graph data collected for one seed release across all its dependents
#[derive(Debug, Clone, Default)]
pub struct SeedCallGraphs {
    pub uris: HashMap<i64, String>,
    pub edges: Vec<(i64, i64)>,
}

impl SeedCallGraphs {
    /// Adds the content of one `uris.csv` / `callgraph.csv` pair
    pub fn add_pair(&mut self, uris_csv: &str, callgraph_csv: &str) {
        self.uris.extend(parse_uri_rows(uris_csv));
        self.edges.extend(parse_edge_rows(callgraph_csv));
    }
}

/// One analysed value per callable of the seed release
pub type Scores = Vec<(i64, f64)>;

/// CallGraphAnalysis scores how the seed release's callables are used
///
/// Releases are labelled `group:artifact$version`, the form embedded in
/// callable URIs (`fasten://mvn!group:artifact$version/...`).
pub struct CallGraphAnalysis;

impl CallGraphAnalysis {
    /// Turns a `group_artifact_version` directory name into a release label.
    /// The group ends at the first `_` and the version starts after the last.
    pub fn label_from_directory(name: &str) -> Option<String> {
        let (group, rest) = name.split_once('_')?;
        let (artifact, version) = rest.rsplit_once('_')?;
        if group.is_empty() || artifact.is_empty() {
            return None;
        }
        Some(format!("{}:{}${}", group, artifact, version))
    }

    /// Release label embedded in a callable URI
    pub fn release_of_uri(uri: &str) -> Option<&str> {
        let rest = uri.strip_prefix(URI_PREFIX)?;
        let end = rest.find('/')?;
        let label = &rest[..end];
        if label.contains(':') && label.contains('$') {
            Some(label)
        } else {
            None
        }
    }

    /// Ids of the callables that belong to `label`
    pub fn seed_ids(data: &SeedCallGraphs, label: &str) -> HashSet<i64> {
        data.uris
            .iter()
            .filter(|(_, uri)| Self::release_of_uri(uri) == Some(label))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Share of all releases seen in the call graphs that call each seed
    /// callable. Sorted by descending share, then ascending id.
    pub fn dependent_percentage(data: &SeedCallGraphs, label: &str) -> Scores {
        let id_to_release: HashMap<i64, &str> = data
            .uris
            .iter()
            .filter_map(|(id, uri)| Self::release_of_uri(uri).map(|r| (*id, r)))
            .collect();

        let seed_ids = Self::seed_ids(data, label);
        let total_releases = id_to_release.values().collect::<HashSet<_>>().len();
        if seed_ids.is_empty() || total_releases == 0 {
            return Vec::new();
        }

        let mut callers: HashMap<i64, HashSet<&str>> = HashMap::new();
        for (source, target) in &data.edges {
            if !seed_ids.contains(target) {
                continue;
            }
            if let Some(release) = id_to_release.get(source) {
                callers.entry(*target).or_default().insert(*release);
            }
        }

        let mut scores: Scores = callers
            .into_iter()
            .map(|(id, releases)| (id, releases.len() as f64 / total_releases as f64))
            .collect();
        sort_descending(&mut scores);
        scores
    }

    /// Degree centrality of the seed callables in the undirected union of
    /// all edges, min-max normalised to `[0, 1]`. When every score is equal
    /// the normalised value is `0.0`.
    pub fn degree_centrality(data: &SeedCallGraphs, label: &str) -> Scores {
        let graph = call_graph(&data.edges);
        let node_count = graph.node_count();
        let seed_ids = Self::seed_ids(data, label);

        let raw: Scores = graph
            .nodes()
            .filter(|id| seed_ids.contains(id))
            .map(|id| {
                // A self-loop contributes two to the degree
                let degree =
                    graph.neighbors(id).count() + usize::from(graph.contains_edge(id, id));
                let centrality = if node_count > 1 {
                    degree as f64 / (node_count - 1) as f64
                } else {
                    1.0
                };
                (id, centrality)
            })
            .collect();

        min_max_normalise(raw)
    }

    /// Eigenvector centrality of the seed callables in the undirected union
    /// of all edges, min-max normalised like [`Self::degree_centrality`].
    ///
    /// Power iteration on `A + I` starting from the uniform vector, scaled to
    /// unit Euclidean length after every step.
    pub fn eigenvector_centrality(data: &SeedCallGraphs, label: &str) -> Scores {
        let graph = call_graph(&data.edges);
        let seed_ids = Self::seed_ids(data, label);
        if !graph.nodes().any(|id| seed_ids.contains(&id)) {
            return Vec::new();
        }

        let index: HashMap<i64, usize> = graph
            .nodes()
            .enumerate()
            .map(|(idx, id)| (id, idx))
            .collect();
        let n = graph.node_count();
        let tolerance = n as f64 * EIGENVECTOR_TOLERANCE;
        let mut scores = vec![1.0 / n as f64; n];

        for _ in 0..EIGENVECTOR_MAX_ITERATIONS {
            let mut new_scores = scores.clone();
            for (v, &vi) in &index {
                for u in graph.neighbors(*v) {
                    new_scores[vi] += scores[index[&u]];
                }
            }

            let norm = new_scores.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm > 0.0 {
                new_scores.iter_mut().for_each(|x| *x /= norm);
            }

            let diff: f64 = scores
                .iter()
                .zip(&new_scores)
                .map(|(a, b)| (a - b).abs())
                .sum();
            scores = new_scores;
            if diff < tolerance {
                break;
            }
        }

        let raw: Scores = graph
            .nodes()
            .filter(|id| seed_ids.contains(id))
            .map(|id| (id, scores[index[&id]]))
            .collect();

        min_max_normalise(raw)
    }

    /// `id,value` rows
    pub fn to_lines(scores: &[(i64, f64)]) -> Vec<String> {
        scores
            .iter()
            .map(|(id, value)| format!("{},{}", id, value))
            .collect()
    }
}

/// Undirected simple graph over every edge; parallel edges collapse and
/// self-loops are kept
fn call_graph(edges: &[(i64, i64)]) -> UnGraphMap<i64, ()> {
    UnGraphMap::from_edges(edges.iter().copied())
}

fn min_max_normalise(raw: Scores) -> Scores {
    if raw.is_empty() {
        return raw;
    }

    let max = raw.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
    let min = raw.iter().map(|(_, v)| *v).fold(f64::MAX, f64::min);
    let span = max - min;

    let mut scores: Scores = raw
        .into_iter()
        .map(|(id, v)| (id, if span > 0.0 { (v - min) / span } else { 0.0 }))
        .collect();
    sort_descending(&mut scores);
    scores
}

fn sort_descending(scores: &mut Scores) {
    scores.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
}

/// Parses `id,"uri"` rows; the header and malformed rows are skipped
fn parse_uri_rows(content: &str) -> impl Iterator<Item = (i64, String)> + '_ {
    content.lines().filter_map(|line| {
        let (id, uri) = line.split_once(',')?;
        let id = id.trim().parse::<i64>().ok()?;
        Some((id, uri.trim().trim_matches('"').to_string()))
    })
}

/// Parses `source,target` rows; the header and malformed rows are skipped
fn parse_edge_rows(content: &str) -> impl Iterator<Item = (i64, i64)> + '_ {
    content.lines().filter_map(|line| {
        let (source, target) = line.split_once(',')?;
        Some((source.trim().parse().ok()?, target.trim().parse().ok()?))
    })
}
