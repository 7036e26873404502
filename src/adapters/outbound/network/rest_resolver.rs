use crate::pipeline::domain::{Release, ResolvedRelease, Scope};
use crate::ports::outbound::{DependencyResolver, ResolverConfig};
use crate::shared::error::PipelineError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// One entry of a resolver response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedArtifact {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default)]
    scope: Option<String>,
}

/// RestDependencyResolver adapter for a dependency-resolution HTTP service
///
/// Endpoints (JSON array of `{groupId, artifactId, version, scope}`):
/// - `GET {base}/dependents/{group}/{artifact}/{version}?transitive=..&provided=..`
/// - `GET {base}/dependencies/{group}/{artifact}/{version}`
///
/// A release without version is sent without the version segment, which
/// the service treats as "no version constraint". Entries without a scope
/// are `COMPILE`.
pub struct RestDependencyResolver {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl RestDependencyResolver {
    pub fn new(base_url: &str) -> Result<Self> {
        let user_agent = format!("callgraph-sampler/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 3,
        })
    }

    /// Validates a coordinate segment before it becomes part of a URL path
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') || component.contains("..") {
            anyhow::bail!(
                "Security: {} '{}' contains path separators which are not allowed",
                component_type,
                component
            );
        }
        if component.contains('#') || component.contains('?') {
            anyhow::bail!(
                "Security: {} '{}' contains URL-unsafe characters",
                component_type,
                component
            );
        }
        Ok(())
    }

    fn release_path(release: &Release) -> Result<String> {
        Self::validate_url_component(release.group(), "Group id")?;
        Self::validate_url_component(release.artifact(), "Artifact id")?;
        Self::validate_url_component(release.version(), "Version")?;

        let mut path = format!(
            "{}/{}",
            urlencoding::encode(release.group()),
            urlencoding::encode(release.artifact())
        );
        if !release.version().is_empty() {
            path.push('/');
            path.push_str(&urlencoding::encode(release.version()));
        }
        Ok(path)
    }

    fn dependents_url(&self, release: &Release, config: ResolverConfig) -> Result<String> {
        Ok(format!(
            "{}/dependents/{}?transitive={}&provided={}",
            self.base_url,
            Self::release_path(release)?,
            config.depth.is_transitive(),
            config.include_provided
        ))
    }

    fn dependencies_url(&self, release: &Release) -> Result<String> {
        Ok(format!(
            "{}/dependencies/{}",
            self.base_url,
            Self::release_path(release)?
        ))
    }

    async fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 1;
        loop {
            match self.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt >= self.max_retries => return Err(e),
                Err(_) => {
                    tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Resolver returned status code {}", response.status());
        }
        Ok(response.text().await?)
    }

    async fn resolve(
        &self,
        what: &str,
        release: &Release,
        url: Result<String>,
    ) -> Result<Vec<ResolvedRelease>> {
        let failure = |details: String| -> anyhow::Error {
            PipelineError::ResolutionFailure {
                what: what.to_string(),
                coordinate: release.coordinate(),
                details,
            }
            .into()
        };

        let url = url.map_err(|e| failure(e.to_string()))?;
        let body = self
            .fetch_with_retry(&url)
            .await
            .map_err(|e| failure(e.to_string()))?;
        parse_resolved(&body).map_err(|e| failure(e.to_string()))
    }
}

/// Decodes a resolver response body
fn parse_resolved(body: &str) -> Result<Vec<ResolvedRelease>> {
    let artifacts: Vec<ResolvedArtifact> = serde_json::from_str(body)?;
    artifacts
        .into_iter()
        .map(|a| {
            let scope = match a.scope.as_deref() {
                None | Some("") => Scope::Compile,
                Some(s) => s.parse::<Scope>().map_err(anyhow::Error::msg)?,
            };
            Ok(ResolvedRelease::new(
                Release::new(a.group_id, a.artifact_id, a.version),
                scope,
            ))
        })
        .collect()
}

#[async_trait]
impl DependencyResolver for RestDependencyResolver {
    async fn resolve_dependents(
        &self,
        release: &Release,
        config: ResolverConfig,
    ) -> Result<Vec<ResolvedRelease>> {
        let url = self.dependents_url(release, config);
        self.resolve("dependents", release, url).await
    }

    async fn resolve_dependencies(&self, release: &Release) -> Result<Vec<ResolvedRelease>> {
        let url = self.dependencies_url(release);
        self.resolve("dependencies", release, url).await
    }
}
