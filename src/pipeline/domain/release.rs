use crate::shared::error::PipelineError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Release value object identifying one version of a package
///
/// Identity is `(group, artifact, version)`; the creation timestamp is
/// carried along for ordering but never takes part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Release {
    group: String,
    artifact: String,
    version: String,
    created_at: Option<DateTime<Utc>>,
}

impl Release {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            created_at: None,
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Parses a colon-delimited coordinate.
    ///
    /// `group:artifact` yields an empty version. With four or more segments
    /// (`group:artifact:packaging:version`) the last segment is the version.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || PipelineError::MalformedCoordinate {
            input: input.to_string(),
        };

        let segments: Vec<&str> = input.trim().split(':').collect();
        if segments.len() < 2 {
            return Err(malformed().into());
        }

        let group = segments[0];
        let artifact = segments[1];
        if group.is_empty() || artifact.is_empty() {
            return Err(malformed().into());
        }

        let version = if segments.len() > 2 {
            segments[segments.len() - 1]
        } else {
            ""
        };

        Ok(Self::new(group, artifact, version))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// `group:artifact`
    pub fn package_name(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    /// `group:artifact:version`
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// `group_artifact_version`, used for output directories and listings
    pub fn directory_name(&self) -> String {
        format!("{}_{}_{}", self.group, self.artifact, self.version)
    }
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group && self.artifact == other.artifact && self.version == other.version
    }
}

impl Eq for Release {}

impl Hash for Release {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
        self.artifact.hash(state);
        self.version.hash(state);
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for Release {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Dependency scope reported by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "test" => Ok(Scope::Test),
            "system" => Ok(Scope::System),
            "import" => Ok(Scope::Import),
            _ => Err(format!("Unknown dependency scope: {}", s)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Compile => "COMPILE",
            Scope::Provided => "PROVIDED",
            Scope::Runtime => "RUNTIME",
            Scope::Test => "TEST",
            Scope::System => "SYSTEM",
            Scope::Import => "IMPORT",
        };
        f.write_str(name)
    }
}

/// A release as returned by the resolver, together with its usage scope
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedRelease {
    release: Release,
    scope: Scope,
}

impl ResolvedRelease {
    pub fn new(release: Release, scope: Scope) -> Self {
        Self { release, scope }
    }

    pub fn compile(release: Release) -> Self {
        Self::new(release, Scope::Compile)
    }

    pub fn release(&self) -> &Release {
        &self.release
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn into_release(self) -> Release {
        self.release
    }
}

impl fmt::Display for ResolvedRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.release, self.scope)
    }
}
