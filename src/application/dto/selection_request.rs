use crate::pipeline::domain::SampleConfig;
use crate::shared::error::PipelineError;
use crate::shared::Result;
use chrono::{DateTime, NaiveDate, Utc};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/mm/yyyy` date as midnight UTC
pub fn parse_frame_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        PipelineError::InvalidDate {
            input: input.to_string(),
        }
    })?;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| PipelineError::InvalidDate {
            input: input.to_string(),
        })?;

    Ok(midnight.and_utc())
}

/// SelectionRequest - request DTO for the artefact selection use case
#[derive(Debug, Clone)]
pub struct SelectionRequest {
    /// Inclusive start of the sampling frame
    pub start: DateTime<Utc>,
    /// Inclusive end of the sampling frame
    pub end: DateTime<Utc>,
    /// Sample configurations to draw, each independently
    pub configs: Vec<SampleConfig>,
    /// Whether provided-scope dependents count towards a release's weight
    pub include_provided: bool,
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,
}

impl SelectionRequest {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(PipelineError::InvalidDateRange {
                start: start.format(DATE_FORMAT).to_string(),
                end: end.format(DATE_FORMAT).to_string(),
            }
            .into());
        }

        Ok(Self {
            start,
            end,
            configs: SampleConfig::CANONICAL.to_vec(),
            include_provided: false,
            seed: None,
        })
    }

    /// Builds a request from two `dd/mm/yyyy` dates
    pub fn from_dates(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_frame_date(start)?, parse_frame_date(end)?)
    }

    pub fn with_configs(mut self, configs: Vec<SampleConfig>) -> Self {
        self.configs = configs;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_provided(mut self, include_provided: bool) -> Self {
        self.include_provided = include_provided;
        self
    }
}
