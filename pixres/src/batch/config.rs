//! Batch configuration
//!
//! A batch names one input image and a list of jobs, each pairing an
//! operation and factor with an output path:
//!
//! ```json
//! {
//!   "input": "rose.jpg",
//!   "output_dir": "out",
//!   "jobs": [
//!     { "operation": "resample", "factor": 4, "output": "resampled_by_4.jpg" },
//!     { "operation": "gray_level_reduction", "factor": 8, "output": "gray_by_8.jpg" }
//!   ]
//! }
//! ```
//!
//! Relative paths in a file loaded with [`BatchConfig::load`] are resolved
//! against the directory containing that file. Relative outputs are placed
//! under `output_dir` when it is given.

use super::error::{BatchError, BatchResult};
use pixres_color::gray_level_reduction;
use pixres_core::{Factor, Image};
use pixres_transform::{BoundaryPolicy, down_sample, resample_with_policy, up_sample};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Transform applied by a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Keep every F-th row and column
    DownSample,
    /// Replicate each pixel into an F×F block
    UpSample,
    /// Down-sample then up-sample back to the input size
    Resample,
    /// Snap samples down to multiples of F
    GrayLevelReduction,
}

impl Operation {
    /// Name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::DownSample => "down_sample",
            Self::UpSample => "up_sample",
            Self::Resample => "resample",
            Self::GrayLevelReduction => "gray_level_reduction",
        }
    }

    /// Apply this operation with the default boundary policy.
    pub fn apply(self, image: &Image, factor: Factor) -> BatchResult<Image> {
        self.apply_with_policy(image, factor, BoundaryPolicy::default())
    }

    /// Apply this operation. `policy` only affects [`Operation::Resample`].
    pub fn apply_with_policy(
        self,
        image: &Image,
        factor: Factor,
        policy: BoundaryPolicy,
    ) -> BatchResult<Image> {
        let out = match self {
            Self::DownSample => down_sample(image, factor)?,
            Self::UpSample => up_sample(image, factor)?,
            Self::Resample => resample_with_policy(image, factor, policy)?,
            Self::GrayLevelReduction => gray_level_reduction(image, factor)?,
        };
        Ok(out)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boundary handling for resample jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    /// Crop back to the input size
    #[default]
    Crop,
    /// Keep the replicated canvas
    Extend,
}

impl From<Boundary> for BoundaryPolicy {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Crop => BoundaryPolicy::Crop,
            Boundary::Extend => BoundaryPolicy::Extend,
        }
    }
}

/// One `{operation, factor, output}` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub operation: Operation,
    /// Defaults to 2 when omitted.
    #[serde(default)]
    pub factor: Factor,
    pub output: PathBuf,
    #[serde(default)]
    pub boundary: Boundary,
}

impl Job {
    /// Create a job with the default boundary handling.
    pub fn new(operation: Operation, factor: Factor, output: impl Into<PathBuf>) -> Self {
        Self {
            operation,
            factor,
            output: output.into(),
            boundary: Boundary::default(),
        }
    }

    /// Run this job's transform on `image`.
    pub fn apply(&self, image: &Image) -> BatchResult<Image> {
        self.operation
            .apply_with_policy(image, self.factor, self.boundary.into())
    }
}

/// A batch of jobs over a single input image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub jobs: Vec<Job>,
}

impl BatchConfig {
    /// Load a configuration file, resolving relative paths against its
    /// directory.
    pub fn load<P: AsRef<Path>>(path: P) -> BatchResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BatchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&data)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve_paths(base))
    }

    /// Parse a configuration from JSON text. Paths are kept as written.
    pub fn from_json_str(data: &str) -> BatchResult<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Make relative `input` and `output_dir` paths relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if self.input.is_relative() {
            self.input = base.join(&self.input);
        }
        self.output_dir = Some(match self.output_dir.take() {
            Some(dir) if dir.is_relative() => base.join(dir),
            Some(dir) => dir,
            None => base.to_path_buf(),
        });
        self
    }

    /// Where a job's output is written.
    pub fn output_path(&self, job: &Job) -> PathBuf {
        match &self.output_dir {
            Some(dir) if job.output.is_relative() => dir.join(&job.output),
            _ => job.output.clone(),
        }
    }
}
