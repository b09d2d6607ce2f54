//! Batch execution
//!
//! Jobs are independent: a failing job is recorded in the report and the
//! remaining jobs still run. Only failure to load the input aborts a batch.

use super::config::{BatchConfig, Job, Operation};
use super::error::{BatchError, BatchResult};
use super::sink::{FileSink, ImageSink};
use log::{info, warn};
use pixres_core::{Factor, Image};
use std::path::{Path, PathBuf};

/// Result of one job
#[derive(Debug)]
pub struct JobOutcome {
    pub operation: Operation,
    pub factor: Factor,
    pub output: PathBuf,
    /// Output `(width, height)` on success
    pub result: Result<(u32, u32), BatchError>,
}

impl JobOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every job in a batch, in job order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    /// Number of jobs that produced an output.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of jobs that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// True when every job succeeded.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

fn run_job<S: ImageSink + ?Sized>(
    image: &Image,
    job: &Job,
    output: &Path,
    sink: &mut S,
) -> BatchResult<(u32, u32)> {
    let out = job.apply(image)?;
    sink.save(&out, output)?;
    Ok(out.dimensions())
}

fn run_resolved<S, F>(image: &Image, jobs: &[Job], sink: &mut S, output_of: F) -> BatchReport
where
    S: ImageSink + ?Sized,
    F: Fn(&Job) -> PathBuf,
{
    let mut report = BatchReport::default();
    for (i, job) in jobs.iter().enumerate() {
        let output = output_of(job);
        let result = run_job(image, job, &output, sink);
        match &result {
            Ok((w, h)) => info!(
                "job {}/{}: {} by {} -> {} ({w}x{h})",
                i + 1,
                jobs.len(),
                job.operation,
                job.factor,
                output.display()
            ),
            Err(e) => warn!(
                "job {}/{}: {} by {} -> {} failed: {e}",
                i + 1,
                jobs.len(),
                job.operation,
                job.factor,
                output.display()
            ),
        }
        report.outcomes.push(JobOutcome {
            operation: job.operation,
            factor: job.factor,
            output,
            result,
        });
    }
    report
}

/// Run `jobs` against an already loaded image, saving into `sink`.
///
/// Output paths are used exactly as written in each job.
pub fn run_jobs<S: ImageSink + ?Sized>(image: &Image, jobs: &[Job], sink: &mut S) -> BatchReport {
    run_resolved(image, jobs, sink, |job| job.output.clone())
}

/// Run a batch with a custom sink, resolving outputs through `config`.
pub fn run_batch_with_sink<S: ImageSink + ?Sized>(
    config: &BatchConfig,
    sink: &mut S,
) -> BatchResult<BatchReport> {
    let image = pixres_io::read_image(&config.input)?;
    info!(
        "batch input {}: {}x{} c={}, {} jobs",
        config.input.display(),
        image.width(),
        image.height(),
        image.channels(),
        config.jobs.len()
    );
    let report = run_resolved(&image, &config.jobs, sink, |job| config.output_path(job));
    info!(
        "batch done: {} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}

/// Load the input image and write every job's output to disk.
pub fn run_batch(config: &BatchConfig) -> BatchResult<BatchReport> {
    run_batch_with_sink(config, &mut FileSink)
}
