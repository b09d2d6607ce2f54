//! Batch runs over a single input image
//!
//! Replaces a fixed script of factors and file names with an explicit
//! [`BatchConfig`] listing `{operation, factor, output}` jobs. Each job is
//! independent: one failing job does not stop the others.
//!
//! ```
//! use pixres::batch::{Job, MemorySink, Operation, run_jobs};
//! use pixres::{Factor, Image};
//!
//! let img = Image::new_filled(8, 8, 1, 77).unwrap();
//! let jobs = [
//!     Job::new(Operation::Resample, Factor::new(4).unwrap(), "r4.png"),
//!     Job::new(Operation::GrayLevelReduction, Factor::new(8).unwrap(), "g8.png"),
//! ];
//! let mut sink = MemorySink::new();
//! let report = run_jobs(&img, &jobs, &mut sink);
//! assert!(report.is_success());
//! assert_eq!(sink.images.len(), 2);
//! ```

mod config;
mod error;
mod run;
mod sink;

pub use config::{BatchConfig, Boundary, Job, Operation};
pub use error::{BatchError, BatchResult};
pub use run::{BatchReport, JobOutcome, run_batch, run_batch_with_sink, run_jobs};
pub use sink::{FileSink, ImageSink, MemorySink};
