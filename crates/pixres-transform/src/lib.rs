//! pixres-transform - Spatial resolution transforms for pixres
//!
//! This crate provides nearest-neighbor resolution operations:
//!
//! - Down-sampling by integer stride (point sampling)
//! - Up-sampling by integer replication
//! - Resampling (down then up) with an explicit boundary policy

mod error;
pub mod resample;
pub mod sample;

pub use error::{TransformError, TransformResult};
pub use resample::{BoundaryPolicy, resample, resample_with_policy};
pub use sample::{down_sample, up_sample};
