use std::path::PathBuf;

use thiserror::Error;

/// Failures that leave the sampler with no data source at all.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("host memory totals are unavailable")]
    MemoryUnavailable,
    #[error("no mounted filesystem contains {}", .0.display())]
    DiskNotFound(PathBuf),
}
