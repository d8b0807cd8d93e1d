pub mod collector;
pub mod error;
pub mod rank;
pub mod snapshot;

use snapshot::MetricsSnapshot;

/// Anything that can produce a fresh snapshot on demand.
///
/// Sampling never fails once the source exists; per-process problems are
/// absorbed while ranking.
pub trait MetricsSource {
    fn sample(&mut self) -> MetricsSnapshot;
}
