use crate::config::{Config, SortOrders};
use std::path::Path;
use std::time::Duration;

/// The complete parameter set a benchmark suite hands to the runner.
///
/// Every operation is zero-argument, deterministic, and infallible: values
/// are fixed when the suite is constructed and never change afterwards.
/// Environmental concerns stay with the runner: `exec_path` is not checked
/// for existence here and `result_path` is not created here.
pub trait Benchmark {
    /// Stable identifier used for labeling results.
    fn name(&self) -> &str;

    /// Location of the pre-built benchmark executable.
    fn exec_path(&self) -> &Path;

    /// Directory the runner writes results into.
    fn result_path(&self) -> &Path;

    /// Wall-clock budget per configuration permutation.
    fn time(&self) -> Duration;

    /// Cap on repetitions per permutation. `-1` means unbounded, leaving the
    /// time budget as the only stop condition.
    fn max_runs(&self) -> i64;

    /// Dataset scale factor.
    fn scale(&self) -> u32;

    /// Candidate physical chunk sizes, in the order they should be run.
    fn chunk_sizes(&self) -> &[u32];

    /// Candidate sort order experiments, applied one at a time.
    fn sort_orders(&self) -> &SortOrders;
}

impl Benchmark for Config {
    fn name(&self) -> &str {
        self.general().name()
    }

    fn exec_path(&self) -> &Path {
        self.general().exec_path()
    }

    fn result_path(&self) -> &Path {
        self.general().result_path()
    }

    fn time(&self) -> Duration {
        self.run().time()
    }

    fn max_runs(&self) -> i64 {
        self.run().max_runs()
    }

    fn scale(&self) -> u32 {
        self.general().scale()
    }

    fn chunk_sizes(&self) -> &[u32] {
        self.sweep().chunk_sizes()
    }

    fn sort_orders(&self) -> &SortOrders {
        self.sweep().sort_orders()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_suite_matches_published_parameters() {
        let config = Config::tpcds();
        let suite: &dyn Benchmark = &config;

        assert_eq!(suite.name(), "tpcds");
        assert_eq!(
            suite.exec_path(),
            Path::new("/opt/hyrise/build-release/hyrisePlayground")
        );
        assert_eq!(
            suite.result_path(),
            Path::new("benchmark_results/tpcds_sf_1")
        );
        assert_eq!(suite.time(), Duration::from_secs(60));
        assert_eq!(suite.max_runs(), -1);
        assert_eq!(suite.scale(), 1);
        assert_eq!(suite.chunk_sizes(), [65_000]);
        assert_eq!(suite.sort_orders().len(), 1);
    }

    #[test]
    fn parameters_satisfy_the_runner_contract() {
        let suite = Config::tpcds();

        assert!(!suite.chunk_sizes().is_empty());
        assert!(suite.chunk_sizes().iter().all(|&size| size > 0));
        assert!(suite.max_runs() == -1 || suite.max_runs() > 0);
        assert!(suite.time() > Duration::ZERO);
        assert!(suite.scale() > 0);

        for (_, tables) in suite.sort_orders().experiments() {
            for columns in tables.values() {
                assert!(!columns.is_empty());
                assert!(columns.iter().all(|column| column.clusters() > 0));
            }
        }
    }
}
