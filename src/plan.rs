use crate::benchmark::Benchmark;
use std::fmt;

/// The cross product of configured sort order experiments and candidate
/// chunk sizes, in the order the runner should execute them: experiments in
/// label order, chunk sizes in declared order within each experiment.
pub struct Plan {
    permutations: Vec<Permutation>,
}

impl Plan {
    pub fn new(benchmark: &dyn Benchmark) -> Self {
        let mut permutations = Vec::new();

        for (experiment, _) in benchmark.sort_orders().experiments() {
            for &chunk_size in benchmark.chunk_sizes() {
                permutations.push(Permutation {
                    experiment: experiment.to_string(),
                    chunk_size,
                });
            }
        }

        Self { permutations }
    }

    pub fn permutations(&self) -> &[Permutation] {
        &self.permutations
    }

    pub fn len(&self) -> usize {
        self.permutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutations.is_empty()
    }
}

/// One benchmarked configuration: a sort order experiment paired with a
/// physical chunk size.
pub struct Permutation {
    experiment: String,
    chunk_size: u32,
}

impl Permutation {
    pub fn experiment(&self) -> &str {
        &self.experiment
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} rows per chunk",
            self.experiment(),
            self.chunk_size()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn builtin_suite_plans_one_permutation() {
        let config = Config::tpcds();

        let plan = Plan::new(&config);

        assert_eq!(plan.len(), 1);
        assert!(!plan.is_empty());

        let permutation = &plan.permutations()[0];
        assert_eq!(permutation.experiment(), "ss_net_profit-45_ss_quantity-1");
        assert_eq!(permutation.chunk_size(), 65_000);
    }

    #[test]
    fn plan_covers_the_full_cross_product() {
        let content = r#"
            [sweep]
            chunk_sizes = [25000, 100000]

            [sweep.sort_orders."cd_education_status-30"]
            customer_demographics = [ { column = "cd_education_status", clusters = 30 } ]

            [sweep.sort_orders."t_hour-2"]
            time_dim = [ { column = "t_hour", clusters = 2 } ]
        "#;

        let config: Config = toml::from_str(content).unwrap();

        let plan = Plan::new(&config);

        let pairs: Vec<(&str, u32)> = plan
            .permutations()
            .iter()
            .map(|p| (p.experiment(), p.chunk_size()))
            .collect();

        assert_eq!(
            pairs,
            [
                ("cd_education_status-30", 25_000),
                ("cd_education_status-30", 100_000),
                ("t_hour-2", 25_000),
                ("t_hour-2", 100_000),
            ]
        );
    }

    #[test]
    fn permutations_format_for_result_labeling() {
        let config = Config::tpcds();

        let plan = Plan::new(&config);

        assert_eq!(
            plan.permutations()[0].to_string(),
            "ss_net_profit-45_ss_quantity-1 @ 65000 rows per chunk"
        );
    }
}
