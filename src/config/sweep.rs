use super::*;

/// Table name mapped to the ordered list of columns it is physically sorted
/// by before the benchmark runs. The list order is the sort priority.
pub type TableOrders = BTreeMap<String, Vec<SortColumn>>;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Sweep {
    /// Candidate chunk sizes, benchmarked in declared order.
    chunk_sizes: Vec<u32>,
    sort_orders: SortOrders,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            chunk_sizes: vec![65_000],
            sort_orders: SortOrders::tpcds_sf1(),
        }
    }
}

impl Sweep {
    pub fn chunk_sizes(&self) -> &[u32] {
        &self.chunk_sizes
    }

    pub fn sort_orders(&self) -> &SortOrders {
        &self.sort_orders
    }

    pub fn validate(&self) {
        if self.chunk_sizes.is_empty() {
            eprintln!("sweep.chunk_sizes must not be empty");
            std::process::exit(2);
        }

        if self.chunk_sizes.iter().any(|&size| size == 0) {
            eprintln!("sweep.chunk_sizes must be positive");
            std::process::exit(2);
        }

        if self.sort_orders.is_empty() {
            eprintln!("sweep.sort_orders must contain at least one experiment");
            std::process::exit(2);
        }

        for (label, tables) in self.sort_orders.experiments() {
            for (table, columns) in tables {
                if columns.is_empty() {
                    eprintln!("sort order {label}: {table} has an empty column list");
                    std::process::exit(2);
                }

                if columns.iter().any(|column| column.clusters() == 0) {
                    eprintln!("sort order {label}: {table} has a zero cluster count");
                    std::process::exit(2);
                }
            }
        }
    }
}

/// The sort order experiment set: experiment label mapped to the per-table
/// column orders applied before that experiment's runs. An experiment with
/// no tables is the unsorted baseline.
#[derive(Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SortOrders {
    experiments: BTreeMap<String, TableOrders>,
}

impl SortOrders {
    /// The built-in TPC-DS SF1 experiment: cluster `store_sales` on net
    /// profit, then quantity within each cluster.
    pub fn tpcds_sf1() -> Self {
        let mut tables = TableOrders::new();
        tables.insert(
            "store_sales".to_string(),
            vec![
                SortColumn::new("ss_net_profit", 45),
                SortColumn::new("ss_quantity", 1),
            ],
        );

        let mut experiments = BTreeMap::new();
        experiments.insert("ss_net_profit-45_ss_quantity-1".to_string(), tables);

        Self { experiments }
    }

    pub fn experiments(&self) -> impl Iterator<Item = (&str, &TableOrders)> {
        self.experiments
            .iter()
            .map(|(label, tables)| (label.as_str(), tables))
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}

/// One column of a multi-column physical sort order.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SortColumn {
    column: String,
    /// How many clusters the table is split into on this column before the
    /// next column applies within each cluster.
    clusters: u32,
}

impl SortColumn {
    pub fn new(column: &str, clusters: u32) -> Self {
        Self {
            column: column.to_string(),
            clusters,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn clusters(&self) -> u32 {
        self.clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sweep_is_a_single_store_sales_experiment() {
        let sweep = Sweep::default();

        assert_eq!(sweep.chunk_sizes(), [65_000]);
        assert_eq!(sweep.sort_orders().len(), 1);

        let (label, tables) = sweep.sort_orders().experiments().next().unwrap();
        assert_eq!(label, "ss_net_profit-45_ss_quantity-1");
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables["store_sales"],
            [
                SortColumn::new("ss_net_profit", 45),
                SortColumn::new("ss_quantity", 1),
            ]
        );
    }

    #[test]
    fn experiments_iterate_in_label_order() {
        let content = r#"
            ["t_hour-2"]
            time_dim = [ { column = "t_hour", clusters = 2 } ]

            ["cd_education_status-30"]
            customer_demographics = [ { column = "cd_education_status", clusters = 30 } ]
        "#;

        let orders: SortOrders = toml::from_str(content).unwrap();

        let labels: Vec<&str> = orders.experiments().map(|(label, _)| label).collect();
        assert_eq!(labels, ["cd_education_status-30", "t_hour-2"]);
    }

    #[test]
    fn unsorted_baseline_has_no_tables() {
        let orders: SortOrders = toml::from_str(r#"[default]"#).unwrap();

        let (label, tables) = orders.experiments().next().unwrap();
        assert_eq!(label, "default");
        assert!(tables.is_empty());
    }

    #[test]
    fn accessors_are_idempotent() {
        let sweep = Sweep::default();

        assert_eq!(sweep.chunk_sizes(), sweep.chunk_sizes());
        assert_eq!(
            sweep.sort_orders().experiments().count(),
            sweep.sort_orders().experiments().count()
        );
    }
}
