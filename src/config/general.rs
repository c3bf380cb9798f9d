use super::*;

// standard TPC dataset scale factors
const RECOGNIZED_SCALES: &[u32] = &[1, 10, 100, 300, 1000, 3000, 10_000, 30_000, 100_000];

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct General {
    /// Stable identifier used for labeling results.
    name: String,
    /// The pre-built benchmark executable the runner launches.
    exec_path: String,
    /// Directory the runner writes results into.
    result_path: String,
    scale: u32,
}

impl Default for General {
    fn default() -> Self {
        Self {
            name: "tpcds".to_string(),
            exec_path: "/opt/hyrise/build-release/hyrisePlayground".to_string(),
            result_path: "benchmark_results/tpcds_sf_1".to_string(),
            scale: 1,
        }
    }
}

impl General {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exec_path(&self) -> &Path {
        Path::new(&self.exec_path)
    }

    pub fn result_path(&self) -> &Path {
        Path::new(&self.result_path)
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn validate(&self) {
        if self.name.is_empty() {
            eprintln!("general.name must not be empty");
            std::process::exit(2);
        }

        if self.exec_path.is_empty() {
            eprintln!("general.exec_path must not be empty");
            std::process::exit(2);
        }

        if self.result_path.is_empty() {
            eprintln!("general.result_path must not be empty");
            std::process::exit(2);
        }

        if !RECOGNIZED_SCALES.contains(&self.scale) {
            eprintln!(
                "general.scale must be a standard scale factor: {:?}",
                RECOGNIZED_SCALES
            );
            std::process::exit(2);
        }
    }
}
