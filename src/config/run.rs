use super::*;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Run {
    /// Wall-clock budget per configuration permutation, in seconds.
    time: u64,
    /// Cap on repetitions per permutation. `-1` means unbounded, leaving the
    /// time budget as the only stop condition.
    max_runs: i64,
}

impl Default for Run {
    fn default() -> Self {
        Self {
            time: 60,
            max_runs: -1,
        }
    }
}

impl Run {
    pub fn time(&self) -> Duration {
        Duration::from_secs(self.time)
    }

    pub fn max_runs(&self) -> i64 {
        self.max_runs
    }

    pub fn validate(&self) {
        if self.time == 0 {
            eprintln!("run.time must be positive");
            std::process::exit(2);
        }

        if self.max_runs != -1 && self.max_runs <= 0 {
            eprintln!("run.max_runs must be -1 (unbounded) or positive");
            std::process::exit(2);
        }
    }
}
