use ringlog::Level;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

mod debug;
mod general;
mod run;
mod sweep;

pub use debug::Debug;
pub use general::General;
pub use run::Run;
pub use sweep::{SortColumn, SortOrders, Sweep, TableOrders};

/// A complete benchmark suite configuration. Missing sections resolve to the
/// built-in TPC-DS SF1 suite, so an empty file is a valid configuration.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    general: General,
    run: Run,
    sweep: Sweep,
    debug: Debug,
}

impl Config {
    /// Load a suite configuration from a TOML file. Unreadable or unparsable
    /// files and invalid parameter sets are fatal.
    pub fn new(file: &str) -> Self {
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("unable to open config file: {error}");
                std::process::exit(1);
            }
        };

        let config: Config = match toml::from_str(&content) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("failed to parse config file: {error}");
                std::process::exit(1);
            }
        };

        config.validate();
        config
    }

    /// The built-in TPC-DS SF1 suite.
    pub fn tpcds() -> Self {
        Default::default()
    }

    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn debug(&self) -> &Debug {
        &self.debug
    }

    fn validate(&self) {
        self.general.validate();
        self.run.validate();
        self.sweep.validate();
    }
}
