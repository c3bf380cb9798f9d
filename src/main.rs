use backtrace::Backtrace;
use clap::{Arg, Command};
use humantime::format_duration;
use ringlog::*;

// Teacher stack glue: `output!` routes to the "stdout" target, which — with no
// dedicated target logger registered — falls back to the default log, exactly
// as the teacher (rpc-perf) wires it.
#[macro_export]
macro_rules! output {
    () => (
        info!(target: "stdout", "");
    );
    ($($arg:tt)*) => (
        info!(target: "stdout", $($arg)*);
    )
}

mod benchmark;
mod config;
mod plan;

use benchmark::Benchmark;
use config::Config;
use plan::Plan;

fn main() {
    // custom panic hook to terminate whole process after unwinding
    std::panic::set_hook(Box::new(|s| {
        eprintln!("{s}");
        eprintln!("{:?}", Backtrace::new());
        std::process::exit(101);
    }));

    // parse command line options
    let matches = Command::new(env!("CARGO_BIN_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_about(
            "A parameterization and sweep planning tool for data layout \
            benchmarks against a pre-built database benchmark binary.",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Benchmark suite configuration file")
                .action(clap::ArgAction::Set)
                .index(1),
        )
        .get_matches();

    // load config from file, falling back to the built-in TPC-DS suite
    let config = if let Some(file) = matches.get_one::<String>("CONFIG") {
        Config::new(file)
    } else {
        Config::tpcds()
    };

    // configure debug log
    let debug_output: Box<dyn Output> = if let Some(file) = config.debug().log_file() {
        let backup = config
            .debug()
            .log_backup()
            .unwrap_or(format!("{}.old", file));
        Box::new(
            File::new(&file, &backup, config.debug().log_max_size())
                .expect("failed to open debug log file"),
        )
    } else {
        // by default, log to stderr
        Box::new(Stderr::new())
    };

    let level = config.debug().log_level();

    let debug_log = if level <= Level::Info {
        LogBuilder::new().format(ringlog::default_format)
    } else {
        LogBuilder::new()
    }
    .output(debug_output)
    .log_queue_depth(config.debug().log_queue_depth())
    .single_message_size(config.debug().log_single_message_size())
    .build()
    .expect("failed to initialize debug log");

    let mut log = MultiLogBuilder::new()
        .level_filter(config.debug().log_level().to_level_filter())
        .default(debug_log)
        .build()
        .start();

    output!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    info!("suite: {}", config.name());
    info!("executable: {}", config.exec_path().display());
    info!("result directory: {}", config.result_path().display());
    info!("scale factor: {}", config.scale());
    info!(
        "time budget: {} per permutation",
        format_duration(config.time())
    );

    match config.max_runs() {
        -1 => info!("runs: unbounded, capped by the time budget"),
        n => info!("runs: up to {} per permutation", n),
    }

    for (label, tables) in config.sort_orders().experiments() {
        if tables.is_empty() {
            info!("sort order {}: unsorted baseline", label);
            continue;
        }

        for (table, columns) in tables {
            let order: Vec<String> = columns
                .iter()
                .map(|c| format!("{}/{}", c.column(), c.clusters()))
                .collect();

            info!("sort order {}: {} [{}]", label, table, order.join(", "));
        }
    }

    let plan = Plan::new(&config);

    if plan.is_empty() {
        eprintln!("nothing to benchmark: empty permutation plan");
        std::process::exit(2);
    }

    debug!("plan generated: {}", chrono::Utc::now().to_rfc3339());

    for permutation in plan.permutations() {
        info!("permutation: {}", permutation);
    }

    let _ = log.flush();

    output!(
        "{} permutations planned ({} sort orders x {} chunk sizes)",
        plan.len(),
        config.sort_orders().len(),
        config.chunk_sizes().len()
    );

    let _ = log.flush();
}
