use std::path::PathBuf;

use city_stats::{ReportConfig, run};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Per-country temperature and latitude report over Cities.csv / Countries.csv
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing Cities.csv and Countries.csv
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
}

fn main() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ReportConfig::with_data_dir(&args.data_dir);

    std::process::exit(run(&config));
}
