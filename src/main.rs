// src/main.rs
// =============================================================================
// This is the entry point of cpanel-finder.
//
// What happens here:
// 1. Set up diagnostic logging (stderr, controlled by RUST_LOG)
// 2. Parse command-line arguments and decide the mode (single or batch)
// 3. Build the prober and the result sink
// 4. Probe one domain, or run the worker pool over a domain list
// 5. Exit with 0 when the run completes, 1 on a fatal error
//
// Result lines go to stdout; fatal errors and logs go to stderr.
// =============================================================================

mod cli;
mod config;
mod errors;
mod input;
mod probe;
mod scan;
mod sink;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{ScanConfig, ScanMode};
use errors::FinderError;
use probe::{HttpProber, Prober};
use scan::{HostQueue, ScanSummary};
use sink::{ConsoleObserver, JsonObserver, Observer, OutputLog, ResultSink};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Usage errors (no target, http:// domain) abort here, before any
    // network activity
    let mode = cli.scan_mode().map_err(FinderError::from)?;
    let config = cli.scan_config();

    let prober: Arc<dyn Prober> = Arc::new(HttpProber::new().map_err(FinderError::from)?);
    let sink = Arc::new(build_sink(&config));

    match mode {
        ScanMode::Single(candidate) => {
            tracing::info!(host = %candidate, port = config.port, "checking single domain");
            scan::check_single(candidate, prober.as_ref(), &sink, config.port).await;
        }
        ScanMode::Batch(path) => {
            let candidates = input::read_candidate_list(&path).await?;

            if !config.json {
                println!(
                    "🔍 Checking {} domain(s) on port {} with {} worker(s)",
                    candidates.len(),
                    config.port,
                    config.concurrency
                );
            }

            let queue = HostQueue::fill(candidates, scan::queue_capacity(config.concurrency));
            let summary = scan::run_pool(queue, prober, sink, &config).await;

            if !config.json {
                print_summary(&summary, &config);
            }
        }
    }

    Ok(0)
}

fn build_sink(config: &ScanConfig) -> ResultSink {
    let observer: Arc<dyn Observer> = if config.json {
        Arc::new(JsonObserver)
    } else {
        Arc::new(ConsoleObserver::new(config.show_errors))
    };

    ResultSink::new(OutputLog::new(&config.output_path), observer)
}

fn print_summary(summary: &ScanSummary, config: &ScanConfig) {
    println!();
    println!("📊 Summary:");
    println!("   ✅ cPanel: {}", summary.matches);
    if config.show_errors {
        println!("   ❌ Not cPanel: {}", summary.misses);
        println!("   ⚠️  Errors: {}", summary.errors);
    } else {
        // Without --show-errors a failed probe is reported as a miss
        println!("   ❌ Not cPanel: {}", summary.misses + summary.errors);
    }
    println!("   📋 Total: {}", summary.total());
    if summary.matches > 0 {
        println!("   💾 Saved to: {}", config.output_path.display());
    }
}
