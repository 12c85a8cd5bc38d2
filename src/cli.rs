// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Flags:
//   -d <domain>   probe a single domain
//   -l <path>     probe every domain listed in a file (one per line)
//   -t <n>        number of concurrent workers (default 10)
//   -p <port>     port to probe (default 2083)
//   -o <path>     file that matches are appended to
//
// clap only parses; deciding what the flags mean (which mode, which errors)
// happens in config.rs via scan_mode() and scan_config().
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: a flag that may be absent
// - default_value_t: a typed default shown in --help
// =============================================================================

use crate::config::{ScanConfig, ScanMode, DEFAULT_CONCURRENCY, DEFAULT_OUTPUT, DEFAULT_PORT};
use crate::errors::UsageError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cpanel-finder",
    version,
    about = "Checks domains for an exposed cPanel login page",
    long_about = "cpanel-finder requests http://<domain>:<port>/ for one domain or a list of domains \
                  and reports the ones whose page title is exactly \"cPanel\". \
                  Matches are appended to the output file as host:port lines."
)]
pub struct Cli {
    /// Single domain to check, without protocol (example: example.com)
    ///
    /// An https:// prefix is stripped; http:// is rejected.
    /// Takes precedence over -l when both are given.
    #[arg(short = 'd', long = "domain")]
    pub domain: Option<String>,

    /// File containing the list of domains, one per line
    #[arg(short = 'l', long = "list")]
    pub list: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_CONCURRENCY)]
    pub threads: usize,

    /// Port to check for cPanel
    #[arg(short = 'p', long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Output file for valid domains (appended to, created if missing)
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Report failed probes as errors instead of as plain misses
    #[arg(long)]
    pub show_errors: bool,

    /// Print one JSON object per result instead of colored lines
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn scan_mode(&self) -> Result<ScanMode, UsageError> {
        ScanMode::resolve(self.domain.as_deref(), self.list.as_deref())
    }

    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_port(self.port)
            .with_concurrency(self.threads)
            .with_output_path(&self.output)
            .with_show_errors(self.show_errors)
            .with_json(self.json)
    }
}
