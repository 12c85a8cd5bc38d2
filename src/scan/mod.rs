// src/scan/mod.rs
// =============================================================================
// This module runs the scan: host queue in, outcomes out.
//
// Submodules:
// - queue: Bounded channel of candidates shared by the workers
// - pool: The worker pool, plus the single-domain path
// - outcome: Per-candidate outcome and per-run summary
// =============================================================================

mod outcome;
mod pool;
mod queue;

pub use outcome::{ProbeOutcome, ScanSummary};
pub use pool::{check_single, run_pool};
pub use queue::{queue_capacity, HostQueue};
