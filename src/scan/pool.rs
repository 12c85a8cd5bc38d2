// src/scan/pool.rs
// =============================================================================
// The worker pool: probes every queued candidate with N concurrent workers.
//
// Each worker loops:
// 1. Pull a candidate from the host queue (stop when it's closed)
// 2. Probe it and classify the result
// 3. Hand the outcome to the result sink
//
// A failed probe is just an outcome with Verdict::Error. It never stops the
// worker or the pool. run_pool only returns once every worker has finished.
//
// Rust concepts:
// - tokio::spawn: runs a future as an independent task
// - Arc: shared ownership of the queue, prober and sink across tasks
// - join_all: waits for a whole list of futures (our completion barrier)
// - JoinHandle<T>: a spawned task's result, Err if the task panicked
// =============================================================================

use super::outcome::{ProbeOutcome, ScanSummary};
use super::queue::HostQueue;
use crate::config::ScanConfig;
use crate::input::Candidate;
use crate::probe::{verdict_for, Prober, Verdict};
use crate::sink::ResultSink;
use futures::future::join_all;
use std::sync::Arc;

// Probes and classifies one host
//
// Shared by the pool workers and the single-domain path.
pub async fn process(host: &str, port: u16, prober: &dyn Prober) -> ProbeOutcome {
    // One request, no retry: whatever comes back is the answer
    let result = prober.probe(host, port).await;

    // Failures are data: log them for RUST_LOG=debug and keep going
    if let Err(e) = &result {
        tracing::debug!(host, port, "probe failed: {}", e);
    }

    ProbeOutcome::new(host, port, verdict_for(&result))
}

/// Single-domain mode: the same pipeline for one candidate and no pool.
pub async fn check_single(
    candidate: Candidate,
    prober: &dyn Prober,
    sink: &ResultSink,
    port: u16,
) -> Verdict {
    let outcome = process(candidate.host(), port, prober).await;

    // The sink takes ownership of the outcome, so keep a copy of the verdict
    let verdict = outcome.verdict.clone();
    sink.report(outcome).await;
    verdict
}

// Runs the pool until the queue is drained
//
// Parameters:
//   queue: candidates to probe (already being filled by its producer)
//   prober: shared by every worker
//   sink: receives every outcome
//   config: supplies the port and the number of workers
//
// Returns: verdict counts summed over all workers
pub async fn run_pool(
    queue: HostQueue,
    prober: Arc<dyn Prober>,
    sink: Arc<ResultSink>,
    config: &ScanConfig,
) -> ScanSummary {
    // Wrap the queue in an Arc so every worker can hold a handle to it
    let queue = Arc::new(queue);
    // u16 is Copy: each worker gets its own copy, no locking needed
    let port = config.port;
    let workers = config.concurrency.max(1);

    tracing::info!(workers, port, "starting worker pool");

    // Spawn exactly `workers` tasks. Each clone below only bumps a
    // reference count; the queue, prober and sink themselves are shared.
    let handles: Vec<_> = (0..workers)
        .map(|id| {
            let queue = queue.clone();
            let prober = prober.clone();
            let sink = sink.clone();
            tokio::spawn(async move { worker(id, &queue, prober.as_ref(), &sink, port).await })
        })
        .collect();

    // Completion barrier: wait for every worker before returning, so no
    // outcome is still in flight when the caller moves on
    let mut summary = ScanSummary::default();
    for result in join_all(handles).await {
        match result {
            Ok(worker_summary) => summary.merge(worker_summary),
            // A panicked worker loses its in-flight candidate; the rest carry on
            Err(e) => tracing::error!("worker task failed: {}", e),
        }
    }

    tracing::info!(total = summary.total(), matches = summary.matches, "worker pool finished");
    summary
}

async fn worker(
    id: usize,
    queue: &HostQueue,
    prober: &dyn Prober,
    sink: &ResultSink,
    port: u16,
) -> ScanSummary {
    // Per-worker counts: no shared counter to lock
    let mut summary = ScanSummary::default();

    // pull() returns None once the queue is closed and drained
    while let Some(candidate) = queue.pull().await {
        let outcome = process(candidate.host(), port, prober).await;
        summary.count(&outcome.verdict);
        sink.report(outcome).await;
    }

    tracing::debug!(worker = id, handled = summary.total(), "queue drained, worker exiting");
    summary
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is &dyn Prober?
//    - A reference to "some type that implements Prober"
//    - The real run passes HttpProber, the tests pass MockProber
//    - The pool code is the same for both
//
// 2. Why Arc<dyn Prober> in run_pool but &dyn Prober in worker?
//    - tokio::spawn needs owned ('static) data, so each task gets an Arc
//    - Inside the task we only borrow it: prober.as_ref() gives &dyn Prober
//
// 3. What happens if a task panics?
//    - tokio catches the panic and the JoinHandle returns Err(JoinError)
//    - We log it and keep the summaries of the other workers
//
// 4. Why does each worker return its own ScanSummary?
//    - Workers never touch each other's counters
//    - The totals are added up once, after join_all
//
// 5. What is while let?
//    - Loop while the pattern matches
//    - while let Some(candidate) = queue.pull().await stops at the first None
// -----------------------------------------------------------------------------
