// src/scan/queue.rs
// =============================================================================
// The host queue that feeds the worker pool.
//
// How it works:
// 1. A producer task sends every candidate into a bounded channel
// 2. When it has sent them all it drops its sender, which closes the channel
// 3. Workers pull from the shared receiver until it returns None
//
// The receiver sits behind an async mutex: only one worker waits on it at a
// time, and each candidate is received by exactly one worker.
//
// Rust concepts:
// - mpsc: "multi-producer, single-consumer" channel from tokio
// - Bounded channel: send() waits when the buffer is full (backpressure)
// - Dropping the last Sender closes the channel; recv() then returns None
// =============================================================================

use crate::input::Candidate;
use tokio::sync::{mpsc, Mutex};

#[derive(Debug)]
pub struct HostQueue {
    receiver: Mutex<mpsc::Receiver<Candidate>>,
}

/// Channel capacity for a given worker count: four slots per worker, at least 8
pub fn queue_capacity(concurrency: usize) -> usize {
    concurrency.saturating_mul(4).max(8)
}

impl HostQueue {
    // Starts a producer task that enqueues every candidate, in order
    //
    // Must be called from inside a tokio runtime. The queue closes once the
    // producer is done.
    pub fn fill(candidates: Vec<Candidate>, capacity: usize) -> Self {
        // tokio panics on a zero-capacity channel, so keep at least one slot
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        // The producer owns the sender; `async move` moves it into the task
        tokio::spawn(async move {
            for candidate in candidates {
                // Err means every receiver is gone: nobody left to feed
                if sender.send(candidate).await.is_err() {
                    tracing::debug!("host queue receiver dropped, stopping producer");
                    break;
                }
            }
            // sender is dropped here, closing the queue
        });

        Self {
            receiver: Mutex::new(receiver),
        }
    }

    /// Takes the next candidate, waiting if the queue is empty but still
    /// open. Returns None once the queue is closed and drained.
    pub async fn pull(&self) -> Option<Candidate> {
        // Lock first, then wait for a message. While one worker waits here
        // the others wait on the lock, so no candidate can go to two workers.
        self.receiver.lock().await.recv().await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a channel instead of a Vec?
//    - Workers can start before every candidate is enqueued
//    - The channel also tells them when there is no more work (None)
//
// 2. Why wrap the Receiver in a Mutex?
//    - mpsc has a single receiving end: recv() needs &mut self
//    - The Mutex turns "one consumer" into "many consumers, one at a time"
//    - tokio's Mutex is used because we hold it across an .await
//
// 3. What is backpressure?
//    - send().await waits while the channel is full
//    - A huge domain list never sits in the channel all at once
//
// 4. When does the channel close?
//    - When the last Sender is dropped, here at the end of the producer task
//    - After that, recv() drains what is left and then returns None
// -----------------------------------------------------------------------------
