// src/probe/mod.rs
// =============================================================================
// This module contains everything needed to probe one host.
//
// Submodules:
// - http: Sends the plaintext GET and returns the title signal
// - title: Finds the <title> text in a response body
// - classify: Decides whether a signal means "this is cPanel"
// =============================================================================

mod classify;
mod http;
mod title;

pub use classify::{verdict_for, Verdict};
pub use http::{HttpProber, Prober};
