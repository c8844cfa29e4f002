//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns such as
//! tracing and simulated latency.

pub mod latency;
pub mod trace;

pub use latency::Latency;
pub use trace::Trace;
