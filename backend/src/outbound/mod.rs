//! Outbound adapters implementing domain ports.
//!
//! The mock server keeps everything in process memory; see [`memory`].

pub mod memory;
