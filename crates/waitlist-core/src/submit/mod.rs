//! Submission backends
//!
//! Implementations of [`Submitter`](crate::form::Submitter): a simulated
//! backend for local runs and an HTTP backend for a real endpoint.

pub mod http;
pub mod simulated;

pub use http::HttpBackend;
pub use simulated::{SimulatedBackend, DEFAULT_SIMULATED_DELAY};
