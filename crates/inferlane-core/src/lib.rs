//! Inference routing logic and port definitions for Inferlane.
//!
//! This crate defines the backend and metrics "ports" that the infrastructure
//! layer implements, plus the pure pieces of the prediction flow (routing,
//! cost estimation, budget guard). It depends only on `inferlane-types` --
//! never on `inferlane-infra` or any HTTP/telemetry crate.

pub mod adapter;
pub mod backend;
pub mod budget;
pub mod cost;
pub mod metrics;
pub mod router;

#[cfg(test)]
pub(crate) mod testing;
