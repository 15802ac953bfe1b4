//! AWS Bedrock text-generation backend.
//!
//! Implements [`InferenceBackend`] for the Bedrock Runtime `invoke` API using
//! Bearer token authentication.
//!
//! [`InferenceBackend`]: inferlane_core::backend::InferenceBackend

mod client;
pub mod types;

pub use client::BedrockBackend;
