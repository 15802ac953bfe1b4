//! AWS SageMaker hosted-endpoint backend.

mod client;

pub use client::SageMakerBackend;
