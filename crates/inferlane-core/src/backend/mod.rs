//! Backend abstractions.
//!
//! - `InferenceBackend`: RPITIT trait for concrete backend implementations
//! - `BoxInferenceBackend`: object-safe wrapper for dynamic dispatch
//! - `LocalBackend`: dependency-free mock used for development

pub mod box_backend;
pub mod local;
pub mod provider;

pub use box_backend::BoxInferenceBackend;
pub use local::LocalBackend;
pub use provider::InferenceBackend;
