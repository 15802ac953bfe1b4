//! Shared domain types for Inferlane.
//!
//! Request/response shapes, per-call metrics, provider identifiers, the
//! validated adapter configuration, and the error enums shared by every
//! other crate in the workspace.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod inference;
