//! HTTP serving layer.
//!
//! `GET /health` for liveness and `POST /predict` for inference.

pub mod error;
pub mod handlers;
pub mod router;
