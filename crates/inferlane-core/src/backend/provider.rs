//! InferenceBackend trait definition.

use std::future::Future;

use inferlane_types::error::InferenceError;
use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

/// A model-hosting backend (Bedrock, SageMaker, local mock).
///
/// Each implementation turns a generic [`InferenceRequest`] into a
/// provider-specific call and maps the provider's answer back into an
/// [`InferenceResponse`] tagged with its own [`ProviderKind`].
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// inferlane-infra, except [`super::LocalBackend`].
pub trait InferenceBackend: Send + Sync {
    /// Which provider this backend talks to.
    fn kind(&self) -> ProviderKind;

    /// Run one inference. Remote and decoding failures are returned as-is;
    /// backends never retry.
    fn invoke(
        &self,
        request: &InferenceRequest,
    ) -> impl Future<Output = Result<InferenceResponse, InferenceError>> + Send;
}
