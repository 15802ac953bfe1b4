//! BoxInferenceBackend -- object-safe dynamic dispatch wrapper for InferenceBackend.
//!
//! 1. `InferenceBackendDyn` is the object-safe variant with a boxed future
//! 2. Blanket impl of `InferenceBackendDyn` for every `T: InferenceBackend`
//! 3. `BoxInferenceBackend` wraps `Box<dyn InferenceBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use inferlane_types::error::InferenceError;
use inferlane_types::inference::{InferenceRequest, InferenceResponse, ProviderKind};

use super::provider::InferenceBackend;

/// Object-safe version of [`InferenceBackend`] with boxed futures.
pub trait InferenceBackendDyn: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn invoke_boxed<'a>(
        &'a self,
        request: &'a InferenceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InferenceResponse, InferenceError>> + Send + 'a>>;
}

impl<T: InferenceBackend> InferenceBackendDyn for T {
    fn kind(&self) -> ProviderKind {
        InferenceBackend::kind(self)
    }

    fn invoke_boxed<'a>(
        &'a self,
        request: &'a InferenceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InferenceResponse, InferenceError>> + Send + 'a>> {
        Box::pin(self.invoke(request))
    }
}

/// Type-erased backend handle, owned by whoever builds the router.
///
/// Lets callers inject real HTTP backends in production and fakes in tests
/// without the router knowing the concrete type.
pub struct BoxInferenceBackend {
    inner: Box<dyn InferenceBackendDyn + Send + Sync>,
}

impl BoxInferenceBackend {
    /// Wrap a concrete backend.
    pub fn new<T: InferenceBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.inner.kind()
    }

    pub async fn invoke(
        &self,
        request: &InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        self.inner.invoke_boxed(request).await
    }
}

impl std::fmt::Debug for BoxInferenceBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxInferenceBackend")
            .field("kind", &self.kind())
            .finish()
    }
}
