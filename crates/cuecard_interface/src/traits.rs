//! Trait definitions for model backends.

use async_trait::async_trait;
use cuecard_core::{GenerateRequest, GenerateResponse};
use cuecard_error::CuecardResult;
use std::sync::Arc;

/// Core trait that every text-generation backend implements.
///
/// One call is one network round trip. A successful call may still carry no
/// usable text; callers inspect [`GenerateResponse::text`] for that.
///
/// Implementations are shared across concurrent requests and must not hold
/// per-request state.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Submit a prompt and wait for the provider's response envelope.
    async fn generate(&self, req: &GenerateRequest) -> CuecardResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<D: ModelDriver + ?Sized> ModelDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> CuecardResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
