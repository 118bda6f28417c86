use axum::extract::FromRef;
use numclass_domain::config::ApiConfig;
use numclass_facts::FactsClient;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiStateError {
    #[error("State validation error: {message}")]
    Validation { message: Cow<'static, str> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub facts: FactsClient,
}

/// Shared application state, cloned into every request handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for FactsClient {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.facts.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    facts: Option<FactsClient>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn facts(mut self, facts: FactsClient) -> Self {
        self.facts = Some(facts);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns an error if the config or the facts client was not provided.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "ApiConfig not provided".into(),
        })?;
        let facts = self.facts.ok_or_else(|| ApiStateError::Validation {
            message: "FactsClient not provided".into(),
        })?;

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, facts }) })
    }
}
