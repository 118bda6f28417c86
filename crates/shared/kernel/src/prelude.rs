//! Ergonomic re-exports for downstream crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::server::state::{ApiState, ApiStateBuilder, ApiStateError};
pub use numclass_domain::config::ApiConfig;
