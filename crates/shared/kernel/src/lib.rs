//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading
//! and the shared server state.
//!
//! ## Config loading
//! ```rust,ignore
//! use numclass_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
pub mod server;

pub use numclass_domain as domain;
