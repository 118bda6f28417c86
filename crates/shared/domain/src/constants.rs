//! Shared string constants used across slices and the OpenAPI surface.

/// OpenAPI tag for system endpoints (health, docs).
pub const SYSTEM_TAG: &str = "system";
/// OpenAPI tag for the number-classification endpoints.
pub const CLASSIFICATION_TAG: &str = "classification";

/// Property tag for even numbers.
pub const EVEN: &str = "even";
/// Property tag for odd numbers.
pub const ODD: &str = "odd";
/// Property tag for Armstrong numbers.
pub const ARMSTRONG: &str = "armstrong";
