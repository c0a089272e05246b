/// FSIO settings generation - domain model and services
///
/// Holds no I/O; reading manifests and writing files happens in adapters.
pub mod domain;
pub mod services;
