/// Ports module defining interfaces for hexagonal architecture
///
/// The generator is driven from the CLI directly, so only outbound
/// (driven) ports are declared here.
pub mod outbound;
