/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI calls the form controller
/// directly.
pub mod outbound;
