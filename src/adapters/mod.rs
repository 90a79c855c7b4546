/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: the portal REST client,
/// console feedback, result formatters and output destinations.
pub mod outbound;
