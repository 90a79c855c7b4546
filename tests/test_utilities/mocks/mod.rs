/// Mock implementations for testing
mod mock_notifier;
mod mock_request_gateway;
mod mock_satellite_catalog;

pub use mock_notifier::MockNotifier;
pub use mock_request_gateway::MockRequestGateway;
pub use mock_satellite_catalog::MockSatelliteCatalog;
