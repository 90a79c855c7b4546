/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the portal API, the console and the file system.
pub mod notifier;
pub mod output_presenter;
pub mod request_gateway;
pub mod result_formatter;
pub mod satellite_catalog;

pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
pub use request_gateway::{GatewayResponse, RequestGateway};
pub use result_formatter::ResultFormatter;
pub use satellite_catalog::SatelliteCatalog;
