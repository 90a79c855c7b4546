//! orbithub-portal - client for the OrbitHub satellite data request portal
//!
//! This library holds the state of a bilingual (EN/PT) data request form,
//! searches the OrbitHub satellite catalog with the request criteria and
//! submits the finished request, following hexagonal architecture.
//!
//! # Architecture
//!
//! - **Domain Layer** (`portal`): Draft, satellites, selection, languages and labels
//! - **Application Layer** (`application`): The form controller, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST client, console, formatters and file output
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use orbithub_portal::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let client = PortalApiClient::new("http://localhost:8000")?;
//! let mut form = FormController::new(
//!     client.clone(),
//!     client,
//!     ConsoleNotifier::new(false),
//!     Language::Pt,
//! );
//!
//! form.draft_mut().classification = Some(Classification::Gold);
//! form.filter().await?;
//! if let Some(first) = form.results().first().cloned() {
//!     form.toggle_satellite(&first);
//! }
//!
//! let outcome = form.submit().await;
//! println!("accepted: {}", outcome.is_accepted());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod portal;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleNotifier;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonResultFormatter, TextResultFormatter};
    pub use crate::adapters::outbound::network::PortalApiClient;
    pub use crate::application::dto::{
        FormOptions, OutputFormat, SubmissionOutcome, SubmissionPayload,
    };
    pub use crate::application::FormController;
    pub use crate::portal::domain::{
        Classification, Delivery, Language, RequestDraft, Satellite, SelectionSet,
    };
    pub use crate::portal::services::CatalogQuery;
    pub use crate::ports::outbound::{
        GatewayResponse, Notifier, OutputPresenter, RequestGateway, ResultFormatter,
        SatelliteCatalog,
    };
    pub use crate::shared::error::{ExitCode, PortalError};
    pub use crate::shared::Result;
}
