/// Crate-wide Result alias backed by anyhow::Error.
///
/// Typed failures are raised as [`PortalError`](super::error::PortalError)
/// and converted on `?`, keeping context chains intact for the CLI.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
