use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a request the portal did not
/// accept from a misconfigured or broken invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - command completed and any submitted request was accepted
    Success = 0,
    /// The request was rejected by the portal or never reached it
    RequestNotAccepted = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (configuration, catalog query failure, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RequestNotAccepted => write!(f, "Request Not Accepted (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the portal client.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Invalid API base URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http:// or https:// URL such as http://localhost:8000")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Satellite catalog query failed: {url}\nStatus: {status}\n\n💡 Hint: Check that the portal API is running and reachable")]
    CatalogQueryFailed { url: String, status: u16 },

    #[error("Unknown classification: {value}\n\n💡 Hint: Use one of GOLD, SILVER, BRONZE, PENDING (or OURO, PRATA, BRONZE, PENDENTE DE CLASSIFICAÇÃO)")]
    UnknownClassification { value: String },

    #[error("Unknown delivery method: {value}\n\n💡 Hint: Use 'API' or 'Batch'")]
    UnknownDelivery { value: String },

    #[error("Unsupported language: {value}\n\n💡 Hint: Supported languages are 'en' and 'pt'")]
    UnknownLanguage { value: String },

    #[error("Health check failed: {url}\nStatus: {status}\n\n💡 Hint: The portal API answered but does not report itself healthy")]
    HealthCheckFailed { url: String, status: u16 },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
