use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapper scripts to distinguish between usage errors
/// and failures while inspecting a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable archive, bad configuration, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the inventory engine.
///
/// `NotAnArchive` is a routing decision rather than a failure: callers match
/// on it and treat the input as a no-op. Everything else describes a unit of
/// work (one archive, one nested entry, one probe) that had to be skipped.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("not an archive: {locator}")]
    NotAnArchive { locator: String },

    #[error("failed to read archive: {locator}\nDetails: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed archive: {locator}\nDetails: {source}")]
    Zip {
        locator: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to parse package descriptor: {locator}\nDetails: {details}")]
    Descriptor { locator: String, details: String },

    #[error("probe for {marker} degraded: {details}")]
    ProbeDegraded { marker: String, details: String },

    #[error("delivery queue rejected record for {locator}")]
    QueueSaturated { locator: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: Check the configuration file or agent arguments")]
    Config { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for settings and requests
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl InventoryError {
    pub fn io(locator: impl Into<String>, source: std::io::Error) -> Self {
        InventoryError::Io {
            locator: locator.into(),
            source,
        }
    }

    pub fn zip(locator: impl Into<String>, source: zip::result::ZipError) -> Self {
        InventoryError::Zip {
            locator: locator.into(),
            source,
        }
    }

    pub fn degraded(marker: impl Into<String>, details: impl Into<String>) -> Self {
        InventoryError::ProbeDegraded {
            marker: marker.into(),
            details: details.into(),
        }
    }

    /// True for the routing outcome that callers treat as a silent no-op.
    pub fn is_not_an_archive(&self) -> bool {
        matches!(self, InventoryError::NotAnArchive { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_not_an_archive_is_routing_value() {
        let error = InventoryError::NotAnArchive {
            locator: "/tmp/classes/".to_string(),
        };
        assert!(error.is_not_an_archive());
        assert!(format!("{}", error).contains("/tmp/classes/"));
    }

    #[test]
    fn test_io_error_display() {
        let error = InventoryError::io(
            "/opt/app/lib/missing.jar",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        );
        let display = format!("{}", error);
        assert!(display.contains("failed to read archive"));
        assert!(display.contains("/opt/app/lib/missing.jar"));
        assert!(display.contains("No such file"));
        assert!(!error.is_not_an_archive());
    }

    #[test]
    fn test_config_error_display() {
        let error = InventoryError::Config {
            path: PathBuf::from("runtime-inventory.config.yml"),
            details: "poll_interval_ms must be greater than zero".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration"));
        assert!(display.contains("poll_interval_ms"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = InventoryError::FileWriteError {
            path: PathBuf::from("/test/sbom.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/sbom.json"));
        assert!(display.contains("Permission denied"));
    }
}
