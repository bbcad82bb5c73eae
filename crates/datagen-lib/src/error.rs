use crate::fetch::{DownloadSpecError, FetchError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataGenError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid download list: {0}")]
    DownloadSpec(#[from] DownloadSpecError),

    #[error("{failed} of {total} downloads failed{}", describe_failures(.skipped, .failures))]
    DownloadsFailed {
        failed: usize,
        skipped: usize,
        total: usize,
        failures: Vec<FetchError>,
    },

    #[error(
        "Data generation has been halted as the EULA has not been signed. \
         Create {} containing 'eula=true', pass --accept-eula, or set EULA=true",
        .consent_file.display()
    )]
    ConsentNotGranted { consent_file: PathBuf },

    #[error("Failed to launch data generator {}: {reason}", .program.display())]
    GeneratorLaunch { program: PathBuf, reason: String },

    #[error("Data generator {} exited unsuccessfully: {status}", .program.display())]
    GeneratorFailed { program: PathBuf, status: String },

    #[error("Directory creation failed at {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to resolve project root from {path}: {reason}")]
    ProjectRoot { path: PathBuf, reason: String },

    #[error("Signing is required in automated environments but {variable} is not set")]
    SigningKeyMissing { variable: &'static str },

    #[error("Repository credentials are incomplete: {details}")]
    CredentialsIncomplete { details: String },

    #[error("Artifact {path} cannot be read: {reason}")]
    ArtifactMissing { path: PathBuf, reason: String },

    #[error("Failed to save publication manifest to {path}: {reason}")]
    ManifestSave { path: PathBuf, reason: String },

    #[error("Failed to load publication manifest from {path}: {reason}")]
    ManifestLoad { path: PathBuf, reason: String },

    #[error("Invalid command-line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

fn describe_failures(skipped: &usize, failures: &[FetchError]) -> String {
    let mut description = String::new();
    if *skipped > 0 {
        description.push_str(&format!(" ({skipped} not attempted)"));
    }
    for failure in failures {
        description.push_str(&format!("\n  - {failure}"));
    }
    description
}
