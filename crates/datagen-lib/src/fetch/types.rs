use crate::config::DownloadDef;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch {url} into {}: {reason}", .destination.display())]
    NetworkFailure {
        url: Url,
        destination: PathBuf,
        reason: String,
    },

    #[error("Failed to write {} from {url}: {reason}", .path.display())]
    FilesystemFailure {
        path: PathBuf,
        url: Url,
        reason: String,
    },
}

impl FetchError {
    pub(crate) fn network(url: &Url, destination: &Path, reason: impl ToString) -> Self {
        Self::NetworkFailure {
            url: url.clone(),
            destination: destination.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn filesystem(url: &Url, path: &Path, reason: impl ToString) -> Self {
        Self::FilesystemFailure {
            path: path.to_path_buf(),
            url: url.clone(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DownloadSpecError {
    #[error("Destination path must not be empty (url: {url})")]
    EmptyDestination { url: String },

    #[error("Destination {destination} must be a relative path inside the project")]
    OutsideProject { destination: String },

    #[error("Destination {destination} is listed more than once")]
    DuplicateDestination { destination: String },

    #[error("Invalid URL {url} for {destination}: {reason}")]
    InvalidUrl {
        destination: String,
        url: String,
        reason: String,
    },

    #[error("Unsupported URL scheme {scheme} for {destination}; only http and https are fetched")]
    UnsupportedScheme { destination: String, scheme: String },
}

/// Ordered mapping from destination path to source URL.
///
/// Destinations are unique after normalization and stay inside the project
/// root; URLs may repeat. Iteration follows insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadSpec {
    entries: Vec<(PathBuf, Url)>,
}

/// Lexically normalizes a relative destination, dropping `.` and folding `..`.
fn normalize_destination(destination: &str) -> Result<PathBuf, DownloadSpecError> {
    let outside = || DownloadSpecError::OutsideProject {
        destination: destination.to_string(),
    };

    let mut normalized = PathBuf::new();
    for component in Path::new(destination).components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(outside());
                }
            }
            Component::RootDir | Component::Prefix(_) => return Err(outside()),
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(outside());
    }
    Ok(normalized)
}

impl DownloadSpec {
    pub fn new<I, D, U>(pairs: I) -> Result<Self, DownloadSpecError>
    where
        I: IntoIterator<Item = (D, U)>,
        D: Into<String>,
        U: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (destination, url) in pairs {
            let destination = destination.into();
            let url = url.as_ref();
            if destination.trim().is_empty() {
                return Err(DownloadSpecError::EmptyDestination {
                    url: url.to_string(),
                });
            }

            let parsed = Url::parse(url).map_err(|e| DownloadSpecError::InvalidUrl {
                destination: destination.clone(),
                url: url.to_string(),
                reason: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(DownloadSpecError::UnsupportedScheme {
                    destination,
                    scheme: parsed.scheme().to_string(),
                });
            }

            let normalized = normalize_destination(&destination)?;
            entries.push((destination, normalized, parsed));
        }

        if let Some((destination, _, _)) = entries
            .iter()
            .duplicates_by(|(_, normalized, _)| normalized.clone())
            .next()
        {
            return Err(DownloadSpecError::DuplicateDestination {
                destination: destination.clone(),
            });
        }

        Ok(Self {
            entries: entries
                .into_iter()
                .map(|(_, normalized, url)| (normalized, url))
                .collect(),
        })
    }

    pub fn from_defs(defs: &[DownloadDef]) -> Result<Self, DownloadSpecError> {
        Self::new(defs.iter().map(|d| (d.destination.as_str(), d.url.as_str())))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Url)> {
        self.entries.iter().map(|(d, u)| (d.as_path(), u))
    }

    pub fn destinations(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(d, _)| d.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop scheduling entries after the first failure.
    FailFast,
    /// Attempt every entry and report all failures.
    #[default]
    Accumulate,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FetchOptions {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
}

fn default_parallelism() -> usize {
    1
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            parallelism: default_parallelism(),
        }
    }
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub destination: PathBuf,
    pub url: Url,
    /// Number of bytes written on success.
    pub result: Result<u64, FetchError>,
}

#[derive(Debug)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
    /// Entries never attempted because a fail-fast run stopped early.
    pub skipped: usize,
}

impl FetchReport {
    pub fn is_success(&self) -> bool {
        self.skipped == 0 && self.outcomes.iter().all(|o| o.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FetchOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn bytes_written(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len() + self.skipped
    }

    /// Collapses the report into the failures it carries, if any.
    pub fn into_result(self) -> Result<(), crate::error::DataGenError> {
        if self.is_success() {
            return Ok(());
        }

        let total = self.total();
        let skipped = self.skipped;
        let failures: Vec<FetchError> = self
            .outcomes
            .into_iter()
            .filter_map(|o| o.result.err())
            .collect();

        Err(crate::error::DataGenError::DownloadsFailed {
            failed: failures.len(),
            skipped,
            total,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_spec_preserves_order() {
        let spec = DownloadSpec::new([
            ("b/second.json", "https://example.test/2"),
            ("a/first.json", "https://example.test/1"),
        ])
        .unwrap();

        let destinations: Vec<_> = spec.destinations().collect();
        assert_eq!(
            destinations,
            vec![Path::new("b/second.json"), Path::new("a/first.json")]
        );
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn test_download_spec_allows_repeated_urls() {
        let spec = DownloadSpec::new([
            ("one.json", "https://example.test/same"),
            ("two.json", "https://example.test/same"),
        ]);

        assert!(spec.is_ok());
    }

    #[test]
    fn test_download_spec_rejects_duplicate_destinations() {
        let result = DownloadSpec::new([
            ("mappings/sounds.json", "https://example.test/1"),
            ("mappings/sounds.json", "https://example.test/2"),
        ]);

        assert_eq!(
            result,
            Err(DownloadSpecError::DuplicateDestination {
                destination: "mappings/sounds.json".to_string()
            })
        );
    }

    #[test]
    fn test_download_spec_rejects_equivalent_destinations() {
        let result = DownloadSpec::new([
            ("out/a.json", "https://example.test/1"),
            ("./out/a.json", "https://example.test/2"),
        ]);

        assert!(matches!(
            result,
            Err(DownloadSpecError::DuplicateDestination { .. })
        ));

        let result = DownloadSpec::new([
            ("out/a.json", "https://example.test/1"),
            ("out/tmp/../a.json", "https://example.test/2"),
        ]);

        assert!(matches!(
            result,
            Err(DownloadSpecError::DuplicateDestination { .. })
        ));
    }

    #[test]
    fn test_download_spec_normalizes_destinations() {
        let spec = DownloadSpec::new([("./out/tmp/../a.json", "https://example.test/1")]).unwrap();

        assert_eq!(
            spec.destinations().collect::<Vec<_>>(),
            vec![Path::new("out/a.json")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_download_spec_rejects_absolute_destination() {
        let result = DownloadSpec::new([("/etc/sounds.json", "https://example.test/1")]);

        assert!(matches!(
            result,
            Err(DownloadSpecError::OutsideProject { .. })
        ));
    }

    #[test]
    fn test_download_spec_rejects_escaping_destination() {
        for destination in ["../sounds.json", "out/../../sounds.json", "out/.."] {
            let result = DownloadSpec::new([(destination, "https://example.test/1")]);

            assert!(
                matches!(result, Err(DownloadSpecError::OutsideProject { .. })),
                "{destination} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_download_spec_rejects_non_http_schemes() {
        let result = DownloadSpec::new([("sounds.json", "ftp://example.test/sounds.json")]);

        assert!(matches!(
            result,
            Err(DownloadSpecError::UnsupportedScheme { scheme, .. }) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_download_spec_rejects_unparseable_urls() {
        let result = DownloadSpec::new([("sounds.json", "not a url")]);

        assert!(matches!(result, Err(DownloadSpecError::InvalidUrl { .. })));
    }

    #[test]
    fn test_download_spec_rejects_empty_destination() {
        let result = DownloadSpec::new([("  ", "https://example.test/x")]);

        assert!(matches!(
            result,
            Err(DownloadSpecError::EmptyDestination { .. })
        ));
    }

    #[test]
    fn test_fetch_options_deserialize_policy_names() {
        let options: FetchOptions =
            serde_json::from_str(r#"{"failure_policy": "fail_fast"}"#).unwrap();

        assert_eq!(options.failure_policy, FailurePolicy::FailFast);
        assert_eq!(options.parallelism, 1);
    }

    #[test]
    fn test_report_with_skipped_entries_is_not_success() {
        let report = FetchReport {
            outcomes: vec![],
            skipped: 2,
        };

        assert!(!report.is_success());
        assert_eq!(report.total(), 2);
    }
}
