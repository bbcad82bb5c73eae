use super::signing::SigningPlan;
use crate::config::PomConfig;
use crate::error::DataGenError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Library,
    Sources,
    Documentation,
}

impl ArtifactKind {
    /// Maven classifier the publishing platform expects for this kind.
    pub fn classifier(self) -> Option<&'static str> {
        match self {
            ArtifactKind::Library => None,
            ArtifactKind::Sources => Some("sources"),
            ArtifactKind::Documentation => Some("javadoc"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactEntry {
    pub kind: ArtifactKind,
    /// Local file to upload
    pub path: PathBuf,
    /// Name of the file in the repository
    pub remote_name: String,
    /// File size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the file
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicationManifest {
    /// Version of the manifest format
    pub format_version: u32,
    pub group: String,
    pub artifact: String,
    pub version: String,
    /// Target repository, release or snapshot depending on the version
    pub repository_url: String,
    pub credentials_configured: bool,
    pub pom: PomConfig,
    pub artifacts: Vec<ArtifactEntry>,
    pub signing: SigningPlan,
}

impl PublicationManifest {
    pub const FORMAT_VERSION: u32 = 1;

    pub fn save_to_file(&self, path: &Path) -> Result<(), DataGenError> {
        let json = serde_json::to_string_pretty(self).map_err(|e| DataGenError::ManifestSave {
            path: path.to_path_buf(),
            reason: format!("JSON serialization failed: {}", e),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DataGenError::ManifestSave {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(path, json).map_err(|e| DataGenError::ManifestSave {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, DataGenError> {
        let content = std::fs::read_to_string(path).map_err(|e| DataGenError::ManifestLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| DataGenError::ManifestLoad {
            path: path.to_path_buf(),
            reason: format!("JSON parsing failed: {}", e),
        })
    }
}

pub fn remote_name(artifact: &str, version: &str, kind: ArtifactKind, local: &Path) -> String {
    let extension = local
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| "jar".to_string());
    match kind.classifier() {
        Some(classifier) => format!("{artifact}-{version}-{classifier}.{extension}"),
        None => format!("{artifact}-{version}.{extension}"),
    }
}

/// Streams the file through SHA-256, returning its size and hex digest.
pub fn checksum_file(path: &Path) -> Result<(u64, String), DataGenError> {
    let mut file = std::fs::File::open(path).map_err(|e| DataGenError::ArtifactMissing {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let mut hasher = Sha256::new();
    let size = std::io::copy(&mut file, &mut hasher)?;
    Ok((size, hex::encode(hasher.finalize())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_matches_known_digest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.jar");
        std::fs::write(&path, b"abc").unwrap();

        let (size, digest) = checksum_file(&path).unwrap();

        assert_eq!(size, 3);
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_checksum_of_missing_file_is_artifact_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = checksum_file(&dir.path().join("absent.jar"));

        assert!(matches!(result, Err(DataGenError::ArtifactMissing { .. })));
    }

    #[test]
    fn test_remote_names_follow_classifiers() {
        let local = Path::new("build/libs/whatever.jar");

        assert_eq!(
            remote_name("data", "1.21.4-dev", ArtifactKind::Library, local),
            "data-1.21.4-dev.jar"
        );
        assert_eq!(
            remote_name("data", "1.21.4-dev", ArtifactKind::Sources, local),
            "data-1.21.4-dev-sources.jar"
        );
        assert_eq!(
            remote_name("data", "1.21.4-dev", ArtifactKind::Documentation, local),
            "data-1.21.4-dev-javadoc.jar"
        );
    }
}
