mod manifest;
mod signing;

pub use manifest::{
    ArtifactEntry, ArtifactKind, PublicationManifest, checksum_file, remote_name,
};
pub use signing::{RepositoryCredentials, SigningPlan};

use crate::config::Config;
use crate::environment::Environment;
use crate::error::DataGenError;
use std::path::Path;

/// Tag override when present, otherwise a development build of the base version.
pub fn resolve_version(base_version: &str, env: &Environment) -> String {
    match env.tag_version.as_deref().map(str::trim) {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => format!("{base_version}-dev"),
    }
}

pub fn is_snapshot(version: &str) -> bool {
    version.ends_with("-SNAPSHOT")
}

/// Validates signing and credentials, checksums the packaged artifacts and
/// describes the publication for the external publishing platform.
///
/// Signing is validated before any artifact is touched.
pub fn plan_publication(
    project_root: &Path,
    config: &Config,
    env: &Environment,
) -> Result<PublicationManifest, DataGenError> {
    let signing = SigningPlan::from_environment(env)?;
    let credentials = RepositoryCredentials::from_environment(env)?;
    if credentials.is_none() {
        tracing::warn!("No repository credentials configured; upload will require them");
    }

    let version = resolve_version(&config.project.base_version, env);
    let repository = &config.publishing.repository;
    let repository_url = if is_snapshot(&version) {
        repository.snapshot_url.clone()
    } else {
        repository.url.clone()
    };
    tracing::info!(version = %version, repository = %repository_url, "Planning publication");

    let artifacts_config = &config.publishing.artifacts;
    let mut artifacts = Vec::new();
    for (kind, relative) in [
        (ArtifactKind::Library, &artifacts_config.library),
        (ArtifactKind::Sources, &artifacts_config.sources),
        (ArtifactKind::Documentation, &artifacts_config.documentation),
    ] {
        let path = project_root.join(relative);
        let (size, sha256) = checksum_file(&path)?;
        tracing::debug!(path = %path.display(), size, sha256 = %sha256, "Checksummed artifact");

        artifacts.push(ArtifactEntry {
            kind,
            remote_name: remote_name(&config.project.artifact, &version, kind, &path),
            path,
            size,
            sha256,
        });
    }

    Ok(PublicationManifest {
        format_version: PublicationManifest::FORMAT_VERSION,
        group: config.project.group.clone(),
        artifact: config.project.artifact.clone(),
        version,
        repository_url,
        credentials_configured: credentials.is_some(),
        pom: config.publishing.pom.clone(),
        artifacts,
        signing,
    })
}
