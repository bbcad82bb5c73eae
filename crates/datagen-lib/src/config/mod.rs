mod loader;
mod model;

pub use loader::load_config;
pub use model::{
    ArtifactsConfig, Config, DeveloperDef, DownloadDef, EulaConfig, GeneratorConfig, LicenseDef,
    PomConfig, ProjectConfig, PublishingConfig, RepositoryConfig, ScmDef, SystemLink,
};

use std::path::{Path, PathBuf};

/// Directory that relative paths in the configuration are resolved against.
pub fn project_root(config_path: &Path) -> Result<PathBuf, crate::error::DataGenError> {
    let parent = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::path::absolute(parent).map_err(|e| crate::error::DataGenError::ProjectRoot {
        path: config_path.to_path_buf(),
        reason: e.to_string(),
    })
}
