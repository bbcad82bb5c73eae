use crate::fetch::FetchOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub project: ProjectConfig,
    #[serde(default)]
    pub eula: EulaConfig,
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub downloads: Vec<DownloadDef>,
    #[serde(default)]
    pub fetch: FetchOptions,
    pub publishing: PublishingConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub group: String,
    pub artifact: String,
    /// Version used when no tag override is present; published as `<base_version>-dev`.
    pub base_version: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EulaConfig {
    #[serde(default = "default_eula_file")]
    pub file: PathBuf,
    #[serde(default)]
    pub accepted: bool,
}

impl Default for EulaConfig {
    fn default() -> Self {
        Self {
            file: default_eula_file(),
            accepted: false,
        }
    }
}

fn default_eula_file() -> PathBuf {
    PathBuf::from("eula.txt")
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub program: PathBuf,
    /// Arguments placed before the output directory.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_generator_output_dir")]
    pub output_dir: PathBuf,
}

fn default_generator_output_dir() -> PathBuf {
    PathBuf::from("src/main/resources")
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DownloadDef {
    pub destination: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PublishingConfig {
    pub repository: RepositoryConfig,
    pub artifacts: ArtifactsConfig,
    pub pom: PomConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RepositoryConfig {
    pub url: String,
    pub snapshot_url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactsConfig {
    pub library: PathBuf,
    pub sources: PathBuf,
    pub documentation: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PomConfig {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub licenses: Vec<LicenseDef>,
    #[serde(default)]
    pub developers: Vec<DeveloperDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_management: Option<SystemLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ci_management: Option<SystemLink>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LicenseDef {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeveloperDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SystemLink {
    pub system: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScmDef {
    pub connection: String,
    pub developer_connection: String,
    pub url: String,
    #[serde(default = "default_scm_tag")]
    pub tag: String,
}

fn default_scm_tag() -> String {
    "HEAD".to_string()
}
