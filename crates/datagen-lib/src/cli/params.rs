use crate::config::{Config, GeneratorConfig};
use crate::consent::ConsentSources;
use crate::environment::Environment;
use crate::fetch::{DownloadSpec, FetchOptions};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub project_root: PathBuf,
    pub spec: DownloadSpec,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub project_root: PathBuf,
    pub consent: ConsentSources,
    pub generator: GeneratorConfig,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PublishPlanParams {
    pub project_root: PathBuf,
    pub app_config: Config,
    pub environment: Environment,
    pub output_path: PathBuf,
}
