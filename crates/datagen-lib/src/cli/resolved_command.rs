use crate::cli::args::Command;
use crate::cli::params::{DownloadParams, GenerateParams, PublishPlanParams};
use crate::config::{load_config, project_root};
use crate::consent::ConsentSources;
use crate::environment::Environment;
use crate::error::DataGenError;
use crate::fetch::{DownloadSpec, FailurePolicy};
use crate::generator::resolve_output_dir;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Download(DownloadParams),
    Generate(GenerateParams),
    PublishPlan(PublishPlanParams),
}

pub const DEFAULT_MANIFEST_PATH: &str = "build/publication.json";

pub fn resolve_command(
    command: Command,
    environment: &Environment,
) -> Result<ResolvedCommand, DataGenError> {
    match command {
        Command::Download {
            config_path,
            fail_fast,
            parallelism,
        } => {
            let app_config = load_config(&config_path)?;
            let project_root = project_root(Path::new(&config_path))?;
            let spec = DownloadSpec::from_defs(&app_config.downloads)?;

            let mut options = app_config.fetch;
            if fail_fast {
                options.failure_policy = FailurePolicy::FailFast;
            }
            if let Some(parallelism) = parallelism {
                options.parallelism = parallelism;
            }
            if options.parallelism == 0 {
                return Err(DataGenError::CliArgumentValidation {
                    details: "parallelism must be greater than 0.".to_string(),
                });
            }

            Ok(ResolvedCommand::Download(DownloadParams {
                project_root,
                spec,
                options,
            }))
        }
        Command::Generate {
            config_path,
            accept_eula,
        } => {
            let app_config = load_config(&config_path)?;
            let project_root = project_root(Path::new(&config_path))?;
            let consent =
                ConsentSources::resolve(&project_root, &app_config.eula, accept_eula, environment);
            let output_dir = resolve_output_dir(&project_root, &app_config.generator)?;

            Ok(ResolvedCommand::Generate(GenerateParams {
                project_root,
                consent,
                generator: app_config.generator,
                output_dir,
            }))
        }
        Command::PublishPlan {
            config_path,
            output_path,
        } => {
            let app_config = load_config(&config_path)?;
            let project_root = project_root(Path::new(&config_path))?;
            let output_path = output_path
                .map(PathBuf::from)
                .unwrap_or_else(|| project_root.join(DEFAULT_MANIFEST_PATH));

            Ok(ResolvedCommand::PublishPlan(PublishPlanParams {
                project_root,
                app_config,
                environment: environment.clone(),
                output_path,
            }))
        }
    }
}
