use crate::config::GeneratorConfig;
use crate::error::DataGenError;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Absolute resource directory the generator writes into.
pub fn resolve_output_dir(
    project_root: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf, DataGenError> {
    let joined = project_root.join(&config.output_dir);
    std::path::absolute(&joined).map_err(|e| DataGenError::GeneratorLaunch {
        program: config.program.clone(),
        reason: format!("cannot resolve output directory {}: {}", joined.display(), e),
    })
}

/// Runs `program [args...] <output_dir>` from the project root.
///
/// Callers must have passed the consent gate first.
pub async fn invoke_generator(
    project_root: &Path,
    config: &GeneratorConfig,
    output_dir: &Path,
) -> Result<(), DataGenError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| DataGenError::DirectoryCreation {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        })?;

    tracing::info!(
        program = %config.program.display(),
        output_dir = %output_dir.display(),
        "Running data generator"
    );

    let status = Command::new(&config.program)
        .args(&config.args)
        .arg(output_dir)
        .current_dir(project_root)
        .status()
        .await
        .map_err(|e| DataGenError::GeneratorLaunch {
            program: config.program.clone(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(DataGenError::GeneratorFailed {
            program: config.program.clone(),
            status: status.to_string(),
        });
    }

    tracing::info!("Data generator finished");
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str) -> GeneratorConfig {
        GeneratorConfig {
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string()],
            output_dir: PathBuf::from("generated"),
        }
    }

    #[tokio::test]
    async fn test_generator_receives_output_dir_as_last_argument() {
        let dir = tempfile::tempdir().unwrap();
        // With `sh -c`, the first trailing argument becomes $0.
        let config = shell(r#"printf '%s' "$0" > "$0/received.txt""#);
        let output_dir = resolve_output_dir(dir.path(), &config).unwrap();

        invoke_generator(dir.path(), &config, &output_dir)
            .await
            .unwrap();

        let received = std::fs::read_to_string(output_dir.join("received.txt")).unwrap();
        assert_eq!(PathBuf::from(received), output_dir);
        assert!(output_dir.is_absolute());
    }

    #[tokio::test]
    async fn test_generator_runs_from_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let config = shell(r#"pwd > "$0/cwd.txt""#);
        let output_dir = resolve_output_dir(dir.path(), &config).unwrap();

        invoke_generator(dir.path(), &config, &output_dir)
            .await
            .unwrap();

        let cwd = std::fs::read_to_string(output_dir.join("cwd.txt")).unwrap();
        assert_eq!(
            std::fs::canonicalize(cwd.trim()).unwrap(),
            std::fs::canonicalize(dir.path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = shell("exit 3");
        let output_dir = resolve_output_dir(dir.path(), &config).unwrap();

        let result = invoke_generator(dir.path(), &config, &output_dir).await;

        assert!(matches!(result, Err(DataGenError::GeneratorFailed { .. })));
    }

    #[tokio::test]
    async fn test_missing_program_is_launch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            program: PathBuf::from("/nonexistent/datagen-generator-binary"),
            args: vec![],
            output_dir: PathBuf::from("generated"),
        };
        let output_dir = resolve_output_dir(dir.path(), &config).unwrap();

        let result = invoke_generator(dir.path(), &config, &output_dir).await;

        assert!(matches!(result, Err(DataGenError::GeneratorLaunch { .. })));
    }
}
