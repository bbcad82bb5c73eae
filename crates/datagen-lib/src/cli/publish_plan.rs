use crate::cli::PublishPlanParams;
use crate::error::DataGenError;
use crate::publish::plan_publication;

pub async fn run_publish_plan(params: PublishPlanParams) -> Result<(), DataGenError> {
    let PublishPlanParams {
        project_root,
        app_config,
        environment,
        output_path,
    } = params;

    tracing::info!("Planning publication for {}", app_config.project.artifact);
    let manifest = plan_publication(&project_root, &app_config, &environment)?;

    tracing::info!("Saving publication manifest to {}", output_path.display());
    manifest.save_to_file(&output_path)?;

    tracing::info!(
        "Publication of {}:{}:{} planned ({} artifacts, signing {})",
        manifest.group,
        manifest.artifact,
        manifest.version,
        manifest.artifacts.len(),
        if manifest.signing.will_sign() {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}
