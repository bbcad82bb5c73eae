use crate::cli::DownloadParams;
use crate::error::DataGenError;
use crate::fetch::fetch;
use tracing;

pub async fn run_download(params: DownloadParams) -> Result<(), DataGenError> {
    let DownloadParams {
        project_root,
        spec,
        options,
    } = params;

    if spec.is_empty() {
        tracing::warn!("No downloads configured, nothing to do");
        return Ok(());
    }

    tracing::info!(
        "Downloading {} files into {}",
        spec.len(),
        project_root.display()
    );
    let client = reqwest::Client::builder().build()?;
    let report = fetch(&client, &project_root, &spec, options).await;

    tracing::info!(
        "{} of {} downloads succeeded ({} bytes written)",
        report.outcomes.len() - report.failures().count(),
        report.total(),
        report.bytes_written()
    );
    report.into_result()
}
