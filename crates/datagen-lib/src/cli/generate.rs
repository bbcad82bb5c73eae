use crate::cli::GenerateParams;
use crate::consent::{check_consent, log_accepted_notice, log_consent_notice};
use crate::error::DataGenError;
use crate::generator::invoke_generator;

pub async fn run_generate(params: GenerateParams) -> Result<(), DataGenError> {
    let GenerateParams {
        project_root,
        consent,
        generator,
        output_dir,
    } = params;

    log_consent_notice(&consent.consent_file);
    if !check_consent(&consent) {
        return Err(DataGenError::ConsentNotGranted {
            consent_file: consent.consent_file,
        });
    }
    log_accepted_notice();

    invoke_generator(&project_root, &generator, &output_dir).await?;

    tracing::info!("Generated data written to {}", output_dir.display());
    Ok(())
}
