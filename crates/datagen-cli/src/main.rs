use datagen_lib::Environment;
use datagen_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_download, run_generate, run_publish_plan,
};
use datagen_lib::error::DataGenError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), DataGenError> {
    color_eyre::install()?;

    let args = parse_args();
    let environment = Environment::from_process();
    let command = resolve_command(args.command, &environment)?;

    match command {
        ResolvedCommand::Download(params) => run_download(params).await?,
        ResolvedCommand::Generate(params) => run_generate(params).await?,
        ResolvedCommand::PublishPlan(params) => run_publish_plan(params).await?,
    }

    Ok(())
}
