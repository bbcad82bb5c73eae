mod args;
mod download;
mod generate;
mod params;
mod publish_plan;
mod resolved_command;

pub use args::{Args, Command, init_tracing, parse_args};
pub use download::run_download;
pub use generate::run_generate;
pub use params::{DownloadParams, GenerateParams, PublishPlanParams};
pub use publish_plan::run_publish_plan;
pub use resolved_command::{DEFAULT_MANIFEST_PATH, ResolvedCommand, resolve_command};
