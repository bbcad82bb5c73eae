use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum Command {
    Download {
        config_path: String,
        fail_fast: bool,
        parallelism: Option<usize>,
    },
    Generate {
        config_path: String,
        accept_eula: bool,
    },
    PublishPlan {
        config_path: String,
        output_path: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "datagen",
    version,
    about = "Fetch mappings, run the game data generator behind its EULA gate and plan data publications"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every configured mapping file into the project
    Download {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "datagen.yaml"
        )]
        config: String,

        #[arg(
            long = "fail-fast",
            help = "Stop at the first failed download instead of attempting all of them"
        )]
        fail_fast: bool,

        #[arg(
            long = "parallelism",
            value_name = "N",
            help = "Maximum number of simultaneous downloads (overrides fetch.parallelism)"
        )]
        parallelism: Option<usize>,
    },

    /// Check EULA consent and run the data generator
    Generate {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "datagen.yaml"
        )]
        config: String,

        #[arg(
            long = "accept-eula",
            help = "Accept the Minecraft EULA for this run"
        )]
        accept_eula: bool,
    },

    /// Validate signing and credentials, checksum artifacts and write the publication manifest
    #[command(name = "publish-plan", visible_alias = "publish_plan")]
    PublishPlan {
        #[arg(
            short = 'c',
            long = "config",
            value_name = "FILE",
            help = "Sets a custom config file",
            default_value = "datagen.yaml"
        )]
        config: String,

        #[arg(
            short = 'o',
            long = "output",
            value_name = "FILE",
            help = "Sets the manifest path (default: <project root>/build/publication.json)"
        )]
        output: Option<String>,
    },
}

pub fn init_tracing(log_level: Level) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    if let Ok(directive) = "hyper_util=warn".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(filter)
        .init();
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    init_tracing(log_level);

    let command = match cli.command {
        CliCommand::Download {
            config,
            fail_fast,
            parallelism,
        } => Command::Download {
            config_path: config,
            fail_fast,
            parallelism,
        },
        CliCommand::Generate {
            config,
            accept_eula,
        } => Command::Generate {
            config_path: config,
            accept_eula,
        },
        CliCommand::PublishPlan { config, output } => Command::PublishPlan {
            config_path: config,
            output_path: output,
        },
    };

    Args { command, log_level }
}
