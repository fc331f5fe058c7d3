mod run;

use std::path::PathBuf;

use affinity_core::{AppConfig, PipelineMode};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::run::RunOutcome;

#[derive(Debug, Parser)]
#[command(name = "affinity-cli")]
#[command(about = "Builds the Aura affinity business directory from Google Places")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every listed location and write the directory CSV.
    Run(RunArgs),
    /// Print the category assigned to a name and type tags.
    Categorize {
        #[arg(long)]
        name: String,
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
    },
    /// Print the translation language used for a country.
    Languages {
        #[arg(long)]
        country: String,
    },
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Overrides `AFFINITY_MODE`.
    #[arg(long)]
    mode: Option<PipelineMode>,
    #[arg(long)]
    cities: Option<PathBuf>,
    #[arg(long)]
    locklist: Option<PathBuf>,
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    timestamp: Option<PathBuf>,
}

impl RunArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(path) = self.cities {
            config.city_list_path = path;
        }
        if let Some(path) = self.locklist {
            config.locklist_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        if let Some(path) = self.timestamp {
            config.timestamp_path = path;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = affinity_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Categorize { name, types }) => {
            println!("{}", affinity_core::categorize(&types, &name));
        }
        Some(Commands::Languages { country }) => {
            println!("{}", affinity_core::language_for_country(&country));
        }
        Some(Commands::Run(args)) => {
            args.apply(&mut config);
            run_command(&config).await?;
        }
        None => run_command(&config).await?,
    }

    Ok(())
}

async fn run_command(config: &AppConfig) -> anyhow::Result<()> {
    match run::run_directory(config).await? {
        RunOutcome::MissingCredential => {
            anyhow::bail!("GOOGLE_API_KEY must be set to run the directory pipeline")
        }
        RunOutcome::NoLocations | RunOutcome::NoData => {}
        RunOutcome::Written { rows } => {
            println!("wrote {rows} businesses to {}", config.output_path.display());
        }
    }
    Ok(())
}
