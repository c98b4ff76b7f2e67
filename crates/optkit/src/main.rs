use crate::prelude::*;
use clap::Parser;

mod commands;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Inspect optkit's swallow-to-absence helpers from the command line"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "OPTKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Perform an HTTP request and print the result as an option
    Fetch(crate::commands::fetch::FetchOptions),

    /// Print whether a JSON value counts as defined
    Truthy(crate::commands::truthy::TruthyOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Fetch(options) => crate::commands::fetch::run(options, app.global).await,
        SubCommands::Truthy(options) => crate::commands::truthy::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
