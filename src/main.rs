use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bundler;
mod catalog;
mod cli;
mod error;
mod model;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if cli.verbose {
                    "bmad_bundler=debug"
                } else {
                    "bmad_bundler=info"
                }
                .parse()
                .unwrap()
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Command::Build {
            output,
            agents_only,
            teams_only,
            core_only,
            expansions_only,
            language,
        } => {
            cli::build::run_all(
                &cli.source,
                cli::build::BuildAllArgs {
                    output,
                    agents_only,
                    teams_only,
                    core_only,
                    expansions_only,
                    language,
                },
            )
            .await
        }
        cli::Command::BuildAgent {
            id,
            pack,
            output,
            language,
        } => cli::build::run_agent(&cli.source, id, pack, output, language).await,
        cli::Command::BuildTeam {
            id,
            pack,
            output,
            language,
        } => cli::build::run_team(&cli.source, id, pack, output, language).await,
        cli::Command::List(cmd) => cli::list::run(&cli.source, cmd),
    }
}
