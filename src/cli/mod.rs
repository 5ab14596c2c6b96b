pub mod build;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "bmad-bundler",
    about = "Compiles BMad agent and team definitions into single-file web bundles",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Source root containing bmad-core/, common/ and expansion-packs/
    #[arg(long, env = "BMAD_SOURCE", global = true, default_value = ".")]
    pub source: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build web bundles for all agents and teams, core and expansion packs
    Build {
        /// Output directory for compiled bundles
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Only build agent bundles
        #[arg(long, conflicts_with = "teams_only")]
        agents_only: bool,

        /// Only build team bundles
        #[arg(long, conflicts_with = "agents_only")]
        teams_only: bool,

        /// Skip expansion packs
        #[arg(long, conflicts_with = "expansions_only")]
        core_only: bool,

        /// Skip the core namespace, build expansion packs only
        #[arg(long, conflicts_with = "core_only")]
        expansions_only: bool,

        /// Inject an activation instruction pinning the response language
        #[arg(long)]
        language: Option<String>,
    },

    /// Build a single agent bundle
    BuildAgent {
        /// Agent id (file stem under agents/)
        id: String,

        /// Build inside this expansion pack instead of core
        #[arg(long)]
        pack: Option<String>,

        /// Output directory for the compiled bundle
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Inject an activation instruction pinning the response language
        #[arg(long)]
        language: Option<String>,
    },

    /// Build a single team bundle
    BuildTeam {
        /// Team id (file stem under agent-teams/)
        id: String,

        /// Build inside this expansion pack instead of core
        #[arg(long)]
        pack: Option<String>,

        /// Output directory for the compiled bundle
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Inject an activation instruction pinning the response language
        #[arg(long)]
        language: Option<String>,
    },

    /// List buildable targets
    #[command(subcommand)]
    List(ListSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ListSubcommand {
    /// List agent ids, core first, then per expansion pack
    Agents,

    /// List team ids, core first, then per expansion pack
    Teams,

    /// List expansion pack names
    Packs,
}
