use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mxcraft_core::Network;
use tracing::level_filters::LevelFilter;

/// The default deployment target.
const DEFAULT_NETWORK: Network = Network::Testnet;

#[derive(Parser)]
#[command(name = "mxcraft")]
#[command(
    author,
    version,
    about = "Compose MultiversX smart contracts from reusable modules and deploy them"
)]
pub struct Cli {
    /// The verbosity level.
    #[arg(short, long, env = "MXCRAFT_VERBOSITY", default_value_t = LevelFilter::INFO, global = true)]
    pub verbosity: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available contract modules.
    Components,

    /// Compose modules into a single contract source unit.
    Compose {
        /// Module ids, in the order they should be composed.
        #[arg(required = true)]
        modules: Vec<String>,

        /// Write the generated source to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Deploy a contract source file to a network.
    Deploy {
        /// Path to the contract source file.
        source: PathBuf,

        /// The target network.
        #[arg(short, long, env = "MXCRAFT_NETWORK", default_value_t = DEFAULT_NETWORK)]
        network: Network,

        /// Skip the toolchain build and deploy a placeholder artifact.
        #[arg(long, env = "MXCRAFT_SKIP_BUILD")]
        skip_build: bool,

        /// Verify the deployed account against the network API instead of
        /// the offline address check.
        #[arg(long, env = "MXCRAFT_ONLINE_VERIFY")]
        online_verify: bool,

        /// Path to an existing Mxcraft.toml configuration file to load.
        ///
        /// When provided, deployment defaults come from this file instead of
        /// the CLI arguments.
        #[arg(long, alias = "conf", env = "MXCRAFT_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Generate contract source from a free-form prompt.
    Generate {
        /// What the contract should do.
        prompt: String,

        /// Completion model override.
        #[arg(long, env = "MXCRAFT_MODEL")]
        model: Option<String>,

        /// Write the generated source to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
