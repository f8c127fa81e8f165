//! mxcraft is a CLI tool to compose MultiversX smart contracts from reusable
//! capability modules and deploy them in a few clicks.

mod cli;
mod config;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use config::CraftConfig;
use mxcraft_core::services::{
    ApiVerifier, DevCompiler, DevSubmitter, DevVerifier, DevWallet, OpenAiGenerator,
    SandboxCompiler, unfence,
};
use mxcraft_core::{
    ArtifactCompiler, CompiledArtifact, ComponentRegistry, DeploymentOrchestrator, Network,
    NetworkProfile, PromptCompletionService, Selection, Verifier,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger.
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    match cli.command {
        Command::Components => list_components(),
        Command::Compose { modules, out } => compose(&modules, out.as_deref()),
        Command::Deploy {
            source,
            network,
            skip_build,
            online_verify,
            config,
        } => deploy(&source, network, skip_build, online_verify, config.as_deref()).await,
        Command::Generate { prompt, model, out } => generate(&prompt, model, out.as_deref()).await,
    }
}

/// Print the module catalog.
fn list_components() -> Result<()> {
    let registry = ComponentRegistry::new();

    let mut table = comfy_table::Table::new();
    table.set_header(["ID", "NAME", "DESCRIPTION"]);
    for module in registry.list() {
        table.add_row([
            module.id.as_str(),
            module.name.as_str(),
            module.description.as_str(),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Compose the selected modules and emit the generated source.
fn compose(module_ids: &[String], out: Option<&Path>) -> Result<()> {
    let registry = ComponentRegistry::new();
    let mut selection = Selection::new();
    for id in module_ids {
        selection.add(registry.get(id)?.clone());
    }

    let assembled = selection.compose();
    tracing::info!(
        modules = assembled.ordered_module_ids.len(),
        "Contract composed"
    );
    write_source(&assembled.generated_source, out)
}

/// Deploy a contract source file through the orchestrator.
async fn deploy(
    source_path: &Path,
    mut network: Network,
    mut skip_build: bool,
    online_verify: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    // A config file provides the deployment defaults when present.
    if let Some(path) = config_path {
        let config = CraftConfig::load_from_file(path)?;
        if let Some(configured) = config.network {
            network = configured;
        }
        if let Some(configured) = config.skip_build {
            skip_build = configured;
        }
    }

    let source = std::fs::read_to_string(source_path).context(format!(
        "Failed to read contract source from {}",
        source_path.display()
    ))?;

    let compiler = if skip_build {
        CliCompiler::Dev(DevCompiler)
    } else {
        CliCompiler::Sandbox(SandboxCompiler::default())
    };
    let verifier = if online_verify {
        CliVerifier::Api(ApiVerifier::new()?)
    } else {
        CliVerifier::Dev(DevVerifier)
    };

    let orchestrator = DeploymentOrchestrator::new(DevWallet, compiler, DevSubmitter, verifier);
    let result = orchestrator.deploy(&source, &network.to_string()).await;

    println!("{}", orchestrator.session());

    match result.error {
        None => Ok(()),
        Some(error) => Err(error.into()),
    }
}

/// Generate contract source from a prompt and emit it.
async fn generate(prompt: &str, model: Option<String>, out: Option<&Path>) -> Result<()> {
    let mut generator = OpenAiGenerator::from_env()?;
    if let Some(model) = model {
        generator = generator.model(model);
    }

    let source = unfence(&generator.generate(prompt).await?);
    write_source(&source, out)
}

fn write_source(source: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, source)
                .context(format!("Failed to write contract to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Contract source written");
        }
        None => println!("{source}"),
    }
    Ok(())
}

/// Compiler selected by the `--skip-build` flag.
enum CliCompiler {
    Sandbox(SandboxCompiler),
    Dev(DevCompiler),
}

impl ArtifactCompiler for CliCompiler {
    async fn compile(&self, source: &str) -> Result<CompiledArtifact> {
        match self {
            CliCompiler::Sandbox(compiler) => compiler.compile(source).await,
            CliCompiler::Dev(compiler) => compiler.compile(source).await,
        }
    }
}

/// Verifier selected by the `--online-verify` flag.
enum CliVerifier {
    Api(ApiVerifier),
    Dev(DevVerifier),
}

impl Verifier for CliVerifier {
    async fn verify(&self, contract_address: &str, network: &NetworkProfile) -> Result<()> {
        match self {
            CliVerifier::Api(verifier) => verifier.verify(contract_address, network).await,
            CliVerifier::Dev(verifier) => verifier.verify(contract_address, network).await,
        }
    }
}
