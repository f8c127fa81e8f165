//! End-to-end tests for mxcraft-core.
//!
//! These tests drive the public API the way the CLI does: compose a module
//! selection, then push the generated source through the deployment pipeline
//! with the simulated collaborator stack.

use anyhow::Result;
use mxcraft_core::services::{DevCompiler, DevSubmitter, DevVerifier, DevWallet, dev_stack};
use mxcraft_core::{
    CompiledArtifact, ComponentRegistry, DeploymentOrchestrator, Error, Network, NetworkProfile,
    OverallStatus, Selection, StepId, StepStatus, SubmitReceipt, Submitter,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn compose_source(ids: &[&str]) -> String {
    let registry = ComponentRegistry::new();
    let mut selection = Selection::new();
    for id in ids {
        selection.add(registry.get(id).unwrap().clone());
    }
    selection.compose().generated_source
}

#[tokio::test]
async fn test_compose_then_deploy_succeeds() {
    init_tracing();
    let source = compose_source(&["erc20", "access"]);
    let orchestrator = dev_stack();

    let result = orchestrator.deploy(&source, "devnet").await;
    assert!(result.success, "deployment failed: {:?}", result.error);

    let address = result.address.expect("deployed contract address");
    assert!(address.starts_with("erd1"));
    assert_eq!(
        result.explorer_url.as_deref(),
        Some(format!("https://devnet-explorer.multiversx.com/accounts/{address}").as_str())
    );
    assert_eq!(result.tx_hash.expect("transaction hash").len(), 64);

    let session = orchestrator.session();
    assert_eq!(session.overall, OverallStatus::Success);
    for step in [StepId::Connect, StepId::Compile, StepId::Deploy, StepId::Verify] {
        assert_eq!(session.step(step), StepStatus::Completed);
    }
}

#[tokio::test]
async fn test_placeholder_contract_is_deployable() {
    init_tracing();
    let source = compose_source(&[]);
    assert!(source.contains("pub trait EmptyContract"));

    let result = dev_stack().deploy(&source, "testnet").await;
    assert!(result.success);
}

struct RejectingSubmitter;

impl Submitter for RejectingSubmitter {
    async fn submit(
        &self,
        _artifact: &CompiledArtifact,
        _sender: &str,
        _network: &NetworkProfile,
    ) -> Result<SubmitReceipt> {
        anyhow::bail!("insufficient funds for deployment")
    }
}

#[tokio::test]
async fn test_submit_failure_surfaces_the_failing_step() {
    init_tracing();
    let source = compose_source(&["nft"]);
    let orchestrator =
        DeploymentOrchestrator::new(DevWallet, DevCompiler, RejectingSubmitter, DevVerifier);

    let result = orchestrator.deploy(&source, "testnet").await;
    assert!(!result.success);
    assert_eq!(
        result.error,
        Some(Error::Submit("insufficient funds for deployment".to_string()))
    );

    let session = orchestrator.session();
    assert_eq!(session.overall, OverallStatus::Error);
    assert_eq!(session.step(StepId::Connect), StepStatus::Completed);
    assert_eq!(session.step(StepId::Compile), StepStatus::Completed);
    assert_eq!(session.step(StepId::Deploy), StepStatus::Error);
    assert_eq!(session.step(StepId::Verify), StepStatus::Pending);
    assert_eq!(
        session.error_message.as_deref(),
        Some("deployment failed: insufficient funds for deployment")
    );
}

#[tokio::test]
async fn test_reset_then_redeploy() {
    init_tracing();
    let source = compose_source(&["meta-tx"]);
    let orchestrator =
        DeploymentOrchestrator::new(DevWallet, DevCompiler, RejectingSubmitter, DevVerifier);

    assert!(!orchestrator.deploy(&source, "testnet").await.success);
    assert_eq!(orchestrator.session().overall, OverallStatus::Error);

    orchestrator.reset();
    let session = orchestrator.session();
    assert_eq!(session.overall, OverallStatus::Idle);
    for step in [StepId::Connect, StepId::Compile, StepId::Deploy, StepId::Verify] {
        assert_eq!(session.step(step), StepStatus::Pending);
    }

    // Redeploying on the same instance starts an entirely fresh session;
    // there is no partial resume, so connect and compile run again before
    // the submitter fails a second time.
    let result = orchestrator.deploy(&source, "devnet").await;
    assert!(!result.success);

    let session = orchestrator.session();
    assert_eq!(session.overall, OverallStatus::Error);
    assert_eq!(session.network.unwrap().key, Network::Devnet);
    assert_eq!(session.step(StepId::Connect), StepStatus::Completed);
    assert_eq!(session.step(StepId::Compile), StepStatus::Completed);
    assert_eq!(session.step(StepId::Deploy), StepStatus::Error);
}

#[tokio::test]
async fn test_session_report_renders_after_failure() {
    init_tracing();
    let source = compose_source(&["access"]);
    let orchestrator =
        DeploymentOrchestrator::new(DevWallet, DevCompiler, RejectingSubmitter, DevVerifier);

    orchestrator.deploy(&source, "mainnet").await;
    let report = orchestrator.session().to_string();

    assert!(report.contains("MultiversX Mainnet"));
    assert!(report.contains("[FAIL] Deploy Contract"));
    assert!(report.contains("insufficient funds"));
}
