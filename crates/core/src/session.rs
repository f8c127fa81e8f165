//! Deployment session state: the fixed step catalog, per-step status and the
//! overall outcome of one deployment attempt.

use std::fmt;

use serde::Serialize;

use crate::{Error, NetworkProfile};

/// One of the four fixed, ordered deployment stages.
///
/// The order is load-bearing: each step consumes the output of the previous
/// one (address from connect, artifact from compile, receipt from submit).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    Connect,
    Compile,
    Deploy,
    Verify,
}

/// Descriptive metadata for one deployment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed step catalog, in execution order.
pub const DEPLOYMENT_STEPS: [DeploymentStep; STEP_COUNT] = [
    DeploymentStep {
        id: StepId::Connect,
        title: "Connect Wallet",
        description: "Connect to MultiversX Web Wallet or xPortal App",
    },
    DeploymentStep {
        id: StepId::Compile,
        title: "Compile Contract",
        description: "Optimize and compile Rust code to WASM",
    },
    DeploymentStep {
        id: StepId::Deploy,
        title: "Deploy Contract",
        description: "Send transaction to the MultiversX network",
    },
    DeploymentStep {
        id: StepId::Verify,
        title: "Verify Contract",
        description: "Verify contract source code on the network",
    },
];

const STEP_COUNT: usize = <StepId as strum::EnumCount>::COUNT;

impl StepId {
    fn index(self) -> usize {
        self as usize
    }

    /// Catalog metadata for this step.
    pub fn meta(self) -> &'static DeploymentStep {
        &DEPLOYMENT_STEPS[self.index()]
    }
}

/// Lifecycle status of a single step within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Pending,
    Current,
    Completed,
    Error,
}

/// Overall status of a deployment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OverallStatus {
    Idle,
    Processing,
    Success,
    Error,
}

/// Outcome of one `deploy` call.
///
/// `address`, `explorer_url` and `tx_hash` are populated iff `success`;
/// `error` is populated iff not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentResult {
    pub success: bool,
    pub address: Option<String>,
    pub explorer_url: Option<String>,
    pub tx_hash: Option<String>,
    pub error: Option<Error>,
}

impl DeploymentResult {
    pub fn succeeded(address: String, explorer_url: String, tx_hash: String) -> Self {
        Self {
            success: true,
            address: Some(address),
            explorer_url: Some(explorer_url),
            tx_hash: Some(tx_hash),
            error: None,
        }
    }

    pub fn failed(error: Error) -> Self {
        Self {
            success: false,
            address: None,
            explorer_url: None,
            tx_hash: None,
            error: Some(error),
        }
    }
}

/// The mutable record of one deployment attempt.
///
/// Created fresh on every `deploy` call, mutated exclusively by the
/// orchestrator run that created it, and observed by callers through watch
/// snapshots. While `overall` is `processing`, exactly one step is `current`;
/// once a step fails, every later step stays `pending` for the rest of the
/// session.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentSession {
    pub network: Option<&'static NetworkProfile>,
    pub overall: OverallStatus,
    steps: [StepStatus; STEP_COUNT],
    pub current_step: Option<StepId>,
    pub error_message: Option<String>,
    pub result: Option<DeploymentResult>,
    /// Token identifying the run that owns this session. Updates from a
    /// superseded run are dropped by the orchestrator.
    #[serde(skip)]
    pub(crate) run: u64,
}

impl DeploymentSession {
    /// A session with no deployment in progress.
    pub fn idle() -> Self {
        Self {
            network: None,
            overall: OverallStatus::Idle,
            steps: [StepStatus::Pending; STEP_COUNT],
            current_step: None,
            error_message: None,
            result: None,
            run: 0,
        }
    }

    /// A fresh session for a run that is about to execute its first step.
    pub(crate) fn started(network: &'static NetworkProfile, run: u64) -> Self {
        Self {
            network: Some(network),
            overall: OverallStatus::Processing,
            run,
            ..Self::idle()
        }
    }

    /// Status of one step.
    pub fn step(&self, id: StepId) -> StepStatus {
        self.steps[id.index()]
    }

    pub(crate) fn begin_step(&mut self, id: StepId) {
        self.steps[id.index()] = StepStatus::Current;
        self.current_step = Some(id);
    }

    pub(crate) fn complete_step(&mut self, id: StepId) {
        self.steps[id.index()] = StepStatus::Completed;
    }

    pub(crate) fn fail(&mut self, id: StepId, error: &Error) {
        self.steps[id.index()] = StepStatus::Error;
        self.overall = OverallStatus::Error;
        self.error_message = Some(error.to_string());
        self.current_step = None;
    }

    pub(crate) fn succeed(&mut self, result: DeploymentResult) {
        self.overall = OverallStatus::Success;
        self.result = Some(result);
        self.current_step = None;
    }
}

// -- Display implementation for printing step reports --

impl fmt::Display for DeploymentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.network {
            Some(network) => {
                writeln!(f, "Deployment status: {} ({})", self.overall, network.display_name)?
            }
            None => writeln!(f, "Deployment status: {}", self.overall)?,
        }

        for step in &DEPLOYMENT_STEPS {
            writeln!(
                f,
                "  {} {:<18} {}",
                status_icon(self.step(step.id)),
                step.title,
                step.description
            )?;
        }

        if let Some(ref message) = self.error_message {
            writeln!(f, "error: {}", message)?;
        }

        if let Some(ref result) = self.result {
            if let (Some(address), Some(explorer_url)) = (&result.address, &result.explorer_url) {
                writeln!(f, "contract: {} ({})", address, explorer_url)?;
            }
            if let Some(ref tx_hash) = result.tx_hash {
                writeln!(f, "tx: {}", tx_hash)?;
            }
        }

        Ok(())
    }
}

fn status_icon(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Pending => "[    ]",
        StepStatus::Current => "[ >> ]",
        StepStatus::Completed => "[ ok ]",
        StepStatus::Error => "[FAIL]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Network;
    use strum::IntoEnumIterator;

    #[test]
    fn test_catalog_matches_step_order() {
        let ids: Vec<StepId> = DEPLOYMENT_STEPS.iter().map(|step| step.id).collect();
        let expected: Vec<StepId> = StepId::iter().collect();
        assert_eq!(ids, expected);
        assert_eq!(
            ids,
            [StepId::Connect, StepId::Compile, StepId::Deploy, StepId::Verify]
        );
    }

    #[test]
    fn test_idle_session_has_all_steps_pending() {
        let session = DeploymentSession::idle();
        assert_eq!(session.overall, OverallStatus::Idle);
        for id in StepId::iter() {
            assert_eq!(session.step(id), StepStatus::Pending);
        }
        assert!(session.current_step.is_none());
        assert!(session.result.is_none());
    }

    #[test]
    fn test_single_current_step_while_processing() {
        let mut session = DeploymentSession::started(Network::Testnet.profile(), 1);
        session.begin_step(StepId::Connect);
        session.complete_step(StepId::Connect);
        session.begin_step(StepId::Compile);

        let current: Vec<StepId> = StepId::iter()
            .filter(|id| session.step(*id) == StepStatus::Current)
            .collect();
        assert_eq!(current, [StepId::Compile]);
        assert_eq!(session.current_step, Some(StepId::Compile));
    }

    #[test]
    fn test_failed_step_freezes_later_steps() {
        let mut session = DeploymentSession::started(Network::Testnet.profile(), 1);
        session.begin_step(StepId::Connect);
        session.complete_step(StepId::Connect);
        session.begin_step(StepId::Compile);
        session.fail(StepId::Compile, &Error::Compile("bad syntax".to_string()));

        assert_eq!(session.overall, OverallStatus::Error);
        assert_eq!(session.step(StepId::Connect), StepStatus::Completed);
        assert_eq!(session.step(StepId::Compile), StepStatus::Error);
        assert_eq!(session.step(StepId::Deploy), StepStatus::Pending);
        assert_eq!(session.step(StepId::Verify), StepStatus::Pending);
        assert_eq!(
            session.error_message.as_deref(),
            Some("compilation failed: bad syntax")
        );
        assert!(session.current_step.is_none());
    }

    #[test]
    fn test_display_renders_one_line_per_step() {
        let mut session = DeploymentSession::started(Network::Devnet.profile(), 1);
        session.begin_step(StepId::Connect);

        let rendered = session.to_string();
        assert!(rendered.contains("MultiversX Devnet"));
        for step in &DEPLOYMENT_STEPS {
            assert_eq!(rendered.matches(step.title).count(), 1);
        }
        assert_eq!(rendered.matches("[ >> ]").count(), 1);
    }

    #[test]
    fn test_step_id_keys_round_trip() {
        for id in StepId::iter() {
            let key = id.to_string();
            let parsed: StepId = key.parse().unwrap();
            assert_eq!(parsed, id);
        }
        assert_eq!(StepId::Deploy.to_string(), "deploy");
    }
}
