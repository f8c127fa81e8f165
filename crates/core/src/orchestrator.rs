//! Step-sequenced deployment state machine.
//!
//! One orchestrator instance drives at most one deployment session at a
//! time through the fixed step order: connect -> compile -> deploy ->
//! verify. Each step awaits its collaborator; the first failure ends the
//! run and leaves every later step untouched. Callers observe the session
//! through [`DeploymentOrchestrator::subscribe`] snapshots and never mutate
//! it themselves.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use tokio::sync::watch;

use crate::session::{DeploymentResult, DeploymentSession, OverallStatus, StepId};
use crate::traits::{ArtifactCompiler, Submitter, Verifier, WalletSession};
use crate::{Error, Network};

pub struct DeploymentOrchestrator<W, C, S, V> {
    wallet: W,
    compiler: C,
    submitter: S,
    verifier: V,
    session: watch::Sender<DeploymentSession>,
    /// Monotonic run counter; a session only accepts updates from the run
    /// that created it, so a superseded run's late updates are dropped.
    runs: AtomicU64,
}

impl<W, C, S, V> DeploymentOrchestrator<W, C, S, V>
where
    W: WalletSession,
    C: ArtifactCompiler,
    S: Submitter,
    V: Verifier,
{
    pub fn new(wallet: W, compiler: C, submitter: S, verifier: V) -> Self {
        Self {
            wallet,
            compiler,
            submitter,
            verifier,
            session: watch::Sender::new(DeploymentSession::idle()),
            runs: AtomicU64::new(0),
        }
    }

    /// Subscribe to session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DeploymentSession> {
        self.session.subscribe()
    }

    /// A snapshot of the current session.
    pub fn session(&self) -> DeploymentSession {
        self.session.borrow().clone()
    }

    /// Deploy `source` to the network identified by `network_key`.
    ///
    /// Always resolves to a complete [`DeploymentResult`]. Validation
    /// failures (`EmptySource`, `UnknownNetwork`, `Busy`) are rejected
    /// before any collaborator is contacted and leave prior session state
    /// untouched. There is no automatic retry: a failed run must be
    /// restarted with a fresh `deploy` call.
    pub async fn deploy(&self, source: &str, network_key: &str) -> DeploymentResult {
        if source.trim().is_empty() {
            return DeploymentResult::failed(Error::EmptySource);
        }

        let profile = match Network::resolve(network_key) {
            Ok(profile) => profile,
            Err(error) => return DeploymentResult::failed(error),
        };

        // Claim the session. The check and the replacement happen under the
        // watch lock, so two concurrent calls cannot both start.
        let run = self.runs.fetch_add(1, Ordering::Relaxed) + 1;
        let mut started = false;
        self.session.send_if_modified(|session| {
            if session.overall != OverallStatus::Processing {
                *session = DeploymentSession::started(profile, run);
                started = true;
            }
            started
        });
        if !started {
            tracing::warn!(network = %profile.key, "Deployment rejected, session already processing");
            return DeploymentResult::failed(Error::Busy);
        }

        tracing::info!(network = %profile.key, "Starting deployment...");

        let sender = match self
            .run_step(run, StepId::Connect, self.wallet.connect(profile))
            .await
        {
            Ok(address) => address,
            Err(error) => return DeploymentResult::failed(error),
        };
        tracing::info!(address = %sender, "Wallet connected");

        let artifact = match self
            .run_step(run, StepId::Compile, self.compiler.compile(source))
            .await
        {
            Ok(artifact) => artifact,
            Err(error) => return DeploymentResult::failed(error),
        };
        tracing::info!(
            sha256 = %artifact.sha256,
            size_bytes = artifact.wasm.len(),
            "Contract compiled"
        );

        let submit = async {
            let receipt = self.submitter.submit(&artifact, &sender, profile).await?;
            if receipt.contract_address.trim().is_empty() {
                return Err(anyhow::Error::new(Error::Unexpected(
                    "submitter returned an empty contract address".to_string(),
                )));
            }
            Ok(receipt)
        };
        let receipt = match self.run_step(run, StepId::Deploy, submit).await {
            Ok(receipt) => receipt,
            Err(error) => return DeploymentResult::failed(error),
        };
        tracing::info!(
            address = %receipt.contract_address,
            tx_hash = %receipt.tx_hash,
            "Deployment transaction sent"
        );

        if let Err(error) = self
            .run_step(
                run,
                StepId::Verify,
                self.verifier.verify(&receipt.contract_address, profile),
            )
            .await
        {
            return DeploymentResult::failed(error);
        }

        let result = DeploymentResult::succeeded(
            receipt.contract_address.clone(),
            profile.account_url(&receipt.contract_address),
            receipt.tx_hash,
        );
        self.update(run, |session| session.succeed(result.clone()));
        tracing::info!(address = %receipt.contract_address, "Deployment complete");
        result
    }

    /// Reset the session to idle with all steps pending.
    ///
    /// Callable from any state. An in-flight run keeps executing its
    /// collaborators (their side effects cannot be retracted), but its
    /// remaining status updates are dropped.
    pub fn reset(&self) {
        tracing::debug!("Resetting deployment session");
        self.session.send_replace(DeploymentSession::idle());
    }

    /// Execute one step: mark it current, await its collaborator, then mark
    /// it completed or record the first failure and end the run.
    async fn run_step<T>(
        &self,
        run: u64,
        step: StepId,
        work: impl Future<Output = Result<T>>,
    ) -> Result<T, Error> {
        self.update(run, |session| session.begin_step(step));
        tracing::debug!(step = %step, "{}...", step.meta().title);

        match work.await {
            Ok(value) => {
                self.update(run, |session| session.complete_step(step));
                Ok(value)
            }
            Err(err) => {
                let error = Error::for_step(step, err);
                tracing::warn!(step = %step, error = %error, "Deployment step failed");
                self.update(run, |session| session.fail(step, &error));
                Err(error)
            }
        }
    }

    /// Apply a session mutation, dropped if `run` no longer owns the session.
    fn update(&self, run: u64, apply: impl FnOnce(&mut DeploymentSession)) {
        self.session.send_if_modified(|session| {
            if session.run == run {
                apply(session);
                true
            } else {
                false
            }
        });
    }
}
