use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use wbn_core::{
    config::Config,
    council_client::CouncilClient,
    notifier::{Notifier, PushbulletClient},
    secret::SsmSecretStore,
    service,
};

/// The clients and configuration shared by all invocations of a process.
pub struct State {
    pub config: Config,
    pub council: CouncilClient,
    pub notifier: Notifier<SsmSecretStore, PushbulletClient>,
}

/// Handle a scheduled invocation.
///
/// The event is ignored.
pub async fn handler(state: &State, _event: LambdaEvent<Value>) -> Result<(), Error> {
    let today = wbn_core::chrono::Local::now().date_naive();
    let result = service::run(&state.config, &state.council, &state.notifier, today)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, kind = ?err.kind(), "run failed");
            err
        })?;
    tracing::info!(message = ?result.message(), "notified");
    Ok(())
}
