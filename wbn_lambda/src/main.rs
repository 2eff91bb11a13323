//! The scheduled function announcing this week's bin collections.

use lambda_runtime::{run, service_fn, Error};
use wbn_core::{
    config::Config,
    council_client::CouncilClient,
    logging::{init_logging, LogFormat},
    notifier::{Notifier, PushbulletClient},
    secret::SsmSecretStore,
};

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    init_logging(config.log_level, LogFormat::Json)?;
    let state = handler::State {
        council: CouncilClient::new(),
        notifier: Notifier::new(SsmSecretStore::from_env().await, PushbulletClient::new()),
        config,
    };
    let state = &state;
    run(service_fn(move |event| async move { handler::handler(state, event).await })).await
}
