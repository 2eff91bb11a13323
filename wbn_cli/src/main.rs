use anyhow::{anyhow, Result};
use clap::Parser;
use wbn_core::{
    chrono::{Local, NaiveDate},
    config::{level_from_name, Config},
    council_client::{CouncilClient, DEFAULT_PROPERTY_NUMBER, DEFAULT_RADIUS},
    logging::{init_logging, LogFormat},
    notifier::{Notifier, PushbulletClient},
    secret::SsmSecretStore,
    service,
};

#[derive(Debug, Parser)]
pub struct Arguments {
    /// the Pushbullet account to notify
    #[arg(long, env = "email")]
    pub email: String,
    /// the parameter store name of the Pushbullet access token
    #[arg(long, env = "apiKey")]
    pub api_key: String,
    /// the council property number
    #[arg(long, env = "propnum", default_value = DEFAULT_PROPERTY_NUMBER)]
    pub property_number: String,
    /// the map radius sent along with the property number
    #[arg(long, env = "radius", default_value_t = DEFAULT_RADIUS)]
    pub radius: u32,
    /// the log level (DEBUG, INFO, WARNING, ERROR)
    #[arg(long, env = "logLevel", default_value = "ERROR")]
    pub log_level: String,
    /// check the week of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// print the message instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl From<&Arguments> for Config {
    fn from(value: &Arguments) -> Self {
        Config {
            log_level: level_from_name(&value.log_level),
            recipient: value.email.clone(),
            api_key_parameter: value.api_key.clone(),
            property_number: value.property_number.clone(),
            radius: value.radius,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();
    let config = Config::from(&args);
    init_logging(config.log_level, LogFormat::Text)?;
    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let council = CouncilClient::new();
    let result = if args.dry_run {
        service::collect(&council, &config.property_number, config.radius, today).await
    } else {
        let notifier = Notifier::new(SsmSecretStore::from_env().await, PushbulletClient::new());
        service::run(&config, &council, &notifier, today).await
    }
    .map_err(|err| {
        tracing::error!(error = %err, kind = ?err.kind(), "run failed");
        anyhow!(err)
    })?;
    println!("{}", wbn_core::notifier::message_body(&result.message()));
    Ok(())
}
