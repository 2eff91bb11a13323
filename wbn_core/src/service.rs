//! The sequence run on each invocation: fetch, match, notify.

use chrono::NaiveDate;

use crate::{
    config::Config,
    council_client::CouncilClient,
    model::WeeklyResult,
    notifier::{Notifier, PushService},
    secret::SecretStore,
    week, Error,
};

/// Get the categories collected in the week of `today`.
pub async fn collect(
    council: &CouncilClient,
    property_number: &str,
    radius: u32,
    today: NaiveDate,
) -> Result<WeeklyResult, Error> {
    let record = council.get(property_number, radius).await?;
    Ok(week::this_week(&record, today))
}

/// Collect the categories of the week of `today` and notify the configured recipient.
///
/// The note is sent even when nothing is collected this week.
pub async fn run<S, P>(
    config: &Config,
    council: &CouncilClient,
    notifier: &Notifier<S, P>,
    today: NaiveDate,
) -> Result<WeeklyResult, Error>
where
    S: SecretStore,
    P: PushService,
{
    let result = collect(council, &config.property_number, config.radius, today).await?;
    notifier
        .notify(
            &config.recipient,
            &config.api_key_parameter,
            &result.message(),
        )
        .await?;
    Ok(result)
}
