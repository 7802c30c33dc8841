/*
[INPUT]:  TRANSFERWISE_API_TOKEN (+ optional TRANSFERWISE_SANDBOX, TRANSFERWISE_LANGUAGE, RUST_LOG)
[OUTPUT]: Profiles of the account and a fixed-rate quote for the first one
[POS]:    Demos - profile listing and quoting
[UPDATE]: When profile or quote endpoints change
*/

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use transferwise_adapter::{QuoteType, TransferwiseClient};

/// Example: list profiles and quote 600 GBP paid from EUR
///
/// Run against the sandbox with `TRANSFERWISE_SANDBOX=1`.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let client = TransferwiseClient::from_env().context("configure client")?;
    info!(base_url = %client.base_url(), "client created");

    let temporary = client
        .temporary_quote("EUR", "GBP", Some(Decimal::from(600)), None)
        .await
        .context("temporary quote")?;
    println!("Indicative rate EUR->GBP: {}", temporary.rate);

    let profiles = client.profiles().await.context("list profiles")?;
    println!("Found {} profile(s)", profiles.len());
    for profile in &profiles {
        println!("  #{:?} ({})", profile.id(), profile.profile_type());
    }

    let profile = profiles
        .first()
        .ok_or_else(|| anyhow!("account has no profiles"))?;
    let request = profile.quote_request(
        "EUR",
        "GBP",
        Some(Decimal::from(600)),
        None,
        QuoteType::BalancePayout,
    )?;

    let quote = client.quote(&request).await.context("create quote")?;
    println!(
        "Quote {:?}: rate {}, fee {:?}, delivery {:?}",
        quote.id, quote.rate, quote.fee, quote.delivery_estimate
    );

    if let Some(id) = quote.id {
        for method in client.pay_in_methods(id).await.context("pay-in methods")? {
            println!(
                "  pay in by {} (reference {:?})",
                method.method_type, method.details.pay_in_reference
            );
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
