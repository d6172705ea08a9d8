//! Hexledger - in-memory ledger service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Config  │───▶│ Gateway  │───▶│   Account    │───▶│ InMemory     │
//! │  (YAML)  │    │  (axum)  │    │   Service /  │    │ AccountStore │
//! └──────────┘    └──────────┘    │   Transfer   │    └──────────────┘
//!                                 │   Workflow   │───▶ PaymentRail (retry)
//!                                 └──────────────┘───▶ LocalEventBus
//! ```
//!
//! Usage: `hexledger [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;

use hexledger::account::{AccountService, InMemoryAccountStore};
use hexledger::config::{AppConfig, PaymentRailConfig};
use hexledger::gateway::{self, AppState};
use hexledger::transfer::adapters::{LocalEventBus, PaymentRailClient, SimulatedTransport};
use hexledger::transfer::TransferWorkflow;

// ============================================================
// ARGUMENTS
// ============================================================

/// Command-line overrides: `--env` / `-e` picks `config/<env>.yaml`,
/// `--port` replaces `gateway.port`
#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    env: String,
    port: Option<u16>,
}

impl CliArgs {
    const DEFAULT_ENV: &'static str = "dev";

    /// Parse arguments after the program name. Unknown flags are ignored.
    fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut env = None;
        let mut port = None;

        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--env" | "-e" => env = args.next(),
                "--port" => {
                    let value = args.next().context("--port requires a value")?;
                    let parsed = value
                        .parse::<u16>()
                        .with_context(|| format!("invalid --port value {:?}", value))?;
                    port = Some(parsed);
                }
                _ => {}
            }
        }

        Ok(Self {
            env: env.unwrap_or_else(|| Self::DEFAULT_ENV.to_string()),
            port,
        })
    }
}

// ============================================================
// WIRING
// ============================================================

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn build_state(config: &AppConfig) -> Arc<AppState> {
    let store = Arc::new(InMemoryAccountStore::new());

    let PaymentRailConfig {
        retry,
        success_rate,
        seed,
    } = config.payment_rail.clone();
    // Separate streams so the outcome sequence does not depend on jitter draws
    let transport = SimulatedTransport::new(success_rate, rng_from_seed(seed));
    let rail = PaymentRailClient::new(transport, retry, rng_from_seed(seed.map(|s| s ^ 0x9E37_79B9)));

    let accounts = Arc::new(AccountService::new(store.clone(), store.clone()));
    let transfers = Arc::new(TransferWorkflow::new(
        store.clone(),
        store,
        Arc::new(rail),
        Arc::new(LocalEventBus::new()),
    ));

    Arc::new(AppState::new(
        accounts,
        transfers,
        config.gateway.request_timeout(),
    ))
}

// ============================================================
// MAIN
// ============================================================

fn main() -> anyhow::Result<()> {
    let CliArgs { env, port } = CliArgs::parse(std::env::args().skip(1))?;
    let mut config = AppConfig::load(&env)?;
    if let Some(port) = port {
        config.gateway.port = port;
    }
    let _log_guard = hexledger::logging::init_logging(&config);

    tracing::info!(
        env = %env,
        success_rate = config.payment_rail.success_rate,
        max_retries = config.payment_rail.retry.max_retries,
        "Starting hexledger"
    );

    let state = build_state(&config);

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    runtime.block_on(gateway::run_server(
        &config.gateway.host,
        config.gateway.port,
        state,
    ))?;

    tracing::info!("Gateway stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliArgs> {
        CliArgs::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.env, "dev");
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_env_and_port() {
        let args = parse(&["--env", "prod", "--port", "9090"]).unwrap();
        assert_eq!(args.env, "prod");
        assert_eq!(args.port, Some(9090));

        let args = parse(&["-e", "staging"]).unwrap();
        assert_eq!(args.env, "staging");
    }

    #[test]
    fn test_unknown_flags_ignored() {
        let args = parse(&["--verbose", "--port", "8081"]).unwrap();
        assert_eq!(args.env, "dev");
        assert_eq!(args.port, Some(8081));
    }

    #[test]
    fn test_env_without_value_falls_back() {
        assert_eq!(parse(&["--env"]).unwrap().env, "dev");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(parse(&["--port", "http"]).is_err());
        assert!(parse(&["--port", "70000"]).is_err());
        assert!(parse(&["--port"]).is_err());
    }
}
