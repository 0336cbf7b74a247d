use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use streme_dash::api::streme::StremeClient;
use streme_dash::config::Config;
use streme_dash::events::Event;
use streme_dash::feeds::{CountdownClock, SystemClock, TokenPoller};
use streme_dash::view::Dashboard;

const DEFAULT_CONFIG: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let (cfg, from_file) = Config::load_or_default(&path)?;
    let cfg = Arc::new(cfg);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.general.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !from_file {
        warn!(path = %path, "config file not found, using defaults");
    }
    info!(
        token = %cfg.token.contract_address,
        deadline = %cfg.contest.deadline,
        "loaded config"
    );

    // Create the event channel
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Start feeds
    let client = StremeClient::new(&cfg.poll.api_base);
    let poller = TokenPoller::new(client, cfg.token.contract_address.clone(), cfg.poll.interval())
        .spawn(tx.clone());
    let clock =
        CountdownClock::new(cfg.contest.deadline, cfg.poll.tick(), SystemClock).spawn(tx.clone());

    let shutdown_tx = tx.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for ctrl-c");
            return;
        }
        let _ = shutdown_tx.send(Event::Shutdown).await;
    });
    drop(tx);

    let mut dashboard = Dashboard::new(cfg.clone());
    println!("{}\n", dashboard.render());

    // Main event loop
    while let Some(event) = rx.recv().await {
        match event {
            Event::Token(_) => {
                dashboard.apply(event);
                println!("{}\n", dashboard.render_token());
            }
            Event::Countdown(state) => {
                dashboard.apply(event);
                println!("Time Remaining: {}", state);
            }
            Event::Shutdown => {
                info!("shutting down");
                break;
            }
        }
    }

    // Nothing reads past this point; close the channel so no send can park
    drop(rx);
    poller.shutdown().await;
    clock.shutdown().await;
    Ok(())
}
