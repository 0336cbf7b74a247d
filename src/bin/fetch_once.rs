use anyhow::Result;
use std::time::Instant;

use streme_dash::api::streme::StremeClient;
use streme_dash::config::Config;
use streme_dash::feeds::fetch;
use streme_dash::format::{format_magnitude, format_price, or_placeholder};

/// One-shot fetch against the live API. Prints the selected record and latency.
#[tokio::main]
async fn main() -> Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let client = StremeClient::new(&cfg.poll.api_base);
    println!("GET {}?address={}", client.base_url(), cfg.token.contract_address);

    let start = Instant::now();
    let snapshot = fetch(&client, &cfg.token.contract_address).await?;
    let elapsed_ms = start.elapsed().as_millis();

    let market = snapshot.market.clone().unwrap_or_default();
    println!("Record:     {}", snapshot.contract_address);
    println!("Price:      {}", or_placeholder(market.price, format_price));
    println!("Market cap: {}", or_placeholder(market.market_cap, format_magnitude));
    println!("Volume 24h: {}", or_placeholder(market.volume_24h, format_magnitude));
    println!("Staking:    {:?}", snapshot.staking_supply);
    println!("Latency:    {}ms", elapsed_ms);

    Ok(())
}
