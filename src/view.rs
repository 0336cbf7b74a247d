use std::fmt::Write;
use std::sync::Arc;

use crate::config::Config;
use crate::events::Event;
use crate::format::{
    format_billions, format_change, format_magnitude, format_price, or_placeholder, PLACEHOLDER,
};
use crate::state::{CountdownState, FetchState, TokenSnapshot};

const LOAD_ERROR: &str = "Failed to load token data";

/// Display-side view-model. Holds the latest value of each state slot.
#[derive(Debug)]
pub struct Dashboard {
    config: Arc<Config>,
    fetch: FetchState,
    countdown: Option<CountdownState>,
}

impl Dashboard {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            fetch: FetchState::Loading,
            countdown: None,
        }
    }

    /// Store an event. Returns false on shutdown.
    pub fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::Token(state) => self.fetch = state,
            Event::Countdown(state) => self.countdown = Some(state),
            Event::Shutdown => return false,
        }
        true
    }

    /// Token header, market numbers and staking panel.
    pub fn render_token(&self) -> String {
        let symbol = &self.config.token.symbol;
        match &self.fetch {
            FetchState::Loading => format!("Loading ${} data...", symbol),
            FetchState::Failed {
                last_good: None, ..
            } => LOAD_ERROR.to_string(),
            FetchState::Ready(snapshot) => self.render_snapshot(snapshot),
            FetchState::Failed {
                reason,
                last_good: Some(snapshot),
            } => format!("{}\n(stale: {})", self.render_snapshot(snapshot), reason),
        }
    }

    fn render_snapshot(&self, snapshot: &TokenSnapshot) -> String {
        let token = &self.config.token;
        let market = snapshot.market.clone().unwrap_or_default();

        let price = or_placeholder(market.price, |p| format!("${}", format_price(p)));
        let change = or_placeholder(market.price_change_24h, format_change);
        let reward_pool =
            format_billions(snapshot.staking_supply.unwrap_or(token.reward_pool_fallback));

        let mut out = String::new();
        let _ = writeln!(out, "${} ({})  {}  {}", token.symbol, token.name, price, change);
        let _ = writeln!(
            out,
            "Market Cap: {}  |  24h Volume: {}",
            or_placeholder(market.market_cap, format_magnitude),
            or_placeholder(market.volume_24h, format_magnitude),
        );
        let _ = writeln!(
            out,
            "Staking  Reward Pool: {}  |  Stream Duration: {}",
            reward_pool, token.stream_duration
        );
        let _ = write!(
            out,
            "Staking Pool: {}  |  Staking Token: {}",
            token.staking_pool, token.staking_token
        );
        out
    }

    /// Contest banner with the countdown line.
    pub fn render_contest(&self) -> String {
        let contest = &self.config.contest;
        let remaining = self
            .countdown
            .map(|c| c.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        format!(
            "{}\n{}\nTime Remaining: {}",
            contest.title, contest.description, remaining
        )
    }

    /// Outbound links, one per line.
    pub fn render_links(&self) -> String {
        format!(
            "Chart: {}\nHome: {}\nSocial: {}",
            self.config.chart_url(),
            self.config.links.home,
            self.config.links.social
        )
    }

    pub fn render(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.render_token(),
            self.render_contest(),
            self.render_links()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MarketData;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(Config::default()))
    }

    fn snapshot() -> TokenSnapshot {
        TokenSnapshot {
            contract_address: "0xabc".to_string(),
            market: Some(MarketData {
                market_cap: Some(1_250_000.0),
                price: Some(0.000005),
                price_change_24h: Some(-4.5),
                volume_24h: None,
            }),
            staking_supply: Some(2_000_000_000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_loading() {
        let dash = dashboard();
        assert_eq!(dash.render_token(), "Loading $CLAWRENCE data...");
        assert!(dash.render_contest().ends_with("Time Remaining: —"));
    }

    #[test]
    fn test_ready_renders_values_and_placeholders() {
        let mut dash = dashboard();
        assert!(dash.apply(Event::Token(FetchState::Ready(snapshot()))));

        let text = dash.render_token();
        assert!(text.contains("$5.00e-6"), "{}", text);
        assert!(text.contains("↓ 4.50%"), "{}", text);
        assert!(text.contains("Market Cap: $1.25M"), "{}", text);
        assert!(text.contains("24h Volume: —"), "{}", text);
        assert!(text.contains("Reward Pool: 2B"), "{}", text);
        assert!(
            text.contains("Staking Pool: 0xe4f912e61176fbc91b4e9aeb00bdada4fcdeba3e"),
            "{}",
            text
        );
        assert!(
            text.contains("Staking Token: 0x4976078a7487910725c66d33c5fdca4cf848bdbf"),
            "{}",
            text
        );
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_no_market_data() {
        let mut dash = dashboard();
        dash.apply(Event::Token(FetchState::Ready(TokenSnapshot::default())));

        let text = dash.render_token();
        assert!(text.contains("Market Cap: —"), "{}", text);
        assert!(text.contains("Reward Pool: 10B"), "{}", text);
        assert!(!text.contains("$0.00"), "{}", text);
    }

    #[test]
    fn test_failed_without_data() {
        let mut dash = dashboard();
        dash.apply(Event::Token(FetchState::Failed {
            reason: "HTTP error 500".to_string(),
            last_good: None,
        }));
        assert_eq!(dash.render_token(), LOAD_ERROR);
    }

    #[test]
    fn test_failed_with_stale_data() {
        let mut dash = dashboard();
        dash.apply(Event::Token(FetchState::Failed {
            reason: "HTTP error 500".to_string(),
            last_good: Some(snapshot()),
        }));
        let text = dash.render_token();
        assert!(text.contains("Market Cap: $1.25M"));
        assert!(text.ends_with("(stale: HTTP error 500)"));
    }

    #[test]
    fn test_countdown_and_shutdown() {
        let mut dash = dashboard();
        dash.apply(Event::Countdown(CountdownState::Remaining {
            hours: 3,
            minutes: 2,
            seconds: 1,
        }));
        assert!(dash.render_contest().ends_with("Time Remaining: 3h 2m 1s"));

        dash.apply(Event::Countdown(CountdownState::Ended));
        assert!(dash.render_contest().ends_with("Time Remaining: Contest ended"));

        assert!(!dash.apply(Event::Shutdown));
    }

    #[test]
    fn test_links() {
        let links = dashboard().render_links();
        let chart = "https://dexscreener.com/base/0x416232a73a7A9Ef779D8B6eb4aF6B552C8E8feEd";
        assert!(links.contains(chart));
        assert!(links.contains("https://streme.fun"));
        assert!(links.contains("https://warpcast.com/clawrencestreme"));
    }
}
