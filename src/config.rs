use anyhow::{bail, Context};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Dashboard configuration. Built once at startup, then shared read-only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub token: TokenConfig,
    pub contest: ContestConfig,
    pub poll: PollConfig,
    pub links: LinksConfig,
    pub general: General,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    pub symbol: String,
    pub name: String,
    /// Token contract, matched case-insensitively against API records
    pub contract_address: String,
    /// Display-only
    pub staking_pool: String,
    /// Display-only
    pub staking_token: String,
    /// Reward pool size shown when the API has no staking data
    pub reward_pool_fallback: f64,
    pub stream_duration: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            symbol: "CLAWRENCE".to_string(),
            name: "Clawrence".to_string(),
            contract_address: "0x416232a73a7A9Ef779D8B6eb4aF6B552C8E8feEd".to_string(),
            staking_pool: "0xe4f912e61176fbc91b4e9aeb00bdada4fcdeba3e".to_string(),
            staking_token: "0x4976078a7487910725c66d33c5fdca4cf848bdbf".to_string(),
            reward_pool_fallback: 10_000_000_000.0,
            stream_duration: "1 Year".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContestConfig {
    pub title: String,
    pub description: String,
    /// Fixed deadline. Never changes while the process runs.
    pub deadline: DateTime<Utc>,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            title: "The Butler's Commission".to_string(),
            description:
                "Holder with the most $CLAWRENCE when time runs out wins a custom mini-app build."
                    .to_string(),
            deadline: Utc.with_ymd_and_hms(2026, 2, 3, 8, 0, 0).single().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub api_base: String,
    pub interval_secs: u64,
    pub tick_millis: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.streme.fun/api/tokens".to_string(),
            interval_secs: 30,
            tick_millis: 1000,
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Chart viewer; the token address is appended
    pub chart_base: String,
    pub home: String,
    pub social: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            chart_base: "https://dexscreener.com/base/".to_string(),
            home: "https://streme.fun".to_string(),
            social: "https://warpcast.com/clawrencestreme".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct General {
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file. Missing sections and fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&contents)
    }

    /// Load `path` if it exists, otherwise use the defaults.
    /// The flag is true when the file was read.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::load(path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.token.contract_address.trim().is_empty() {
            bail!("token.contract_address must not be empty");
        }
        if self.poll.interval_secs == 0 {
            bail!("poll.interval_secs must be greater than zero");
        }
        if self.poll.tick_millis == 0 {
            bail!("poll.tick_millis must be greater than zero");
        }
        Ok(())
    }

    /// Chart viewer URL for the configured token.
    pub fn chart_url(&self) -> String {
        format!("{}{}", self.links.chart_base, self.token.contract_address)
    }
}
