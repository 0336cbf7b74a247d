use crate::api::streme::TokenRecord;

/// Market numbers from the last successful poll. None = not known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketData {
    pub market_cap: Option<f64>,
    pub price: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub volume_24h: Option<f64>,
}

/// Latest known state of the token. Replaced wholesale on every successful poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenSnapshot {
    pub contract_address: String,
    /// None when the API returned no market data at all
    pub market: Option<MarketData>,
    pub staking_supply: Option<f64>,
}

impl From<TokenRecord> for TokenSnapshot {
    fn from(record: TokenRecord) -> Self {
        Self {
            contract_address: record.contract_address,
            market: record.market_data.map(|m| MarketData {
                market_cap: m.market_cap,
                price: m.price,
                price_change_24h: m.price_change_24h,
                volume_24h: m.volume_24h,
            }),
            staking_supply: record.staking.and_then(|s| s.supply),
        }
    }
}

/// Poller state slot.
///
/// Starts in `Loading` and never goes back to it. A failed poll keeps the
/// last good snapshot (if any) so the view can show it flagged as stale.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Loading,
    Ready(TokenSnapshot),
    Failed {
        reason: String,
        last_good: Option<TokenSnapshot>,
    },
}

impl FetchState {
    /// Apply a successful poll.
    pub fn succeed(&mut self, snapshot: TokenSnapshot) {
        *self = FetchState::Ready(snapshot);
    }

    /// Apply a failed poll, carrying forward whatever was last good.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let last_good = match std::mem::take(self) {
            FetchState::Ready(snapshot) => Some(snapshot),
            FetchState::Failed { last_good, .. } => last_good,
            FetchState::Loading => None,
        };
        *self = FetchState::Failed {
            reason: reason.into(),
            last_good,
        };
    }

    /// Snapshot to display, fresh or stale.
    pub fn snapshot(&self) -> Option<&TokenSnapshot> {
        match self {
            FetchState::Ready(snapshot) => Some(snapshot),
            FetchState::Failed { last_good, .. } => last_good.as_ref(),
            FetchState::Loading => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, FetchState::Failed { last_good: Some(_), .. })
    }
}
