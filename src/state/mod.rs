mod countdown;
mod snapshot;

pub use countdown::{tick, CountdownState};
pub use snapshot::{FetchState, MarketData, TokenSnapshot};
