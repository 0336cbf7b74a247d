use crate::state::{CountdownState, FetchState};

// Everything the display loop reacts to. Each feed owns exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Poller applied a new fetch result
    Token(FetchState),

    // Countdown changed (at most once per tick)
    Countdown(CountdownState),

    // Ctrl+C or kill signal
    Shutdown,
}
