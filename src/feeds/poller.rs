use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::PeriodicTask;
use crate::api::streme::select_record;
use crate::api::TokenSource;
use crate::error::{FetchError, Result};
use crate::events::Event;
use crate::state::{FetchState, TokenSnapshot};

/// Fetch the token list once and pick the record for `address`.
///
/// An empty list is `FetchError::NotFound`. If no record matches, the first
/// one is used.
pub async fn fetch<S: TokenSource>(source: &S, address: &str) -> Result<TokenSnapshot> {
    let records = source.fetch_tokens(address).await?;
    select_record(records, address)
        .map(TokenSnapshot::from)
        .ok_or(FetchError::NotFound)
}

/// Polls the token source on a fixed interval and owns the `FetchState` slot.
pub struct TokenPoller<S> {
    source: S,
    address: String,
    interval: Duration,
    state: FetchState,
    /// Sequence number handed to the most recently issued request
    issued: u64,
    /// Sequence number of the most recently applied result
    applied: u64,
}

impl<S: TokenSource> TokenPoller<S> {
    pub fn new(source: S, address: impl Into<String>, interval: Duration) -> Self {
        Self {
            source,
            address: address.into(),
            interval,
            state: FetchState::Loading,
            issued: 0,
            applied: 0,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    fn next_seq(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply the result of request `seq`.
    ///
    /// Returns the new state, or None when a newer result was already applied
    /// and this one is dropped.
    pub fn apply(&mut self, seq: u64, result: Result<TokenSnapshot>) -> Option<&FetchState> {
        if seq <= self.applied {
            debug!(seq, applied = self.applied, "[poller] dropping out-of-order result");
            return None;
        }
        self.applied = seq;

        match result {
            Ok(snapshot) => {
                debug!(seq, address = %snapshot.contract_address, "[poller] snapshot updated");
                self.state.succeed(snapshot);
            }
            Err(e) => {
                warn!(seq, kind = e.kind(), error = %e, "[poller] token fetch failed");
                self.state.fail(e.to_string());
            }
        }
        Some(&self.state)
    }

    /// Run a single poll and apply it.
    pub async fn poll_once(&mut self) -> &FetchState {
        let seq = self.next_seq();
        let result = fetch(&self.source, &self.address).await;
        self.apply(seq, result);
        &self.state
    }

    /// Spawn the poll loop: once immediately, then every `interval`.
    /// Each applied state is sent as `Event::Token`.
    pub fn spawn(mut self, tx: mpsc::Sender<Event>) -> PeriodicTask {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            info!(address = %self.address, every = ?self.interval, "[poller] started");

            let mut ticker = time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                let seq = self.next_seq();
                let result = tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    result = fetch(&self.source, &self.address) => result,
                };

                if token.is_cancelled() {
                    break;
                }

                let event = match self.apply(seq, result) {
                    Some(state) => Event::Token(state.clone()),
                    None => continue,
                };

                // A full channel must not hold up teardown
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    sent = tx.send(event) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
            }

            info!("[poller] stopped");
        });

        PeriodicTask::new(cancel, handle)
    }
}
