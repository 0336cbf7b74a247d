use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::PeriodicTask;
use crate::events::Event;
use crate::state::{tick, CountdownState};

/// Wall-clock source for the countdown.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Recomputes the countdown every `period` and owns the `CountdownState` slot.
pub struct CountdownClock<T> {
    target: DateTime<Utc>,
    period: Duration,
    time: T,
    last: Option<CountdownState>,
}

impl<T: TimeSource> CountdownClock<T> {
    pub fn new(target: DateTime<Utc>, period: Duration, time: T) -> Self {
        Self {
            target,
            period,
            time,
            last: None,
        }
    }

    /// Recompute now. Returns the state only if it changed since the last call.
    pub fn update(&mut self) -> Option<CountdownState> {
        let state = tick(self.target, self.time.now());
        if self.last == Some(state) {
            return None;
        }
        self.last = Some(state);
        Some(state)
    }

    /// Spawn the tick loop: once immediately, then every `period` until cancelled.
    pub fn spawn(mut self, tx: mpsc::Sender<Event>) -> PeriodicTask {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            info!(target_at = %self.target, "[clock] started");

            let mut ticker = time::interval(self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                if let Some(state) = self.update() {
                    if state.is_ended() {
                        info!("[clock] contest ended");
                    }
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => break,
                        sent = tx.send(Event::Countdown(state)) => {
                            if sent.is_err() {
                                break;
                            }
                        }
                    }
                }
            }

            info!("[clock] stopped");
        });

        PeriodicTask::new(cancel, handle)
    }
}
