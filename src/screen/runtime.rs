use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, trace};

use super::action::Action;
use super::effects::DataEffects;
use super::reducer::reduce;
use super::state::ScreenState;
use crate::data_fetcher::FootballDataProvider;

const FETCH_ABORTED: &str = "fetch task aborted";

/// Owns the screen state and runs fetches in the background.
///
/// Actions are applied one at a time on the caller's task. Each fetch runs as
/// its own tokio task and posts its `*Loaded` action back through the channel.
pub struct Runtime {
    state: ScreenState,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    data_effects: DataEffects,
    /// Spawned fetches whose action has not been received yet
    in_flight: usize,
}

impl Runtime {
    /// Must be called inside a tokio runtime.
    pub fn new(provider: Arc<dyn FootballDataProvider>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: ScreenState::new(),
            action_tx,
            action_rx,
            data_effects: DataEffects::new(provider),
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// True while any spawned fetch has not reported back.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Applies an action and starts whatever fetches it asks for.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        for fetch in effect.into_fetches() {
            let fallback = fetch.failure(FETCH_ABORTED);
            let (Some(future), Some(fallback)) = (self.data_effects.start(fetch), fallback) else {
                continue;
            };
            let tx = self.action_tx.clone();
            self.in_flight += 1;
            tokio::spawn(async move {
                // A panicking fetch still has to report back or in_flight never drains
                let action = match tokio::spawn(future).await {
                    Ok(action) => action,
                    Err(e) => {
                        error!("Fetch task failed: {e}");
                        fallback
                    }
                };
                // Receiver is gone only when the runtime was dropped
                let _ = tx.send(action);
            });
        }
    }

    /// Applies every action that has already arrived, without waiting.
    ///
    /// Returns the number of actions processed.
    pub fn try_process_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.receive(action);
            count += 1;
        }
        count
    }

    /// Waits until every spawned fetch has reported back and been applied.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 {
            match self.action_rx.recv().await {
                Some(action) => self.receive(action),
                None => break,
            }
        }
        debug!("RUNTIME: Idle");
    }

    fn receive(&mut self, action: Action) {
        if action.is_load_result() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.dispatch(action);
    }
}
