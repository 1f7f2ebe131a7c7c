//! Controller - owns the store and executes the reducer's effects
//!
//! Every state change goes through [`Controller::dispatch`] on the caller's
//! task. Collaborator calls run as spawned tasks and report back through an
//! internal channel; [`Controller::next_action`] hands those results (and
//! debounce expiries) back to the caller so they are dispatched on the same
//! loop as UI events.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tui_dispatch::EffectStore;

use crate::action::Action;
use crate::api::{ApiError, WeatherService};
use crate::debounce::Debouncer;
use crate::effect::Effect;
use crate::reducer::reducer;
use crate::state::{AppState, SUGGESTION_LIMIT};

pub struct Controller {
    store: EffectStore<AppState, Action, Effect>,
    debouncer: Debouncer<String>,
    service: Arc<dyn WeatherService>,
    completions_tx: mpsc::UnboundedSender<Action>,
    completions_rx: mpsc::UnboundedReceiver<Action>,
}

impl Controller {
    pub fn new(service: Arc<dyn WeatherService>, debounce: Duration) -> Self {
        Self::with_state(AppState::default(), service, debounce)
    }

    pub fn with_state(
        state: AppState,
        service: Arc<dyn WeatherService>,
        debounce: Duration,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStore::new(state, reducer),
            debouncer: Debouncer::new(debounce),
            service,
            completions_tx,
            completions_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Run one action through the reducer and execute its effects.
    ///
    /// Returns whether the state changed (i.e. a redraw is needed).
    pub fn dispatch(&mut self, action: Action) -> bool {
        if let Action::SuggestionsDidLoad(seq, _) | Action::SuggestionsDidError(seq) = &action {
            if *seq != self.state().suggestion_seq {
                tracing::debug!(
                    seq,
                    current = self.state().suggestion_seq,
                    "dropping stale suggestions"
                );
            }
        }

        let result = self.store.dispatch(action);
        let mut changed = result.changed;
        for effect in result.effects {
            changed |= self.run_effect(effect);
        }
        changed
    }

    /// Wait for the next internally generated action: a debounce expiry or a
    /// collaborator result. Expiries are checked first.
    pub async fn next_action(&mut self) -> Action {
        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                biased;
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    if let Some(input) = self.debouncer.poll(Instant::now()) {
                        return Action::SuggestionsDebounced(input);
                    }
                }
                Some(action) = self.completions_rx.recv() => return action,
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::ScheduleSuggestions { input } => {
                match self.debouncer.schedule(input, Instant::now()) {
                    Some(expired) => self.dispatch(Action::SuggestionsDebounced(expired)),
                    None => false,
                }
            }
            Effect::FetchSuggestions { query, seq } => {
                let service = Arc::clone(&self.service);
                let lookup = query.clone();
                self.spawn_call(
                    async move { service.search_places(&lookup, SUGGESTION_LIMIT).await },
                    move |result| match result {
                        Ok(places) => Action::SuggestionsDidLoad(seq, places),
                        Err(error) => {
                            tracing::warn!(query = %query, seq, %error, "suggestion lookup failed");
                            Action::SuggestionsDidError(seq)
                        }
                    },
                );
                false
            }
            Effect::FetchWeather { city } => {
                let service = Arc::clone(&self.service);
                let lookup = city.clone();
                self.spawn_call(
                    async move { service.current_weather(&lookup).await },
                    move |result| match result {
                        Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                        Err(error) => {
                            tracing::warn!(city = %city, %error, "weather lookup failed");
                            Action::WeatherDidError(error)
                        }
                    },
                );
                false
            }
        }
    }

    /// Run a collaborator call on its own task and always post a result,
    /// including when the call panics.
    fn spawn_call<T, F, R>(&self, call: F, report: R)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
        R: FnOnce(Result<T, String>) -> Action + Send + 'static,
    {
        let tx = self.completions_tx.clone();
        let task = tokio::spawn(call);
        tokio::spawn(async move {
            let result = match task.await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(e) => Err(format!("lookup task failed: {e}")),
            };
            let _ = tx.send(report(result));
        });
    }
}
