//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{
    AppState, SUGGESTION_LIMIT, SUGGESTION_MIN_CHARS, WEATHER_NOT_FOUND, input_len,
};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(raw) => {
            state.query = raw.clone();
            state.highlighted = None;
            DispatchResult::changed_with(Effect::ScheduleSuggestions { input: raw })
        }

        Action::QuerySubmit => {
            if state.query.is_empty() {
                return DispatchResult::unchanged();
            }
            let city = state.query.clone();
            reducer(state, Action::WeatherFetch(city))
        }

        // ===== Suggestion actions =====
        Action::SuggestionSelect(suggestion) => {
            let city = city_from_suggestion(&suggestion).to_string();
            state.query = suggestion;
            state.highlighted = None;
            reducer(state, Action::WeatherFetch(city))
        }

        Action::SuggestionHighlight(index) => {
            if index < state.suggestions.len() && state.highlighted != Some(index) {
                state.highlighted = Some(index);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Suggestions actions =====
        Action::SuggestionsDebounced(input) => {
            // Any lookup still in flight is now stale.
            state.suggestion_seq += 1;
            if input_len(&input) < SUGGESTION_MIN_CHARS {
                state.clear_suggestions();
                return DispatchResult::changed();
            }
            DispatchResult::changed_with(Effect::FetchSuggestions {
                query: input,
                seq: state.suggestion_seq,
            })
        }

        Action::SuggestionsDidLoad(seq, places) => {
            if seq != state.suggestion_seq {
                return DispatchResult::unchanged();
            }
            state.suggestions = places
                .iter()
                .take(SUGGESTION_LIMIT)
                .map(|place| place.label())
                .collect();
            state.highlighted = None;
            DispatchResult::changed()
        }

        Action::SuggestionsDidError(seq) => {
            if seq != state.suggestion_seq {
                return DispatchResult::unchanged();
            }
            state.clear_suggestions();
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch(city) => {
            state.loading = true;
            state.error = None;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        Action::WeatherDidLoad(snapshot) => {
            state.weather = Some(snapshot);
            state.error = None;
            state.loading = false;
            state.clear_suggestions();
            // Keep the dropdown dismissed if an older lookup lands later.
            state.suggestion_seq += 1;
            DispatchResult::changed()
        }

        Action::WeatherDidError(_) => {
            state.weather = None;
            state.error = Some(WEATHER_NOT_FOUND.to_string());
            state.loading = false;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// City part of a dropdown label: everything before the first comma.
pub fn city_from_suggestion(suggestion: &str) -> &str {
    suggestion.split(',').next().unwrap_or(suggestion)
}
