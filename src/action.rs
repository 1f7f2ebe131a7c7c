//! Actions: UI events, timer expiries and collaborator results

use serde::{Deserialize, Serialize};

use crate::state::{Place, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// Search field text changed (every keystroke)
    QueryChange(String),

    /// Submit the current query
    QuerySubmit,

    // ===== Suggestion category =====
    /// A dropdown entry was chosen, e.g. "London, GB"
    SuggestionSelect(String),

    /// Move the dropdown cursor (by index)
    SuggestionHighlight(usize),

    // ===== Suggestions category =====
    /// Debounce timer fired with the latest input
    SuggestionsDebounced(String),

    /// Result: geocoding lookup `seq` returned candidates
    SuggestionsDidLoad(u64, Vec<Place>),

    /// Result: geocoding lookup `seq` failed
    SuggestionsDidError(u64),

    // ===== Weather category =====
    /// Intent: fetch weather for a city (triggers async task)
    WeatherFetch(String),

    /// Result: weather loaded successfully
    WeatherDidLoad(WeatherSnapshot),

    /// Result: weather fetch failed (diagnostic text, not shown to the user)
    WeatherDidError(String),

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
