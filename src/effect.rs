//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Hand the latest input to the debounce scheduler
    ScheduleSuggestions { input: String },
    /// Look up places matching the query; `seq` tags the response
    FetchSuggestions { query: String, seq: u64 },
    /// Fetch current weather for the given city
    FetchWeather { city: String },
}
