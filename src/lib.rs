//! WeatherNow - city search with live suggestions and current conditions
//!
//! The query logic (debounced suggestions, weather fetches and the state
//! they share) lives in [`controller`] and [`reducer`]; the terminal front
//! end in [`components`] only reads [`state::AppState`].

pub mod action;
pub mod api;
pub mod components;
pub mod condition;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
