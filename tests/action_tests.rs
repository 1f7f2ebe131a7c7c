//! Action and store tests

use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, assert_emitted, assert_not_emitted};
use weathernow::{
    action::Action,
    condition::Condition,
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherSnapshot},
};

#[test]
fn test_store_submit_then_load() {
    let mut store = EffectStore::new(
        AppState {
            query: "Paris".into(),
            ..Default::default()
        },
        reducer,
    );

    let result = store.dispatch(Action::QuerySubmit);
    assert!(result.changed, "State should change");
    assert!(store.state().loading);
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::FetchWeather { .. }));

    store.dispatch(Action::WeatherDidLoad(WeatherSnapshot::default()));
    assert!(!store.state().loading);
    assert_eq!(store.state().weather, Some(WeatherSnapshot::default()));
    assert_eq!(store.state().error, None);
}

#[test]
fn test_snapshot_and_error_never_coexist() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let check = |state: &AppState| assert!(!(state.weather.is_some() && state.error.is_some()));

    for action in [
        Action::WeatherFetch("Paris".into()),
        Action::WeatherDidLoad(WeatherSnapshot::default()),
        Action::WeatherFetch("Atlantis".into()),
        Action::WeatherDidError("404".into()),
        Action::WeatherFetch("Paris".into()),
        Action::WeatherDidLoad(WeatherSnapshot::default()),
    ] {
        store.dispatch(action);
        check(store.state());
    }
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(WeatherSnapshot::default());
    let quit = Action::Quit;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(quit.category(), None);
    assert!(did_load.is_weather_did());
}

#[test]
fn test_harness_emit_and_drain() {
    let mut harness = TestHarness::<(), Action>::new(());

    harness.emit(Action::QueryChange("Lon".into()));
    harness.emit(Action::SuggestionsDebounced("Lon".into()));
    harness.emit(Action::SuggestionsDidError(1));

    let actions = harness.drain_emitted();
    actions.assert_count(3);
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::SuggestionSelect("London, GB".into()),
        Action::WeatherFetch("London".into()),
    ];

    assert_emitted!(actions, Action::SuggestionSelect(_));
    assert_emitted!(actions, Action::WeatherFetch(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidError(_));
}

#[test]
fn test_condition_boundaries() {
    assert_eq!(Condition::from_code(199), Condition::Clouds);
    assert_eq!(Condition::from_code(200), Condition::Thunderstorm);
    assert_eq!(Condition::from_code(299), Condition::Thunderstorm);
    assert_eq!(Condition::from_code(300), Condition::Rain);
    assert_eq!(Condition::from_code(800), Condition::Clear);
    assert_eq!(Condition::from_code(801), Condition::Clouds);
}
