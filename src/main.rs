//! WeatherNow - terminal city weather lookup

use std::io;
use std::sync::Arc;
use std::thread;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, BorderType},
};
use tokio::sync::mpsc;
use tui_dispatch::EventKind;
use weathernow::action::Action;
use weathernow::api::OpenWeatherClient;
use weathernow::components::{
    Component, SearchBar, SearchBarProps, WeatherPanel, WeatherPanelProps,
};
use weathernow::config::Config;
use weathernow::controller::Controller;
use weathernow::logging;
use weathernow::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    let client = OpenWeatherClient::new(&config.base_url, &config.api_key, config.timeout())
        .map_err(io::Error::other)?;
    let state = AppState {
        query: config.city.clone().unwrap_or_default(),
        ..AppState::new()
    };
    let mut controller = Controller::with_state(state, Arc::new(client), config.debounce());
    if config.city.is_some() {
        controller.dispatch(Action::QuerySubmit);
    }
    tracing::info!(base_url = %config.base_url, "starting");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut controller).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct WeatherUi {
    search: SearchBar,
    panel: WeatherPanel,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            search: SearchBar::new(),
            panel: WeatherPanel,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let frame_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" WeatherNow ")
            .title_alignment(Alignment::Center);
        let inner = frame_block.inner(area);
        frame.render_widget(frame_block, area);

        let chunks = Layout::vertical([
            Constraint::Length(SearchBar::height(state.suggestions.len())),
            Constraint::Min(0),
        ])
        .split(inner);

        self.search.render(frame, chunks[0], search_props(state));
        self.panel
            .render(frame, chunks[1], WeatherPanelProps { state });
    }

    fn handle_event(&mut self, event: Event, state: &AppState) -> Vec<Action> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self
                .search
                .handle_event(&EventKind::Key(key), search_props(state))
                .into_iter()
                .collect(),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => self
                .search
                .suggestion_at(mouse.column, mouse.row)
                .and_then(|index| state.suggestions.get(index))
                .map(|label| Action::SuggestionSelect(label.clone()))
                .into_iter()
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn search_props(state: &AppState) -> SearchBarProps<'_> {
    SearchBarProps {
        query: &state.query,
        suggestions: &state.suggestions,
        highlighted: state.highlighted,
        is_focused: true,
        on_query_change: Action::QueryChange,
        on_highlight: Action::SuggestionHighlight,
    }
}

/// Forward terminal events from a blocking reader thread.
fn spawn_terminal_events() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(64);
    thread::spawn(move || {
        while let Ok(event) = event::read() {
            if tx.blocking_send(event).is_err() {
                break;
            }
        }
    });
    rx
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut Controller,
) -> io::Result<()> {
    let mut ui = WeatherUi::new();
    let mut events = spawn_terminal_events();

    loop {
        terminal.draw(|frame| ui.render(frame, frame.area(), controller.state()))?;

        // Timer expiries and API results go first so a keystroke arriving at
        // the same moment is applied after them.
        tokio::select! {
            biased;
            action = controller.next_action() => {
                controller.dispatch(action);
            }
            event = events.recv() => {
                let Some(event) = event else {
                    return Ok(());
                };
                for action in ui.handle_event(event, controller.state()) {
                    if matches!(action, Action::Quit) {
                        return Ok(());
                    }
                    controller.dispatch(action);
                }
            }
        }
    }
}
