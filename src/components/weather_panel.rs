use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::Component;
use crate::action::Action;
use crate::condition::Condition;
use crate::state::{AppState, WeatherSnapshot};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherPanel - read-only view of state
pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

/// Current conditions, loading indicator, error line and key hints
#[derive(Default)]
pub struct WeatherPanel;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Status line (loading / error)
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        render_status_line(frame, chunks[0], props.state);

        match &props.state.weather {
            Some(weather) => render_weather(frame, chunks[1], weather),
            None if props.state.error.is_none() && !props.state.loading => {
                let hint = Paragraph::new("Type a city name and press Enter")
                    .alignment(Alignment::Center)
                    .fg(Color::DarkGray);
                frame.render_widget(hint, chunks[1]);
            }
            None => {}
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("\u{2191}\u{2193}", "suggestions"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.loading {
        Line::from("Loading...").fg(Color::Cyan)
    } else if let Some(error) = &state.error {
        Line::from(format!("{ERROR_ICON} {error}")).fg(Color::Red)
    } else {
        return;
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_weather(frame: &mut Frame, area: Rect, weather: &WeatherSnapshot) {
    let condition = Condition::from_code(weather.condition_code);

    let chunks = Layout::vertical([
        Constraint::Length(5), // Headline
        Constraint::Length(4), // Metrics row 1
        Constraint::Length(4), // Metrics row 2
        Constraint::Min(0),
    ])
    .split(area);

    let headline = vec![
        Line::from(condition.icon()),
        Line::from(Span::styled(
            format!("{}°C", weather.rounded_temperature()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{}, {}", weather.place, weather.country)),
        Line::from(capitalize_words(&weather.description)).fg(Color::Gray),
    ];
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        chunks[0],
    );

    let cards = [
        ("Humidity", format!("{}%", weather.humidity)),
        ("Wind Speed", format!("{} m/s", weather.wind_speed)),
        ("Feels Like", format!("{}°C", weather.rounded_feels_like())),
        ("Cloudiness", format!("{}%", weather.cloudiness)),
    ];
    for (row, pair) in cards.chunks(2).enumerate() {
        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1 + row]);
        for (column, (label, value)) in pair.iter().enumerate() {
            render_card(frame, columns[column], label, value);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let card = Paragraph::new(vec![
        Line::from(label.to_string()).fg(Color::Gray),
        Line::from(value.to_string()).bold(),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_type(BorderType::Rounded));
    frame.render_widget(card, area);
}

/// Upper-case the first letter of every word ("light rain" -> "Light Rain").
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
