use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Line,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle, TextInput, TextInputProps, TextInputStyle,
    highlight_substring,
};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Search for a city...";

/// Rows taken by the input box.
const INPUT_HEIGHT: u16 = 3;

pub struct SearchBar {
    input: TextInput,
    list: SelectList,
    /// Dropdown rows from the last render, for mouse hit-testing.
    rows: Option<Rect>,
}

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    pub suggestions: &'a [String],
    pub highlighted: Option<usize>,
    pub is_focused: bool,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_highlight: fn(usize) -> Action,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            rows: None,
        }
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Height needed to show the input and the current dropdown.
    pub fn height(suggestion_count: usize) -> u16 {
        if suggestion_count == 0 {
            INPUT_HEIGHT
        } else {
            INPUT_HEIGHT + suggestion_count as u16 + 2
        }
    }

    /// Index of the dropdown row under the given cell, if any.
    pub fn suggestion_at(&self, column: u16, row: u16) -> Option<usize> {
        let rows = self.rows?;
        let inside = column >= rows.x
            && column < rows.right()
            && row >= rows.y
            && row < rows.bottom();
        inside.then(|| usize::from(row - rows.y))
    }

    fn suggestion_items(suggestions: &[String], query: &str) -> Vec<Line<'static>> {
        let base = Style::default().fg(Color::Reset);
        let highlight = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        suggestions
            .iter()
            .map(|label| highlight_substring(label, query, base, highlight))
            .collect()
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Enter => {
                // A highlighted suggestion wins over the typed text
                let selected = props
                    .highlighted
                    .and_then(|index| props.suggestions.get(index));
                return match selected {
                    Some(label) => vec![Action::SuggestionSelect(label.clone())],
                    None => vec![Action::QuerySubmit],
                };
            }
            KeyCode::Down => {
                let last = props.suggestions.len().saturating_sub(1);
                return match props.highlighted {
                    _ if props.suggestions.is_empty() => Vec::new(),
                    None => vec![(props.on_highlight)(0)],
                    Some(index) if index < last => vec![(props.on_highlight)(index + 1)],
                    Some(_) => Vec::new(),
                };
            }
            KeyCode::Up => {
                return match props.highlighted {
                    Some(index) if index > 0 => vec![(props.on_highlight)(index - 1)],
                    _ => Vec::new(),
                };
            }
            _ => {}
        }

        // All other keys go to the input
        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_query_change,
            on_submit: |_| Action::QuerySubmit,
            on_cursor_move: None,
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT), // Input
            Constraint::Min(0),               // Suggestions
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(50, 50, 60)),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_query_change,
            on_submit: |_| Action::QuerySubmit,
            on_cursor_move: None,
        };
        self.input.render(frame, chunks[0], input_props);

        self.rows = None;
        if props.suggestions.is_empty() {
            return;
        }

        let items = Self::suggestion_items(props.suggestions, props.query);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.highlighted.unwrap_or(0),
            is_focused: props.is_focused && props.highlighted.is_some(),
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(Color::Rgb(35, 35, 45)),
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior::default(),
            on_select: props.on_highlight,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, chunks[1], list_props);

        // Padding::all(1) puts the first item one cell in from the top-left
        let padded = chunks[1].inner(Margin::new(1, 1));
        let visible = (props.suggestions.len() as u16).min(padded.height);
        self.rows = Some(Rect {
            height: visible,
            ..padded
        });
    }
}
