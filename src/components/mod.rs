pub mod search_bar;
pub mod weather_panel;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_panel::{ERROR_ICON, WeatherPanel, WeatherPanelProps};
