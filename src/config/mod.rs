/// Menu card loading from menu.toml
pub mod menu;

/// File locations from environment variables
pub mod settings;

pub use menu::Menu;
pub use settings::Settings;
