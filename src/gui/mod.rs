pub mod actions;
pub mod app;
pub mod card_panel;
pub mod error_modal;
pub mod message_overlay;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::KiokuApp;
pub use settings::SettingsData;
