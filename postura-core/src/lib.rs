pub mod mock;
pub mod posture;
pub mod settings;
pub mod theme;

// Re-export the reading types so users can just use `postura_core::PostureReading`
pub use posture::{PostureReading, PostureStatus};

// Re-export the theme selector for the UI
pub use theme::ThemeName;
