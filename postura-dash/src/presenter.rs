//! Live card rendering.
//!
//! The terminal stands in for the mobile card: one line per published
//! reading, tinted by status, with the live dot while the link is open.
//! A reading is rendered from a single value, so the card can never show
//! a percentage from one frame next to a status from another.

use crossterm::style::{Color, Stylize};
use postura_core::theme::{self, Rgb};
use postura_core::{PostureReading, PostureStatus};
use postura_link::LinkState;

/// The Posture Presenter. Purely reactive: it draws whatever reading it
/// is handed and has no say over the connection lifecycle.
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    pub fn new() -> Self {
        Self
    }

    /// Draw one reading as a colored card line.
    pub fn render(&self, reading: &PostureReading, state: LinkState) {
        let line = card_text(reading, state);
        println!("{}", line.with(status_style(reading.status)));
    }

    /// Print an assistant reply under the card.
    pub fn chat_line(&self, reply: &str) {
        println!("  ✨ {}", reply);
    }
}

/// Plain text of the card line, e.g. `  82%  Straight  ● Live Tracking`.
pub fn card_text(reading: &PostureReading, state: LinkState) -> String {
    format!(
        "  {:>3}%  {}  {}",
        reading.percentage,
        reading.status.label(),
        live_indicator(state),
    )
}

/// The live-tracking dot under the percentage readout.
pub fn live_indicator(state: LinkState) -> &'static str {
    match state {
        LinkState::Open => "● Live Tracking",
        LinkState::Idle | LinkState::Connecting => "○ Connecting…",
        LinkState::Closed => "○ Offline",
    }
}

fn status_style(status: PostureStatus) -> Color {
    let Rgb(r, g, b) = theme::status_color(status);
    Color::Rgb { r, g, b }
}
