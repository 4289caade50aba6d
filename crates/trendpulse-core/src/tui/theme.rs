//! Colors and glyphs
//!
//! Every lookup is an exhaustive `match`, so a new platform or status cannot
//! render unstyled.

use ratatui::style::{Color, Style};

use crate::models::{AgentStatus, DraftStatus, Growth, Platform, PostStatus, Sentiment};

/// Main colors
pub const PRIMARY: Color = Color::Cyan;
pub const SECONDARY: Color = Color::Magenta;
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const INFO: Color = Color::Blue;
pub const ERROR: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;

/// Style for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStyle {
    pub color: Color,
    pub glyph: &'static str,
}

pub fn platform_style(platform: Platform) -> PlatformStyle {
    let (color, glyph) = match platform {
        Platform::LinkedIn => (Color::Rgb(10, 102, 194), "in"),
        Platform::Instagram => (Color::Rgb(225, 48, 108), "ig"),
        Platform::Twitter => (Color::Rgb(29, 161, 242), "tw"),
        Platform::TikTok => (Color::Rgb(238, 29, 82), "tt"),
        Platform::YouTube => (Color::Rgb(255, 0, 0), "yt"),
        Platform::Reddit => (Color::Rgb(255, 69, 0), "rd"),
    };
    PlatformStyle { color, glyph }
}

pub fn agent_status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Active => SUCCESS,
        AgentStatus::Inactive => MUTED,
        AgentStatus::Error => ERROR,
    }
}

pub fn draft_status_color(status: DraftStatus) -> Color {
    match status {
        DraftStatus::Draft => WARNING,
        DraftStatus::Approved => SUCCESS,
        DraftStatus::Scheduled => INFO,
    }
}

/// Color and status glyph for a scheduled post
pub fn post_status_style(status: PostStatus) -> (Color, &'static str) {
    match status {
        PostStatus::Pending => (WARNING, "◷"),
        PostStatus::Posting => (INFO, "➤"),
        PostStatus::Posted => (SUCCESS, "✓"),
        PostStatus::Failed => (ERROR, "✗"),
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => SUCCESS,
        Sentiment::Negative => ERROR,
        Sentiment::Neutral => MUTED,
    }
}

pub fn growth_color(growth: &Growth) -> Color {
    if growth.is_decline() {
        ERROR
    } else {
        SUCCESS
    }
}

pub fn border_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn selected_style() -> Style {
    Style::default().bg(Color::DarkGray)
}
