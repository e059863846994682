//! Key hint footer rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub disabled_style: Style,
    pub item_gap: &'static str,
    pub leading: &'static str,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar() -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            action_style: Style::default().fg(TEXT_MUTED),
            disabled_style: Style::default().fg(TEXT_FAINT),
            item_gap: "   ",
            leading: " ",
            alignment: Alignment::Left,
            background: Some(FOOTER_BG),
        }
    }
}

/// A single footer hint; disabled hints render faded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
    pub enabled: bool,
}

impl KeyHint {
    pub fn new(key: &'static str, action: &'static str) -> Self {
        Self {
            key,
            action,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[KeyHint], style: KeyHintBarStyle) {
    let mut spans = Vec::new();

    if !style.leading.is_empty() {
        spans.push(Span::raw(style.leading));
    }

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 && !style.item_gap.is_empty() {
            spans.push(Span::raw(style.item_gap));
        }

        let (key_style, action_style) = if hint.enabled {
            (style.key_style, style.action_style)
        } else {
            (style.disabled_style, style.disabled_style)
        };
        spans.push(Span::styled(format!(" {} ", hint.key), key_style));
        spans.push(Span::styled(format!(" {}", hint.action), action_style));
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }

    paragraph.render(area, buf);
}
