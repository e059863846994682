//! Top-level frame layout

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::config::Config;
use crate::flow::content::LOADING_TEXT;
use crate::ui::app_state::AppState;
use crate::ui::components::theme::TEXT_MUTED;
use crate::ui::components::{
    render_key_hints, KeyHintBarStyle, SessionHeader, StepPanel,
};

const MAX_CONTENT_WIDTH: u16 = 80;

pub fn draw(frame: &mut Frame, state: &AppState, config: &Config) {
    let area = frame.area();
    render(area, frame.buffer_mut(), state, config);
}

/// Render the whole screen into `buf`
pub fn render(area: Rect, buf: &mut Buffer, state: &AppState, config: &Config) {
    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let width = main_area.width.min(MAX_CONTENT_WIDTH);
    let [_, content, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(main_area);

    match &state.session {
        None => {
            let [_, loading, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(content);
            Paragraph::new(Line::from(state.spinner.with_label(LOADING_TEXT, TEXT_MUTED)))
                .alignment(Alignment::Center)
                .render(loading, buf);
        }
        Some(resolved) => {
            let [header_area, _, panel_area] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(5),
            ])
            .areas(content);

            SessionHeader::new(&resolved.session, resolved.origin, state.flow.step)
                .show_participant_id(config.show_participant_id)
                .render(header_area, buf);
            StepPanel::new(state.flow, resolved.session.group, &state.quiz)
                .render(panel_area, buf);
        }
    }

    render_key_hints(
        footer_area,
        buf,
        &state.key_hints(),
        KeyHintBarStyle::footer_bar(),
    );
}
