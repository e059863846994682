//! Header showing the study title, assigned group and participant id

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};
use crate::flow::content::STUDY_TITLE;
use crate::flow::Step;
use crate::session::{ParticipantSession, SessionOrigin};

pub struct SessionHeader<'a> {
    session: &'a ParticipantSession,
    origin: SessionOrigin,
    step: Step,
    show_participant_id: bool,
}

impl<'a> SessionHeader<'a> {
    pub fn new(session: &'a ParticipantSession, origin: SessionOrigin, step: Step) -> Self {
        Self {
            session,
            origin,
            step,
            show_participant_id: true,
        }
    }

    pub fn show_participant_id(mut self, show: bool) -> Self {
        self.show_participant_id = show;
        self
    }
}

impl Widget for SessionHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let progress = format!("Step {}/{}", self.step.position(), Step::all().len());
        let title = Line::from(vec![
            Span::styled(
                STUDY_TITLE,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {progress}"), Style::default().fg(TEXT_FAINT)),
        ]);
        buf.set_line(area.x, area.y, &title, area.width);

        if area.height < 2 {
            return;
        }
        let mut group_spans = vec![
            Span::styled("Group: ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                self.session.group.label(),
                Style::default().fg(ACCENT_PRIMARY),
            ),
            Span::styled(" (test)", Style::default().fg(TEXT_MUTED)),
        ];
        if self.origin == SessionOrigin::Ephemeral {
            group_spans.push(Span::styled(
                "  not saved",
                Style::default().fg(TEXT_FAINT),
            ));
        }
        buf.set_line(area.x, area.y + 1, &Line::from(group_spans), area.width);

        if self.show_participant_id && area.height >= 3 {
            let id = Line::from(Span::styled(
                format!("ID: {}", self.session.participant_id),
                Style::default().fg(TEXT_FAINT),
            ));
            buf.set_line(area.x, area.y + 2, &id, area.width);
        }
    }
}
