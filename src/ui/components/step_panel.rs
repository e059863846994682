//! Panel for the current wizard step

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::{
    ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, SURFACE_BG, TEXT_FAINT, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::flow::content::{self, chat_message, forward_label, step_title};
use crate::flow::{FlowAction, FlowState, Step};
use crate::session::Group;
use crate::ui::app_state::QuizState;

pub struct StepPanel<'a> {
    flow: FlowState,
    group: Group,
    quiz: &'a QuizState,
}

impl<'a> StepPanel<'a> {
    pub fn new(flow: FlowState, group: Group, quiz: &'a QuizState) -> Self {
        Self { flow, group, quiz }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let body = Style::default().fg(TEXT_SECONDARY);
        let heading = Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD);

        match self.flow.step {
            Step::Consent => {
                let mark = if self.flow.consented { "[x]" } else { "[ ]" };
                let mark_style = if self.flow.consented {
                    Style::default().fg(ACCENT_SUCCESS)
                } else {
                    Style::default().fg(TEXT_MUTED)
                };
                vec![
                    Line::styled(content::CONSENT_BODY, body),
                    Line::default(),
                    Line::from(vec![
                        Span::styled(mark, mark_style),
                        Span::raw(" "),
                        Span::styled(content::CONSENT_LABEL, Style::default().fg(TEXT_PRIMARY)),
                    ]),
                ]
            }
            Step::Read => vec![
                Line::styled(content::READ_BODY, body),
                Line::default(),
                Line::styled(content::READ_SAMPLE_HEADING, heading),
                Line::styled(content::READ_SAMPLE, body),
            ],
            Step::Chat => vec![
                Line::styled(content::CHAT_BODY, body),
                Line::default(),
                Line::styled(content::CHAT_DEMO_HEADING, heading),
                Line::styled(chat_message(self.group), Style::default().fg(TEXT_PRIMARY)),
            ],
            Step::Quiz => {
                let mut lines = vec![
                    Line::styled(content::QUIZ_BODY, body),
                    Line::default(),
                    Line::styled(content::QUIZ_QUESTION, heading),
                ];
                for (i, option) in content::QUIZ_OPTIONS.iter().enumerate() {
                    let radio = if self.quiz.selected == Some(i) {
                        "(•)"
                    } else {
                        "( )"
                    };
                    let style = if self.quiz.cursor == i {
                        Style::default().fg(ACCENT_PRIMARY).bg(SURFACE_BG)
                    } else {
                        body
                    };
                    lines.push(Line::styled(format!("{radio} {option}"), style));
                }
                lines
            }
            Step::Done => vec![Line::styled(content::DONE_BODY, body)],
        }
    }

    fn button_line(&self) -> Line<'static> {
        let enabled = Style::default().fg(TEXT_PRIMARY).bg(SURFACE_BG);
        let disabled = Style::default().fg(TEXT_FAINT);
        let mut spans = Vec::new();

        if self.flow.step.previous().is_some() {
            spans.push(Span::styled(" ← Back ", enabled));
            spans.push(Span::raw("   "));
        }

        match forward_label(self.flow.step) {
            Some(label) => {
                let style = if self.flow.allows(FlowAction::Forward) {
                    enabled.add_modifier(Modifier::BOLD)
                } else {
                    disabled
                };
                spans.push(Span::styled(format!(" {label} → "), style));
            }
            None => spans.push(Span::styled(" Start over ", enabled)),
        }

        Line::from(spans)
    }
}

impl Widget for StepPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", step_title(self.flow.step)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT));
        let inner = block.inner(area);
        block.render(area, buf);

        let [body_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: true })
            .render(body_area, buf);
        Paragraph::new(self.button_line()).render(buttons_area, buf);
    }
}
