//! Participant roster: one summary per participant followed by its active
//! conditions as indented sub-lines.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::encounter::{capitalize, Condition, EncounterState, Participant};
use crate::tui::theme::Theme;
use crate::tui::widgets::wrap::wrap_text;

const CONDITION_INDENT: &str = "  - ";
const CONTINUATION_INDENT: &str = "    ";
const OTHER_TARGETS: &str = "Other targets:";

pub fn summary_text(p: &Participant) -> String {
    let initiative = p
        .initiative
        .map(|i| i.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "{} | HP: {} | AC: {} | Initiative: {}",
        p.name, p.health, p.armor_class, initiative
    )
}

pub fn condition_text(c: &Condition) -> String {
    format!(
        "{}: {}, {} Turns Remaining",
        capitalize(&c.name),
        capitalize(&c.effect),
        c.remaining_turns
    )
}

/// Styled, wrapped roster lines for a panel `width` columns wide.
///
/// Conditions whose target is not a registered participant (unknown names,
/// or participants removed without cascading) follow under "Other targets:".
pub fn roster_lines(state: &EncounterState, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for participant in state.participants() {
        for row in wrap_text(&summary_text(participant), width) {
            lines.push(Line::from(Span::styled(row, theme.text())));
        }
        push_conditions(&mut lines, state.conditions_for(&participant.name), theme, width);
    }

    let orphans: Vec<&str> = state
        .condition_targets()
        .filter(|target| state.participant(target).is_none())
        .filter(|target| !state.conditions_for(target).is_empty())
        .collect();
    if !orphans.is_empty() {
        lines.push(Line::from(Span::styled(OTHER_TARGETS, theme.muted())));
        for target in orphans {
            for row in wrap_text(target, width) {
                lines.push(Line::from(Span::styled(row, theme.text())));
            }
            push_conditions(&mut lines, state.conditions_for(target), theme, width);
        }
    }

    lines
}

fn push_conditions(
    lines: &mut Vec<Line<'static>>,
    conditions: &[Condition],
    theme: &Theme,
    width: usize,
) {
    let inner_width = width.saturating_sub(CONDITION_INDENT.len());
    for condition in conditions {
        let rows = wrap_text(&condition_text(condition), inner_width);
        for (i, row) in rows.into_iter().enumerate() {
            let indent = if i == 0 { CONDITION_INDENT } else { CONTINUATION_INDENT };
            lines.push(Line::from(vec![
                Span::styled(indent, theme.muted()),
                Span::styled(row, Style::default().fg(theme.warning)),
            ]));
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &EncounterState, theme: &Theme) {
    let title = format!("Participants ({})", state.len());
    let block = theme.block_default(&title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = roster_lines(state, theme, inner.width as usize);
    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" No participants yet. Try ", theme.dim()),
                Span::styled("add, name, health, ac", theme.key_hint()),
            ])),
            inner,
        );
        return;
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
