//! Initiative order panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::encounter::EncounterState;
use crate::tui::theme::Theme;

pub fn order_lines(state: &EncounterState, theme: &Theme) -> Vec<Line<'static>> {
    state
        .initiative_order()
        .into_iter()
        .enumerate()
        .map(|(i, (name, initiative))| {
            let name_style = if i == 0 {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            };
            Line::from(vec![
                Span::styled(format!("{name}: "), name_style),
                Span::styled(initiative.to_string(), Style::default().fg(theme.primary_light)),
            ])
        })
        .collect()
}

pub fn render(frame: &mut Frame, area: Rect, state: &EncounterState, theme: &Theme) {
    let block = theme.block_default("Initiative Order:");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = order_lines(state, theme);
    if lines.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Not rolled yet. Type ", theme.dim()),
                Span::styled("roll", theme.key_hint()),
            ])),
            inner,
        );
        return;
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
