//! Fixed reference panel listing the command vocabulary.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::command::{
    ADD_USAGE, ADVANCE_USAGE, CLEAR_USAGE, CONDITION_USAGE, MODE_USAGE, MODIFY_USAGE, ROLL_USAGE,
};
use crate::tui::theme::Theme;

/// `(label, syntax)` per command, in display order.
pub const ENTRIES: &[(&str, &str)] = &[
    ("Add", ADD_USAGE),
    ("Remove", "remove, name"),
    ("Condition", CONDITION_USAGE),
    ("Advance", ADVANCE_USAGE),
    ("Remove cond.", "remove, condition, target[, condition]"),
    ("Clear cond.", CLEAR_USAGE),
    ("Initiative", ROLL_USAGE),
    ("Modify", MODIFY_USAGE),
    ("Theme", MODE_USAGE),
    ("Quit", "quit  (or Ctrl+C)"),
];

const LABEL_WIDTH: usize = 13;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = theme
        .block_default("Command Key")
        .style(theme.base().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = ENTRIES
        .iter()
        .enumerate()
        .map(|(i, (label, syntax))| {
            Line::from(vec![
                Span::styled(
                    format!(" {}. {:<width$}", i + 1, label, width = LABEL_WIDTH),
                    theme.heading(),
                ),
                Span::styled(*syntax, theme.text()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
