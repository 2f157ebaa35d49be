//! Per-frame layout: title, roster, initiative order, input box, status line
//! and the command key panel. Recomputed from the terminal area every frame.

use ratatui::layout::{Constraint, Layout, Rect};

use super::views::command_key;

/// Width of the command key panel when it sits beside the roster.
pub const KEY_PANEL_WIDTH: u16 = 58;
/// Put the key panel on the right at or above this terminal width.
pub const SIDE_PANEL_THRESHOLD: u16 = 100;
/// Below this height (and width) the key panel is dropped.
pub const BOTTOM_PANEL_MIN_HEIGHT: u16 = 26;
/// Input box height including borders.
pub const INPUT_HEIGHT: u16 = 3;

/// Where the command key panel ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPlacement {
    Side,
    Bottom,
    Hidden,
}

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct EncounterLayout {
    pub title: Rect,
    pub roster: Rect,
    pub initiative: Rect,
    pub input: Rect,
    pub status: Rect,
    pub command_key: Option<Rect>,
    pub placement: KeyPlacement,
}

impl EncounterLayout {
    /// `initiative_rows` is the number of entries in the current order.
    pub fn compute(area: Rect, initiative_rows: usize) -> Self {
        let key_height = command_key::ENTRIES.len() as u16 + 2;
        let placement = if area.width >= SIDE_PANEL_THRESHOLD {
            KeyPlacement::Side
        } else if area.height >= BOTTOM_PANEL_MIN_HEIGHT {
            KeyPlacement::Bottom
        } else {
            KeyPlacement::Hidden
        };

        let rows = Layout::vertical([
            Constraint::Length(1),            // Title
            Constraint::Min(4),               // Body
            Constraint::Length(INPUT_HEIGHT), // Input
            Constraint::Length(1),            // Status
            Constraint::Length(if placement == KeyPlacement::Bottom {
                key_height
            } else {
                0
            }),
        ])
        .split(area);

        let (main, command_key) = match placement {
            KeyPlacement::Side => {
                let cols = Layout::horizontal([
                    Constraint::Min(20),
                    Constraint::Length(KEY_PANEL_WIDTH),
                ])
                .split(rows[1]);
                (cols[0], Some(cols[1]))
            }
            KeyPlacement::Bottom => (rows[1], Some(rows[4])),
            KeyPlacement::Hidden => (rows[1], None),
        };

        let wanted = initiative_rows.max(1) as u16 + 2;
        let initiative_height = wanted.min(main.height / 2).max(3u16.min(main.height));
        let body = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(initiative_height),
        ])
        .split(main);

        Self {
            title: rows[0],
            roster: body[0],
            initiative: body[1],
            input: rows[2],
            status: rows[3],
            command_key,
            placement,
        }
    }
}
