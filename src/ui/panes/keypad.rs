//! Keypad grid rendering

use crate::ui::keypad::{Keypad, Position};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the button grid.
///
/// The button under the cursor gets the focus border; `flashed` is the
/// button most recently pressed and is drawn reversed for a moment.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    keypad: &Keypad,
    flashed: Option<Position>,
) {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = keypad.rows();
    if rows.is_empty() {
        return;
    }

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows.len() as u32); rows.len()])
        .split(inner);

    for (r, (buttons, row_area)) in rows.iter().zip(row_areas.iter()).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, buttons.len() as u32); buttons.len()])
            .split(*row_area);

        for (c, (button, cell)) in buttons.iter().zip(cells.iter()).enumerate() {
            let is_cursor = keypad.cursor() == (r, c);

            let border_style = if is_cursor {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.border_normal)
            };

            let mut style = Style::default()
                .bg(DEFAULT_THEME.button(button.kind))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD);
            if flashed == Some((r, c)) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            // Pad above the label so it sits roughly mid-button
            let top_pad = cell.height.saturating_sub(3) / 2;
            let mut text = "\n".repeat(top_pad as usize);
            text.push_str(button.label);

            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(paragraph, *cell);
        }
    }
}
