//! Calculator screen rendering

use crate::controller::Rendered;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the screen: the display value on top, the memory register below.
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rendered: &Rendered,
    is_error: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::horizontal(1));

    let value_style = if is_error {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
    };

    let value_line = Line::from(Span::styled(rendered.display.clone(), value_style))
        .alignment(Alignment::Right);

    let memory_line = Line::from(vec![
        Span::styled(" M ", Style::default().bg(DEFAULT_THEME.memory).fg(Color::Black)),
        Span::styled(
            format!(" {}", rendered.memory),
            Style::default().fg(Color::Black),
        ),
    ])
    .alignment(Alignment::Left);

    let paragraph = Paragraph::new(vec![value_line, memory_line])
        .block(block)
        .style(Style::default().bg(DEFAULT_THEME.screen_bg));

    frame.render_widget(paragraph, area);
}
