//! Small drawing helpers shared by the renderer.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Draws a single-line bar. The style covers the whole row, not only the text.
pub fn draw_bar(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    frame.render_widget(Paragraph::new(Span::raw(text)).style(style), area);
}

/// Draws a horizontal rule across `area`.
pub fn draw_rule(frame: &mut Frame, area: Rect, style: Style) {
    frame.render_widget(
        Block::default().borders(Borders::TOP).border_style(style),
        area,
    );
}
