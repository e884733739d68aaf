//! UI renderer implementation.
//!
//! [Screen::project] turns a [Navigator] snapshot and the terminal size into the
//! exact strings that end up on screen. [render] draws that projection with ratatui.
//! Nothing here mutates navigator state.

use crate::app::Navigator;
use crate::core::fm;
use crate::ui::widgets;
use crate::utils::clip_to_width;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Rows used by the header, the separator and the footer.
pub const CHROME_ROWS: u16 = 3;

pub const TITLE: &str = "RMTK";
pub const NO_MATCHES: &str = "No matching files";
pub const NO_FILES: &str = "No files in this directory";
pub const FOOTER_HELP: &str = " ↑/k: Up | ↓/j: Down | gg: Top | G: Bottom | Ctrl+U/D: Half Page | /: Search | Enter: Open | Esc: Exit Search | q: Quit ";

const SELECTION_MARKER: &str = "> ";
const INDENT: &str = "  ";

/// Number of entry rows that fit in a terminal of the given height.
#[inline]
pub fn viewport_height(terminal_height: u16) -> usize {
    terminal_height.saturating_sub(CHROME_ROWS) as usize
}

/// One visible entry row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Entries(Vec<Row>),
    Empty(String),
}

/// Everything drawn in one frame, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub header: String,
    pub body: Body,
    pub footer: String,
    /// The footer carries a status message instead of the key help.
    pub is_status: bool,
}

impl Screen {
    /// Projects the navigator onto a `width` x `height` character grid.
    ///
    /// Directory entries get a trailing `/`; a failed lookup is treated as a plain file.
    pub fn project(nav: &Navigator, width: u16, height: u16, status: Option<&str>) -> Self {
        let width = width as usize;
        let rows = viewport_height(height);

        let header = if nav.is_searching() {
            format!(
                " {} - {} [Search: {}] ",
                TITLE,
                nav.current_dir().display(),
                nav.query()
            )
        } else {
            format!(" {} - {} ", TITLE, nav.current_dir().display())
        };

        let displayed = nav.displayed();
        let body = if displayed.is_empty() {
            let msg = if nav.query().is_empty() {
                NO_FILES
            } else {
                NO_MATCHES
            };
            Body::Empty(clip_to_width(&format!("{INDENT}{msg}"), width))
        } else {
            // The navigator keeps at least one row; a terminal shorter than the chrome has none.
            let entries = nav
                .visible()
                .iter()
                .take(rows)
                .enumerate()
                .map(|(i, entry)| {
                    let selected = nav.offset() + i == nav.cursor();
                    let mut label = String::from(if selected { SELECTION_MARKER } else { INDENT });
                    label.push_str(&entry.name_str());
                    if fm::is_dir(&nav.current_dir().join(entry.name())) {
                        label.push('/');
                    }
                    Row {
                        label: clip_to_width(&label, width),
                        selected,
                    }
                })
                .collect();
            Body::Entries(entries)
        };

        let (footer, is_status) = match status {
            Some(msg) => (format!(" {msg} "), true),
            None => (FOOTER_HELP.to_string(), false),
        };

        Screen {
            header: clip_to_width(&header, width),
            body,
            footer: clip_to_width(&footer, width),
            is_status,
        }
    }
}

/// Renders the whole browser for the current frame.
pub fn render(frame: &mut Frame, nav: &Navigator, status: Option<&str>) {
    let area = frame.area();
    let screen = Screen::project(nav, area.width, area.height, status);
    draw_screen(frame, area, &screen);
}

/// Splits `area` into header, separator, list and footer rows.
pub fn layout_chunks(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area)
        .to_vec()
}

fn draw_screen(frame: &mut Frame, area: Rect, screen: &Screen) {
    let chunks = layout_chunks(area);
    let bar_style = Style::default().add_modifier(Modifier::REVERSED);

    widgets::draw_bar(frame, chunks[0], &screen.header, bar_style);
    widgets::draw_rule(frame, chunks[1], Style::default().fg(Color::White));

    match &screen.body {
        Body::Entries(rows) => {
            let lines: Vec<Line> = rows
                .iter()
                .map(|row| {
                    if row.selected {
                        Line::from(Span::styled(row.label.as_str(), bar_style))
                    } else {
                        Line::from(Span::raw(row.label.as_str()))
                    }
                })
                .collect();
            frame.render_widget(Paragraph::new(lines), chunks[2]);
        }
        Body::Empty(msg) => {
            frame.render_widget(
                Paragraph::new(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
                chunks[2],
            );
        }
    }

    let footer_style = if screen.is_status {
        Style::default().fg(Color::Red)
    } else {
        bar_style
    };
    widgets::draw_bar(frame, chunks[3], &screen.footer, footer_style);
}
