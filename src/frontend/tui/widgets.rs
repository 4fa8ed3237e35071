//! Small rendering helpers shared by the menu and gameplay views

use super::palette::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub const TITLE: &str = "Guess the Number!";

/// Screen regions every view shares
pub struct ScreenAreas {
    pub title: Rect,
    pub answer: Rect,
    pub message: Rect,
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    pub fn split(area: Rect) -> Self {
        let [title, answer, message, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            title,
            answer,
            message,
            body,
            footer,
        }
    }
}

/// Paint the whole area in the background color
pub fn fill_background(area: Rect, buf: &mut Buffer, palette: &Palette) {
    Block::default()
        .style(Style::default().bg(palette.background).fg(palette.text))
        .render(area, buf);
}

/// Render one horizontally centered line
pub fn centered_line(line: Line<'_>, area: Rect, buf: &mut Buffer) {
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Title and the masked/revealed answer
pub fn render_header(answer: &str, areas: &ScreenAreas, buf: &mut Buffer, palette: &Palette) {
    let title_style = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    let [_, title_row, _] = Layout::vertical([Constraint::Length(1); 3]).areas(areas.title);
    centered_line(Line::styled(TITLE, title_style), title_row, buf);

    let answer_style = Style::default()
        .fg(palette.highlight)
        .add_modifier(Modifier::BOLD);
    centered_line(
        Line::styled(answer.to_string(), answer_style),
        Rect { height: 1, ..areas.answer },
        buf,
    );
}

/// A `[ label ]` button, highlighted when selected and dimmed when disabled
pub fn button(label: &str, selected: bool, enabled: bool, palette: &Palette) -> Span<'static> {
    let style = if !enabled {
        Style::default().fg(palette.text).add_modifier(Modifier::DIM)
    } else if selected {
        Style::default()
            .fg(palette.background)
            .bg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Key help shown on the last row
pub fn render_footer(help: &str, area: Rect, buf: &mut Buffer, palette: &Palette) {
    centered_line(
        Line::styled(
            help.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::ITALIC),
        ),
        area,
        buf,
    );
}

/// Rect of `width` columns centered in `area`
pub fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Flatten a buffer into one string per row (for assertions)
#[cfg(test)]
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect::<String>()
        })
        .collect()
}
