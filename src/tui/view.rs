//! Render the grid model with ratatui
//!
//! The cursor cell is drawn reversed in the theme's selection color; the
//! footer totals are bold; a failed-save notice goes red under the grid.
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::ThemeConfig;

use super::grid::{CellStyle, GridModel, GridRow};

const SEPARATOR: &str = " | ";

fn row_line<'a>(row: &'a GridRow, base: Style, cursor_style: Style) -> Line<'a> {
    let mut spans = vec![Span::styled(row.label.as_str(), base)];
    for cell in &row.cells {
        spans.push(Span::styled(SEPARATOR, Style::default()));
        let style = match cell.style {
            CellStyle::Cursor => cursor_style,
            CellStyle::Normal => base,
        };
        spans.push(Span::styled(cell.text.as_str(), style));
    }
    Line::from(spans)
}

pub fn draw(frame: &mut Frame, model: &GridModel, theme: &ThemeConfig) {
    let cursor_style = Style::default()
        .fg(theme.selection_fg)
        .add_modifier(Modifier::REVERSED);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(model.rows.len() + 8);
    lines.push(Line::from(Span::styled(model.title.as_str(), bold)));
    lines.push(row_line(&model.header, bold, cursor_style));
    lines.push(Line::from("─".repeat(model.width())));
    for row in &model.rows {
        lines.push(row_line(row, Style::default(), cursor_style));
    }
    lines.push(Line::from("─".repeat(model.width())));
    for footer in &model.footers {
        lines.push(row_line(footer, bold, cursor_style));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        model.hint.as_str(),
        Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
    )));
    if let Some(notice) = &model.notice {
        lines.push(Line::from(Span::styled(
            notice.as_str(),
            Style::default()
                .fg(theme.notice_fg)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let area: Rect = frame.area();
    frame.render_widget(Paragraph::new(lines), area);
}
