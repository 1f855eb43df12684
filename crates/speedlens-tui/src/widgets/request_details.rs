//! # Request Details Widget
//!
//! Renders the content of one open details panel: the hint tree followed by
//! the summary, request-header and response-header tables.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use speedlens_app::details::content::{ContentLine, TableRow};
use speedlens_app::details::hint_tree::TreeLine;
use speedlens_app::DetailPanel;

use super::truncate_str;
use crate::theme::styles::{self, RequestDetailsStyles};

/// Widget drawing the lines of a [`DetailPanel`].
///
/// `skip` drops lines off the top when the panel is scrolled partly out of
/// view; the area's height clips the bottom.
pub struct RequestDetails<'a> {
    panel: &'a DetailPanel,
    styles: &'a RequestDetailsStyles,
    skip: usize,
}

impl<'a> RequestDetails<'a> {
    pub fn new(panel: &'a DetailPanel, styles: &'a RequestDetailsStyles) -> Self {
        Self {
            panel,
            styles,
            skip: 0,
        }
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

impl Widget for RequestDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }
        buf.set_style(area, self.styles.container);

        let lines = self.panel.lines();
        for (offset, line) in lines
            .iter()
            .skip(self.skip)
            .take(area.height as usize)
            .enumerate()
        {
            let row = Rect {
                y: area.y + offset as u16,
                height: 1,
                ..area
            };
            match line {
                ContentLine::Hint(tree_line) => self.render_hint(tree_line, row, buf),
                ContentLine::SectionHeader(title) => {
                    buf.set_string(row.x + 1, row.y, *title, self.styles.section_header);
                }
                ContentLine::Row(table_row) => self.render_row(table_row, row, buf),
            }
        }
    }
}

impl RequestDetails<'_> {
    fn render_hint(&self, line: &TreeLine, row: Rect, buf: &mut Buffer) {
        let x = row.x + 1 + line.depth * 2;
        let width = row.right().saturating_sub(x) as usize;
        match line.expanded {
            Some(expanded) => {
                let glyph = if expanded { "▾ " } else { "▸ " };
                let text = format!("{}{}", glyph, line.text);
                buf.set_string(
                    x,
                    row.y,
                    truncate_str(&text, width),
                    styles::hint_severity(line.severity),
                );
            }
            None => {
                // Detail lines sit under the title text, past the glyph
                let x = x + 2;
                let width = width.saturating_sub(2);
                buf.set_string(
                    x,
                    row.y,
                    truncate_str(&line.text, width),
                    self.styles.hint_detail,
                );
            }
        }
    }

    fn render_row(&self, table_row: &TableRow, row: Rect, buf: &mut Buffer) {
        let base = if table_row.even {
            self.styles.container.patch(self.styles.even_row)
        } else {
            self.styles.container
        };
        buf.set_style(row, base);

        let name_x = row.x + 2;
        let name_width = self.styles.name_width.saturating_sub(1) as usize;
        buf.set_string(
            name_x,
            row.y,
            truncate_str(&table_row.name, name_width),
            base.patch(self.styles.name_cell),
        );

        let value_x = name_x + self.styles.name_width;
        if value_x >= row.right() {
            return;
        }
        let value_width = row.right().saturating_sub(value_x) as usize;
        buf.set_string(
            value_x,
            row.y,
            truncate_str(&table_row.value, value_width),
            base.patch(self.styles.value_cell),
        );
    }
}
