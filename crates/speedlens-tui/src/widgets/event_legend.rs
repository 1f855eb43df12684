//! Event legend widget
//!
//! Lists the timeline event types found in the capture with their color
//! swatch, count and total time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};
use speedlens_core::event_record::label_for_code;
use speedlens_core::{format_milliseconds, TypeSummary};

use super::truncate_str;
use crate::theme::{event_colors, palette, styles};

const LABEL_WIDTH: usize = 24;

pub struct EventLegend<'a> {
    summaries: &'a [TypeSummary],
}

impl<'a> EventLegend<'a> {
    pub fn new(summaries: &'a [TypeSummary]) -> Self {
        Self { summaries }
    }
}

impl Widget for EventLegend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(" Events ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        for (offset, summary) in self
            .summaries
            .iter()
            .take(inner.height as usize)
            .enumerate()
        {
            let y = inner.y + offset as u16;
            let color = event_colors::color_for_type(summary.type_code);
            buf.set_string(inner.x + 1, y, "██", Style::default().fg(color));

            let text = format!(
                "{:<label$} {:>6}  {:>10}",
                truncate_str(&label_for_code(summary.type_code), LABEL_WIDTH),
                summary.count,
                format_milliseconds(summary.total_duration),
                label = LABEL_WIDTH,
            );
            let width = inner.width.saturating_sub(4) as usize;
            buf.set_string(
                inner.x + 4,
                y,
                truncate_str(&text, width),
                styles::text_primary(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buf_contains, render_to_buf};
    use ratatui::style::Color;
    use speedlens_core::EventRecordType;

    fn summary(kind: EventRecordType, count: usize, total: f64) -> TypeSummary {
        TypeSummary {
            type_code: kind.code(),
            count,
            total_duration: total,
        }
    }

    #[test]
    fn test_legend_lists_types_with_totals() {
        let summaries = vec![
            summary(EventRecordType::Layout, 3, 42.0),
            summary(EventRecordType::Paint, 1, 5.0),
        ];
        let buf = render_to_buf(EventLegend::new(&summaries), 60, 4);

        assert!(buf_contains(&buf, "Events"));
        assert!(buf_contains(&buf, "Layout"));
        assert!(buf_contains(&buf, "42ms"));
        assert!(buf_contains(&buf, "Paint"));
    }

    #[test]
    fn test_swatch_uses_event_color() {
        let summaries = vec![summary(EventRecordType::Layout, 1, 1.0)];
        let buf = render_to_buf(EventLegend::new(&summaries), 60, 3);

        assert_eq!(buf[(2, 1)].fg, Color::Rgb(138, 43, 226));
    }

    #[test]
    fn test_unknown_type_uses_fallback_color() {
        let summaries = vec![TypeSummary {
            type_code: 99,
            count: 1,
            total_duration: 1.0,
        }];
        let buf = render_to_buf(EventLegend::new(&summaries), 60, 3);

        assert!(buf_contains(&buf, "Other (99)"));
        assert_eq!(buf[(2, 1)].fg, Color::Rgb(211, 211, 211));
    }
}
