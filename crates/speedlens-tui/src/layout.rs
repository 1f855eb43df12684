//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Most legend rows shown at once
pub const MAX_LEGEND_ROWS: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title + capture name + keybindings
    pub header: Rect,
    /// Pillboxes and their details panels
    pub list: Rect,
    /// Event legend, when shown
    pub legend: Option<Rect>,
    pub status: Rect,
}

/// Create the main screen layout.
///
/// `legend_rows` is the number of event types to list; 0 hides the legend.
pub fn create(area: Rect, legend_rows: usize) -> ScreenAreas {
    let legend_height = match legend_rows {
        0 => 0,
        n => (n as u16).min(MAX_LEGEND_ROWS) + 2,
    };

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(3)];
    if legend_height > 0 {
        constraints.push(Constraint::Length(legend_height));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::vertical(constraints).split(area);

    if legend_height > 0 {
        ScreenAreas {
            header: chunks[0],
            list: chunks[1],
            legend: Some(chunks[2]),
            status: chunks[3],
        }
    } else {
        ScreenAreas {
            header: chunks[0],
            list: chunks[1],
            legend: None,
            status: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_legend() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 0);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.list.y, 3);
        assert_eq!(layout.list.height, 20);
        assert!(layout.legend.is_none());
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_with_legend() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, 3);

        let legend = layout.legend.unwrap();
        assert_eq!(legend.height, 5);
        assert_eq!(layout.list.height, 15);
        assert_eq!(legend.y, layout.list.bottom());
    }

    #[test]
    fn test_legend_height_is_capped() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = create(area, 20);

        assert_eq!(layout.legend.unwrap().height, MAX_LEGEND_ROWS + 2);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for rows in [0, 2, 8] {
            let layout = create(area, rows);
            let legend = layout.legend.map_or(0, |r| r.height);
            assert_eq!(
                layout.header.height + layout.list.height + legend + layout.status.height,
                area.height
            );
        }
    }
}
