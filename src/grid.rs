use egui::{Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};

/// Grid overlay configuration. Pure rendering helper; the grid has no
/// interaction semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Spacing between guide lines in points, 20..=100 in steps of 10.
    pub size: u32,
    pub visible: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 50,
            visible: false,
        }
    }
}

impl GridSettings {
    /// Evenly spaced vertical then horizontal guide segments covering `rect`.
    ///
    /// Lines start at the rect's own origin, so the grid is stable under
    /// window resizes but not tied to any world coordinate system.
    pub fn lines(&self, rect: Rect) -> Vec<[Pos2; 2]> {
        let step = self.size.max(1) as f32;
        let mut lines = Vec::new();

        let mut x = rect.min.x;
        while x < rect.max.x {
            lines.push([pos2(x, rect.min.y), pos2(x, rect.max.y)]);
            x += step;
        }
        let mut y = rect.min.y;
        while y < rect.max.y {
            lines.push([pos2(rect.min.x, y), pos2(rect.max.x, y)]);
            y += step;
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_matches_spacing() {
        let grid = GridSettings {
            size: 50,
            visible: true,
        };
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 100.0));
        let lines = grid.lines(rect);
        // 4 vertical (x = 0, 50, 100, 150) + 2 horizontal (y = 0, 50).
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn segments_span_the_viewport() {
        let grid = GridSettings {
            size: 20,
            visible: true,
        };
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 50.0));
        for [a, b] in grid.lines(rect) {
            // Each segment is axis-aligned and runs edge to edge.
            assert!(a.x == b.x || a.y == b.y);
            assert!(rect.contains(a));
        }
    }
}
