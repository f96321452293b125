use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::id::ShapeId;

/// Dash pattern applied to a stroke when it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineType {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineType {
    /// (dash length, gap length) in points, or `None` for a solid line.
    pub fn dash_pattern(&self) -> Option<(f32, f32)> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some((10.0, 5.0)),
            Self::Dotted => Some((1.0, 5.0)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Dashed => "Dashed",
            Self::Dotted => "Dotted",
        }
    }
}

/// Pen styling snapshotted onto a stroke at creation time.
///
/// Later changes to the tool settings only affect new strokes; an existing
/// stroke keeps the style it was drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub line_type: LineType,
    /// Pen width in points, 1..=10.
    pub pen_size: u32,
    pub color: Color32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_type: LineType::Solid,
            pen_size: 5,
            // #df4b26
            color: Color32::from_rgb(0xdf, 0x4b, 0x26),
        }
    }
}

/// One freehand or straight line annotation.
///
/// Points grow while the stroke is being drawn; whatever has accumulated at
/// pointer-up is final. A stroke always has at least its origin point.
#[derive(Debug, Clone)]
pub struct Stroke {
    id: ShapeId,
    points: Vec<Pos2>,
    style: StrokeStyle,
}

impl Stroke {
    pub fn new(id: ShapeId, origin: Pos2, style: StrokeStyle) -> Self {
        Self {
            id,
            points: vec![origin],
            style,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Append a sampled pointer position (free-draw accumulation).
    pub fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Collapse the stroke to `[origin, point]` (straight-line rubber band).
    ///
    /// Intermediate samples from earlier moves are discarded; the stroke only
    /// ever shows its start and the current cursor position.
    pub fn rubber_band(&mut self, point: Pos2) {
        self.points.truncate(1);
        self.points.push(point);
    }

    /// Offset every point by `delta` (drag write-back).
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }

    /// Axis-aligned bounding box of the polyline, padded by `padding` plus
    /// half the pen width so thick strokes stay inside their box.
    pub fn bounding_rect(&self, padding: f32) -> Rect {
        let mut rect = Rect::NOTHING;
        for point in &self.points {
            rect.extend_with(*point);
        }
        rect.expand(padding + self.style.pen_size as f32 / 2.0)
    }
}
