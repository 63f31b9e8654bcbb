//! The abstract drawing surface and a retained-geometry implementation.
//!
//! The interpreter only ever talks to the [`Canvas`] trait, so the same pass
//! can drive an HTML canvas shim, an SVG writer, a plotter backend, or the
//! in-crate [`PolylineCanvas`] which simply keeps the stroked geometry as
//! plain data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A stroke/mark style identifier referencing an external palette.
pub type StyleId = u8;

/// Minimal 2D drawing surface the interpreter draws against.
///
/// Calls arrive in the exact order symbols are interpreted; implementations
/// must not reorder them. The path model follows the familiar immediate-mode
/// canvas: `move_to` positions the pen, `line_to` extends the current
/// segment, `start_new_path` lifts the pen so the next `line_to` begins a
/// disconnected segment, and `stroke` commits everything drawn so far.
pub trait Canvas {
    /// Positions the pen without drawing.
    fn move_to(&mut self, p: Vec2);

    /// Extends the current path segment to `p`.
    fn line_to(&mut self, p: Vec2);

    /// Lifts the pen: the next `line_to` starts a fresh visible stroke.
    fn start_new_path(&mut self);

    /// Commits the accumulated path with the given style.
    fn stroke(&mut self, style: StyleId);

    /// Decoration hook: places a secondary mark (leaf, highlight) at `p`.
    /// Default is a no-op; backends opt in.
    fn mark_at(&mut self, p: Vec2, style: StyleId) {
        let _ = (p, style);
    }
}

/// A single committed pen stroke.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Vertices in draw order, starting at the pen-down position.
    pub points: Vec<Vec2>,

    /// Style the stroke was committed with.
    pub style: StyleId,
}

/// A decoration mark emitted through [`Canvas::mark_at`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub position: Vec2,
    pub style: StyleId,
}

/// Engine-agnostic [`Canvas`] implementation that retains geometry.
///
/// Collects every committed stroke as a [`Polyline`] and every decoration as
/// a [`Mark`], ready to hand to whatever rendering technology the caller
/// uses. Segments shorter than two points are discarded on commit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PolylineCanvas {
    /// Strokes committed so far.
    pub paths: Vec<Polyline>,

    /// Decoration marks emitted so far.
    pub marks: Vec<Mark>,

    #[serde(skip)]
    pending: Vec<Vec<Vec2>>,
    #[serde(skip)]
    current: Vec<Vec2>,
}

impl PolylineCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn lift(&mut self) {
        if self.current.len() >= 2 {
            self.pending.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
    }
}

impl Canvas for PolylineCanvas {
    fn move_to(&mut self, p: Vec2) {
        self.lift();
        self.current.push(p);
    }

    fn line_to(&mut self, p: Vec2) {
        self.current.push(p);
    }

    fn start_new_path(&mut self) {
        self.lift();
    }

    fn stroke(&mut self, style: StyleId) {
        self.lift();
        for points in self.pending.drain(..) {
            self.paths.push(Polyline { points, style });
        }
    }

    fn mark_at(&mut self, p: Vec2, style: StyleId) {
        self.marks.push(Mark { position: p, style });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_commits_segments() {
        let mut canvas = PolylineCanvas::new();
        canvas.move_to(Vec2::ZERO);
        canvas.line_to(Vec2::new(0.0, 10.0));
        canvas.start_new_path();
        canvas.move_to(Vec2::new(5.0, 5.0));
        canvas.line_to(Vec2::new(5.0, 15.0));
        canvas.stroke(3);

        assert_eq!(canvas.paths.len(), 2);
        assert_eq!(canvas.paths[0].points, vec![Vec2::ZERO, Vec2::new(0.0, 10.0)]);
        assert_eq!(canvas.paths[1].style, 3);
    }

    #[test]
    fn degenerate_segments_are_dropped() {
        let mut canvas = PolylineCanvas::new();
        canvas.move_to(Vec2::ZERO);
        canvas.start_new_path();
        canvas.move_to(Vec2::ONE);
        canvas.stroke(0);
        assert!(canvas.paths.is_empty());
    }
}
