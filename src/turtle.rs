//! Turtle state and operations for 2D path interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Heading is in radians. Heading `0` points along `+Y` ("away" from the
/// viewer's baseline in screen coordinates, where y grows downward), and the
/// angle increases clockwise: a forward step displaces the turtle by
/// `(sin(heading), cos(heading))`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current pen position.
    pub position: Vec2,

    /// Current heading in radians.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Creates a turtle at `position` with the given heading.
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Unit displacement for one forward step at the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.sin(), self.heading.cos())
    }

    /// Rotates the heading by `angle` radians (clockwise-positive).
    pub fn turn(&mut self, angle: f32) {
        self.heading += angle;
    }
}

/// Operations the turtle can perform, assigned to symbols via
/// [`TurtleInterpreter::set_op`](crate::TurtleInterpreter::set_op).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Step forward by the configured distance, extending the current path.
    /// `mark` requests a decoration mark at the new position, honored only
    /// under [`DecorationPolicy::Tips`](crate::DecorationPolicy::Tips).
    Draw { mark: bool },

    /// Rotate by `sign × turn_angle` without touching the surface
    /// (`+`/`-` convention: positive is clockwise).
    Turn(f32),

    /// Save the turtle state onto the branch stack (`[`), then rotate by
    /// `turn × turn_angle`. `turn` is `0.0` for alphabets with separate turn
    /// symbols; bracket-encoded-angle alphabets fold the rotation in here.
    Push { turn: f32 },

    /// Restore the most recently pushed state (`]`), rotate by
    /// `turn × turn_angle`, and begin a new disconnected path segment.
    Pop { turn: f32 },
}
