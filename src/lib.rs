//! # ramus
//!
//! An engine-agnostic crate that expands [L-System](https://en.wikipedia.org/wiki/L-system)
//! grammars and interprets the result as 2D turtle strokes.
//!
//! It decouples the *grammar* (symbol rewriting) from the *surface* (rendering
//! technology): [`Grammar::expand`] derives a symbol sequence, and
//! [`TurtleInterpreter::render`] drives any [`Canvas`] implementation with it,
//! so the same pass can feed an HTML canvas shim, an SVG writer, a pen
//! plotter, or the retained [`PolylineCanvas`].

pub mod canvas;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use canvas::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
