//! Interpreter that walks an L-System symbol sequence and drives a [`Canvas`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or one of the `populate_*` helpers, then call
//! [`TurtleInterpreter::render`] with an expanded sequence from
//! [`Grammar::expand`](crate::Grammar::expand).

use crate::canvas::{Canvas, StyleId};
use crate::grammar::{SymbolId, SymbolTable};
use crate::turtle::{TurtleOp, TurtleState};
use tracing::debug;

/// Errors raised while interpreting a symbol sequence.
///
/// All variants indicate a malformed grammar or op map. Interpretation stops
/// at the failure point; whatever the surface received up to then stays
/// as-is, which is what you want when debugging a grammar.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A branch-close symbol was reached with no matching branch-open.
    #[error("branch close with empty stack at index {index}")]
    UnbalancedBranch { index: usize },

    /// A symbol in the sequence has no registered operation.
    #[error("no operation for symbol `{symbol}` at index {index}")]
    InvalidInstruction { symbol: String, index: usize },
}

/// Whether [`TurtleOp::Draw`] symbols flagged with `mark` emit decoration
/// marks through [`Canvas::mark_at`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DecorationPolicy {
    /// Never emit marks.
    #[default]
    Never,

    /// Emit a mark at the tip of every marked draw step.
    Tips,
}

/// Configuration for one render pass. Immutable once handed to the
/// interpreter.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by one draw-forward step.
    pub step: f32,

    /// Base rotation angle (radians); turn and branch ops scale it by their
    /// signed multiplier.
    pub turn_angle: f32,

    /// Stroke style for committed paths and marks.
    pub style: StyleId,

    /// Decoration behavior for marked draw steps.
    pub decoration: DecorationPolicy,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step: 10.0,
            turn_angle: std::f32::consts::FRAC_PI_4,
            style: 0,
            decoration: DecorationPolicy::Never,
        }
    }
}

/// Interprets L-System output as 2D turtle strokes on a [`Canvas`].
pub struct TurtleInterpreter {
    op_map: Vec<Option<TurtleOp>>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or one of the
    /// `populate_*` helpers before calling [`render`](Self::render);
    /// unmapped symbols are an error, not a no-op.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern). `map` is indexed by [`SymbolId`]; `None` entries and IDs
    /// past the end of the slice are unmapped.
    pub fn with_map(mut self, map: Vec<Option<TurtleOp>>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol ID.
    ///
    /// The map is grown automatically when `sym` exceeds its current length;
    /// gaps stay unmapped.
    pub fn set_op(&mut self, sym: SymbolId, op: TurtleOp) {
        let idx = sym as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, None);
        }
        self.op_map[idx] = Some(op);
    }

    /// Registers the conventional mappings for alphabets with separate turn
    /// symbols: `F`/`f` draw, `+` turns clockwise, `-` counter-clockwise,
    /// `[`/`]` push and pop with no heading adjustment.
    ///
    /// Symbols not present in `interner` are silently skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", TurtleOp::Draw { mark: false }),
            ("f", TurtleOp::Draw { mark: false }),
            ("+", TurtleOp::Turn(1.0)),
            ("-", TurtleOp::Turn(-1.0)),
            ("[", TurtleOp::Push { turn: 0.0 }),
            ("]", TurtleOp::Pop { turn: 0.0 }),
        ];
        self.populate(interner, &mappings);
    }

    /// Registers the binary-tree alphabet, where the brackets themselves
    /// encode the branch angles: `0` is a marked draw (a leaf tip), `1` a
    /// plain draw, `[` pushes then turns counter-clockwise, `]` pops then
    /// turns clockwise.
    ///
    /// Symbols not present in `interner` are silently skipped.
    pub fn populate_binary_tree_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("0", TurtleOp::Draw { mark: true }),
            ("1", TurtleOp::Draw { mark: false }),
            ("[", TurtleOp::Push { turn: -1.0 }),
            ("]", TurtleOp::Pop { turn: 1.0 }),
        ];
        self.populate(interner, &mappings);
    }

    fn populate(&mut self, interner: &SymbolTable, mappings: &[(&str, TurtleOp)]) {
        for &(sym, op) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, op);
            }
        }
    }

    /// Interprets `sequence` in a single forward pass, driving `canvas`.
    ///
    /// The pen starts at `start.position` (one `move_to` before any symbol is
    /// consumed). Surface calls are emitted in symbol order with no
    /// buffering. On success the accumulated path is committed with one
    /// `stroke` and the final turtle state is returned; on error the surface
    /// is left exactly as far as interpretation got, uncommitted.
    ///
    /// # Errors
    ///
    /// [`RenderError::InvalidInstruction`] if a symbol has no registered op;
    /// [`RenderError::UnbalancedBranch`] if a pop finds the stack empty.
    /// Both abort immediately without consuming further symbols.
    pub fn render<C: Canvas>(
        &self,
        interner: &SymbolTable,
        sequence: &[SymbolId],
        start: TurtleState,
        canvas: &mut C,
    ) -> Result<TurtleState, RenderError> {
        let mut turtle = start;
        let mut stack: Vec<TurtleState> = Vec::new();
        canvas.move_to(turtle.position);

        for (index, &sym) in sequence.iter().enumerate() {
            let op = self
                .op_map
                .get(sym as usize)
                .copied()
                .flatten()
                .ok_or_else(|| RenderError::InvalidInstruction {
                    symbol: interner.display(sym),
                    index,
                })?;

            match op {
                TurtleOp::Draw { mark } => {
                    let next = turtle.position + turtle.direction() * self.config.step;
                    canvas.line_to(next);
                    if mark && self.config.decoration == DecorationPolicy::Tips {
                        canvas.mark_at(next, self.config.style);
                    }
                    turtle.position = next;
                }
                TurtleOp::Turn(sign) => turtle.turn(sign * self.config.turn_angle),
                TurtleOp::Push { turn } => {
                    stack.push(turtle);
                    turtle.turn(turn * self.config.turn_angle);
                }
                TurtleOp::Pop { turn } => {
                    turtle = stack
                        .pop()
                        .ok_or(RenderError::UnbalancedBranch { index })?;
                    turtle.turn(turn * self.config.turn_angle);
                    canvas.start_new_path();
                    canvas.move_to(turtle.position);
                }
            }
        }

        canvas.stroke(self.config.style);
        debug!(symbols = sequence.len(), "render pass complete");
        Ok(turtle)
    }
}
