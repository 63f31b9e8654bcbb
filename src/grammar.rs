//! L-System grammars and generation-by-generation expansion.
//!
//! Symbols are interned strings; everything downstream (rule tables, the
//! interpreter's op map) is keyed by the compact [`SymbolId`] an interning
//! [`SymbolTable`] hands out. Build a [`Grammar`] over interned IDs, then call
//! [`Grammar::expand`] to derive the symbol sequence for a given depth.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A unique identifier for an interned grammar symbol.
pub type SymbolId = u16;

/// Errors raised while building or expanding a grammar.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// A variable symbol reached during expansion has no production rule and
    /// is not declared a constant.
    #[error("no rule for symbol `{symbol}` (generation {generation})")]
    UnknownSymbol { symbol: String, generation: usize },

    /// The interner ran out of [`SymbolId`] space.
    #[error("symbol table is full ({max} symbols)", max = SymbolId::MAX)]
    AlphabetFull,
}

/// String interner mapping symbol names to dense [`SymbolId`]s.
///
/// Interpreter op maps are flat vectors indexed by ID, so IDs are handed out
/// sequentially from zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    names: Vec<String>,
    ids: HashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning its ID. Re-interning an existing name returns
    /// the original ID.
    pub fn intern(&mut self, name: &str) -> Result<SymbolId, GrammarError> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }
        let id = SymbolId::try_from(self.names.len()).map_err(|_| GrammarError::AlphabetFull)?;
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Looks up the ID of an already-interned name.
    pub fn resolve_id(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    /// Returns the name a given ID was interned under.
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Human-readable form of `id` for diagnostics; falls back to `#id` for
    /// IDs this table never issued.
    pub(crate) fn display(&self, id: SymbolId) -> String {
        match self.name(id) {
            Some(name) => name.to_owned(),
            None => format!("#{id}"),
        }
    }
}

/// Partition of the working alphabet into rewritable variables and
/// self-rewriting constants.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Alphabet {
    /// Symbols subject to production rules.
    pub variables: Vec<SymbolId>,

    /// Symbols that rewrite to themselves (structural/control symbols like
    /// branch brackets and turn markers).
    pub constants: Vec<SymbolId>,
}

impl Alphabet {
    /// True if `sym` is declared a constant.
    pub fn is_constant(&self, sym: SymbolId) -> bool {
        self.constants.contains(&sym)
    }
}

/// An immutable L-System grammar: alphabet, start sequence, rule table.
///
/// Fields are private; a grammar cannot be modified once constructed. The
/// grammar owns the [`SymbolTable`] its IDs were interned in so expansion
/// errors can report symbols by name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grammar {
    symbols: SymbolTable,
    alphabet: Alphabet,
    start: Vec<SymbolId>,
    rules: HashMap<SymbolId, Vec<SymbolId>>,
}

impl Grammar {
    /// Creates a grammar from its parts. Rule coverage is not checked here;
    /// a variable without a rule surfaces as
    /// [`GrammarError::UnknownSymbol`] when expansion first reaches it.
    pub fn new(
        symbols: SymbolTable,
        alphabet: Alphabet,
        start: Vec<SymbolId>,
        rules: HashMap<SymbolId, Vec<SymbolId>>,
    ) -> Self {
        Self {
            symbols,
            alphabet,
            start,
            rules,
        }
    }

    /// The symbol table this grammar's IDs live in.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The alphabet partition.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The start (axiom) sequence.
    pub fn start(&self) -> &[SymbolId] {
        &self.start
    }

    /// Expands the start sequence through `generations` rewrite passes and
    /// returns the derived sequence.
    ///
    /// Each pass maps every symbol through the rule table and concatenates
    /// the right-hand sides in order (a flat-map rewrite). Constants rewrite
    /// to themselves and take precedence over any rule entry with the same
    /// ID. `generations == 0` returns the start sequence verbatim.
    ///
    /// Expansion is fully deterministic: the same grammar and depth always
    /// produce the same sequence.
    pub fn expand(&self, generations: usize) -> Result<Vec<SymbolId>, GrammarError> {
        let mut state = self.start.clone();
        for generation in 0..generations {
            let mut next = Vec::with_capacity(state.len() * 2);
            for &sym in &state {
                if self.alphabet.is_constant(sym) {
                    next.push(sym);
                } else if let Some(rhs) = self.rules.get(&sym) {
                    next.extend_from_slice(rhs);
                } else {
                    return Err(GrammarError::UnknownSymbol {
                        symbol: self.symbols.display(sym),
                        generation,
                    });
                }
            }
            state = next;
            debug!(generation, len = state.len(), "expanded generation");
        }
        Ok(state)
    }
}
