//! Symbol occurrence collection
//!
//! The selection core repeatedly needs the set of distinct signature
//! symbols occurring in one clause or formula, together with occurrence
//! counts. [`SymbolScratch`] is the reusable bookkeeping for that: a dense
//! count array indexed by symbol id plus a stack of the symbols touched, so
//! clearing after each object is proportional to the symbols seen, not to
//! the signature size.

use super::clause::Clause;
use super::formula::Fof;
use super::interner::SymbolId;
use super::literal::Literal;
use super::term::Term;

/// Reusable per-object symbol occurrence bookkeeping
#[derive(Debug, Clone, Default)]
pub struct SymbolScratch {
    /// Occurrence counts, indexed by symbol id; grows on demand
    counts: Vec<u64>,
    /// Symbols with a non-zero count, in first-touch order
    touched: Vec<SymbolId>,
}

impl SymbolScratch {
    /// Create scratch storage sized for a signature
    pub fn with_capacity(symbol_count: usize) -> Self {
        SymbolScratch {
            counts: vec![0; symbol_count],
            touched: Vec::new(),
        }
    }

    /// Record one occurrence of a symbol
    pub fn touch(&mut self, symbol: SymbolId) {
        let idx = symbol.as_index();
        if idx >= self.counts.len() {
            self.counts.resize(idx + 1, 0);
        }
        if self.counts[idx] == 0 {
            self.touched.push(symbol);
        }
        self.counts[idx] += 1;
    }

    /// Occurrence count recorded for a symbol
    pub fn count(&self, symbol: SymbolId) -> u64 {
        self.counts.get(symbol.as_index()).copied().unwrap_or(0)
    }

    /// The distinct symbols touched since the last clear, in first-touch order
    pub fn symbols(&self) -> &[SymbolId] {
        &self.touched
    }

    /// Number of distinct symbols touched
    pub fn len(&self) -> usize {
        self.touched.len()
    }

    /// Check if no symbol has been touched
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }

    /// Reset all counts touched so far
    pub fn clear(&mut self) {
        for symbol in self.touched.drain(..) {
            self.counts[symbol.as_index()] = 0;
        }
    }
}

impl Term {
    /// Record every signature symbol occurring in this term
    pub fn collect_symbols(&self, scratch: &mut SymbolScratch) {
        match self {
            Term::Variable(_) => {}
            Term::Function(symbol, args) => {
                scratch.touch(*symbol);
                for arg in args {
                    arg.collect_symbols(scratch);
                }
            }
        }
    }
}

impl Literal {
    /// Record the predicate symbol and every symbol in the arguments
    pub fn collect_symbols(&self, scratch: &mut SymbolScratch) {
        scratch.touch(self.atom.predicate);
        for arg in &self.atom.args {
            arg.collect_symbols(scratch);
        }
    }
}

impl Clause {
    /// Record every signature symbol occurring in this clause's literals
    pub fn collect_symbols(&self, scratch: &mut SymbolScratch) {
        for literal in &self.literals {
            literal.collect_symbols(scratch);
        }
    }
}

impl Fof {
    /// Record every signature symbol occurring in this formula
    pub fn collect_symbols(&self, scratch: &mut SymbolScratch) {
        match self {
            Fof::Atom(atom) => {
                scratch.touch(atom.predicate);
                for arg in &atom.args {
                    arg.collect_symbols(scratch);
                }
            }
            Fof::Not(inner) => inner.collect_symbols(scratch),
            Fof::And(lhs, rhs)
            | Fof::Or(lhs, rhs)
            | Fof::Implies(lhs, rhs)
            | Fof::Iff(lhs, rhs) => {
                lhs.collect_symbols(scratch);
                rhs.collect_symbols(scratch);
            }
            Fof::Quantified(_, _, inner) => inner.collect_symbols(scratch),
        }
    }
}
