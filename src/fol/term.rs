//! Terms in first-order logic

use super::interner::{SymbolId, Symbols, VariableId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub id: VariableId,
}

/// A term in first-order logic
///
/// Constants are nullary functions, so every non-variable term carries a
/// signature symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Variable(Variable),
    Function(SymbolId, Vec<Term>),
}

impl Term {
    /// Create a variable term
    pub fn variable(id: VariableId) -> Self {
        Term::Variable(Variable { id })
    }

    /// Create a constant term (nullary function)
    pub fn constant(symbol: SymbolId) -> Self {
        Term::Function(symbol, Vec::new())
    }

    /// Get all variables in this term
    pub fn variables(&self) -> Vec<Variable> {
        match self {
            Term::Variable(v) => vec![*v],
            Term::Function(_, args) => args.iter().flat_map(|arg| arg.variables()).collect(),
        }
    }

    /// Total number of symbol and variable positions in this term
    pub fn symbol_count(&self) -> usize {
        match self {
            Term::Variable(_) => 1,
            Term::Function(_, args) => 1 + args.iter().map(Term::symbol_count).sum::<usize>(),
        }
    }

    /// Format this term with the signature for name resolution
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> TermDisplay<'a> {
        TermDisplay {
            term: self,
            symbols,
        }
    }
}

/// Display wrapper for Term that includes the signature for name resolution
pub struct TermDisplay<'a> {
    term: &'a Term,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for TermDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.term {
            Term::Variable(v) => write!(f, "{}", self.symbols.resolve_variable(v.id)),
            Term::Function(sym, args) => {
                write!(f, "{}", self.symbols.resolve(*sym))?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg.display(self.symbols))?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

// Display implementation that shows raw IDs (for debugging without a signature)
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v.id),
            Term::Function(sym, args) => {
                write!(f, "{}", sym)?;
                if !args.is_empty() {
                    write!(f, "(")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}
