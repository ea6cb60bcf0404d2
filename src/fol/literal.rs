//! Atoms and literals in first-order logic

use super::interner::{SymbolId, Symbols};
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic formula (predicate applied to terms)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Atom {
    pub predicate: SymbolId,
    pub args: Vec<Term>,
}

impl Atom {
    /// Create a new atom
    pub fn new(predicate: SymbolId, args: Vec<Term>) -> Self {
        Atom { predicate, args }
    }

    /// Check if this is an equality atom
    pub fn is_equality(&self, symbols: &Symbols) -> bool {
        self.predicate == symbols.equality()
    }

    /// Format this atom with the signature for name resolution
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> AtomDisplay<'a> {
        AtomDisplay {
            atom: self,
            symbols,
        }
    }
}

/// A literal (positive or negative atom)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub atom: Atom,
    pub polarity: bool, // true = positive, false = negative
}

impl Literal {
    /// Create a new positive literal
    pub fn positive(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: true,
        }
    }

    /// Create a new negative literal
    pub fn negative(atom: Atom) -> Self {
        Literal {
            atom,
            polarity: false,
        }
    }

    /// Get the complement of this literal
    pub fn complement(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// Format this literal with the signature for name resolution
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> LiteralDisplay<'a> {
        LiteralDisplay {
            literal: self,
            symbols,
        }
    }
}

/// Display wrapper for Atom that includes the signature for name resolution
pub struct AtomDisplay<'a> {
    atom: &'a Atom,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for AtomDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.atom.is_equality(self.symbols) {
            if let [ref lhs, ref rhs] = self.atom.args.as_slice() {
                return write!(
                    f,
                    "{} = {}",
                    lhs.display(self.symbols),
                    rhs.display(self.symbols)
                );
            }
        }
        write!(f, "{}", self.symbols.resolve(self.atom.predicate))?;
        if !self.atom.args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.atom.args.iter().enumerate() {
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

/// Display wrapper for Literal that includes the signature for name resolution
pub struct LiteralDisplay<'a> {
    literal: &'a Literal,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for LiteralDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.literal.polarity {
            write!(f, "¬")?;
        }
        write!(f, "{}", self.literal.atom.display(self.symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display() {
        let mut symbols = Symbols::new();
        let p = symbols.intern("p", 1);
        let a = symbols.intern("a", 0);

        let lit = Literal::negative(Atom::new(p, vec![Term::constant(a)]));
        assert_eq!(format!("{}", lit.display(&symbols)), "¬p(a)");
        assert_eq!(format!("{}", lit.complement().display(&symbols)), "p(a)");
    }

    #[test]
    fn test_equality_display() {
        let mut symbols = Symbols::new();
        let a = symbols.intern("a", 0);
        let b = symbols.intern("b", 0);
        let eq = symbols.equality();

        let lit = Literal::positive(Atom::new(eq, vec![Term::constant(a), Term::constant(b)]));
        assert_eq!(format!("{}", lit.display(&symbols)), "a = b");
    }
}
