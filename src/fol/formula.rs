//! Full first-order formulas and formula collections
//!
//! Unclausified input keeps its connective structure; the selection core
//! only ever looks at the symbols occurring in a formula, never at its
//! logical content.

use super::clause::Role;
use super::interner::Symbols;
use super::literal::Atom;
use super::term::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Quantifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantifier {
    Forall,
    Exists,
}

/// First-order formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fof {
    /// Atomic formula
    Atom(Atom),
    /// Negation
    Not(Box<Fof>),
    /// Conjunction
    And(Box<Fof>, Box<Fof>),
    /// Disjunction
    Or(Box<Fof>, Box<Fof>),
    /// Implication
    Implies(Box<Fof>, Box<Fof>),
    /// Biconditional
    Iff(Box<Fof>, Box<Fof>),
    /// Quantified formula
    Quantified(Quantifier, Variable, Box<Fof>),
}

impl Fof {
    /// Format this formula with the signature for name resolution
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> FofDisplay<'a> {
        FofDisplay {
            formula: self,
            symbols,
        }
    }
}

/// Display wrapper for Fof that includes the signature for name resolution
pub struct FofDisplay<'a> {
    formula: &'a Fof,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for FofDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formula {
            Fof::Atom(atom) => write!(f, "{}", atom.display(self.symbols)),
            Fof::Not(inner) => write!(f, "¬({})", inner.display(self.symbols)),
            Fof::And(lhs, rhs) => write!(
                f,
                "({} ∧ {})",
                lhs.display(self.symbols),
                rhs.display(self.symbols)
            ),
            Fof::Or(lhs, rhs) => write!(
                f,
                "({} ∨ {})",
                lhs.display(self.symbols),
                rhs.display(self.symbols)
            ),
            Fof::Implies(lhs, rhs) => write!(
                f,
                "({} → {})",
                lhs.display(self.symbols),
                rhs.display(self.symbols)
            ),
            Fof::Iff(lhs, rhs) => write!(
                f,
                "({} ↔ {})",
                lhs.display(self.symbols),
                rhs.display(self.symbols)
            ),
            Fof::Quantified(q, var, inner) => {
                let sign = match q {
                    Quantifier::Forall => "∀",
                    Quantifier::Exists => "∃",
                };
                write!(
                    f,
                    "{}{}.({})",
                    sign,
                    self.symbols.resolve_variable(var.id),
                    inner.display(self.symbols)
                )
            }
        }
    }
}

/// A named input formula with its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    pub content: Fof,
    /// Position in the owning [`FormulaSet`], assigned on insertion
    pub id: Option<usize>,
    pub role: Role,
}

impl Formula {
    /// Create a new formula
    pub fn new(content: Fof) -> Self {
        Formula {
            content,
            id: None,
            role: Role::default(),
        }
    }

    /// Create a new formula with a specific role
    pub fn with_role(content: Fof, role: Role) -> Self {
        Formula {
            content,
            id: None,
            role,
        }
    }
}

/// An insertion-ordered collection of shared formulas
#[derive(Debug, Clone, Default)]
pub struct FormulaSet {
    formulas: Vec<Arc<Formula>>,
}

impl FormulaSet {
    /// Create a new empty formula set
    pub fn new() -> Self {
        FormulaSet::default()
    }

    /// Insert a formula, assigning its id within this set. Returns the
    /// shared handle.
    pub fn insert(&mut self, mut formula: Formula) -> Arc<Formula> {
        formula.id = Some(self.formulas.len());
        let handle = Arc::new(formula);
        self.formulas.push(handle.clone());
        handle
    }

    /// Push an already-shared formula without touching its id
    pub fn push(&mut self, formula: Arc<Formula>) {
        self.formulas.push(formula);
    }

    /// Remove a formula by identity. Returns the handle if it was present.
    pub fn remove(&mut self, formula: &Arc<Formula>) -> Option<Arc<Formula>> {
        let pos = self
            .formulas
            .iter()
            .position(|g| Arc::ptr_eq(g, formula))?;
        Some(self.formulas.remove(pos))
    }

    /// Check whether a formula is in this set, by identity
    pub fn contains(&self, formula: &Arc<Formula>) -> bool {
        self.formulas.iter().any(|g| Arc::ptr_eq(g, formula))
    }

    /// Number of formulas in the set
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Iterate over the formulas in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Formula>> {
        self.formulas.iter()
    }
}

impl<'a> IntoIterator for &'a FormulaSet {
    type Item = &'a Arc<Formula>;
    type IntoIter = std::slice::Iter<'a, Arc<Formula>>;

    fn into_iter(self) -> Self::IntoIter {
        self.formulas.iter()
    }
}
