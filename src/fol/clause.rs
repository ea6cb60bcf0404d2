//! Clauses and clause collections

use super::interner::Symbols;
use super::literal::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Role of a clause or formula in the problem (from TPTP or derived)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    /// Axiom from the problem
    #[default]
    Axiom,
    /// Hypothesis
    Hypothesis,
    /// Definition
    Definition,
    /// Conjecture (goal, before negation)
    Conjecture,
    /// Negated conjecture (goal)
    NegatedConjecture,
    /// Derived (from inference)
    Derived,
}

impl Role {
    /// Check if this is a goal object (conjecture, possibly negated)
    pub fn is_conjecture(&self) -> bool {
        matches!(self, Role::Conjecture | Role::NegatedConjecture)
    }

    /// Check if this is a hypothesis
    pub fn is_hypothesis(&self) -> bool {
        matches!(self, Role::Hypothesis)
    }

    /// Convert from a TPTP role string
    pub fn from_tptp_role(role: &str) -> Self {
        match role {
            "axiom" | "lemma" | "theorem" | "corollary" | "assumption" => Role::Axiom,
            "hypothesis" => Role::Hypothesis,
            "definition" => Role::Definition,
            "conjecture" => Role::Conjecture,
            "negated_conjecture" => Role::NegatedConjecture,
            _ => Role::Axiom,
        }
    }
}

/// A clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub literals: Vec<Literal>,
    /// Position in the owning [`ClauseSet`], assigned on insertion
    pub id: Option<usize>,
    /// Role of the clause (axiom, hypothesis, conjecture, ...)
    pub role: Role,
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause {
            literals,
            id: None,
            role: Role::default(),
        }
    }

    /// Create a new clause with a specific role
    pub fn with_role(literals: Vec<Literal>, role: Role) -> Self {
        Clause {
            literals,
            id: None,
            role,
        }
    }

    /// Check if this clause is empty (contradiction)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Format this clause with the signature for name resolution
    pub fn display<'a>(&'a self, symbols: &'a Symbols) -> ClauseDisplay<'a> {
        ClauseDisplay {
            clause: self,
            symbols,
        }
    }
}

/// Display wrapper for Clause that includes the signature for name resolution
pub struct ClauseDisplay<'a> {
    clause: &'a Clause,
    symbols: &'a Symbols,
}

impl<'a> fmt::Display for ClauseDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clause.is_empty() {
            write!(f, "⊥")
        } else {
            for (i, lit) in self.clause.literals.iter().enumerate() {
                if i > 0 {
                    write!(f, " ∨ ")?;
                }
                write!(f, "{}", lit.display(self.symbols))?;
            }
            Ok(())
        }
    }
}

/// An insertion-ordered collection of shared clauses
///
/// Sets own their clauses through `Arc`; selection results reference the
/// same allocations, so relocating a selected clause between sets never
/// copies it.
#[derive(Debug, Clone, Default)]
pub struct ClauseSet {
    clauses: Vec<Arc<Clause>>,
}

impl ClauseSet {
    /// Create a new empty clause set
    pub fn new() -> Self {
        ClauseSet::default()
    }

    /// Insert a clause, assigning its id within this set. Returns the
    /// shared handle.
    pub fn insert(&mut self, mut clause: Clause) -> Arc<Clause> {
        clause.id = Some(self.clauses.len());
        let handle = Arc::new(clause);
        self.clauses.push(handle.clone());
        handle
    }

    /// Push an already-shared clause without touching its id
    pub fn push(&mut self, clause: Arc<Clause>) {
        self.clauses.push(clause);
    }

    /// Remove a clause by identity. Returns the handle if it was present.
    pub fn remove(&mut self, clause: &Arc<Clause>) -> Option<Arc<Clause>> {
        let pos = self.clauses.iter().position(|c| Arc::ptr_eq(c, clause))?;
        Some(self.clauses.remove(pos))
    }

    /// Check whether a clause is in this set, by identity
    pub fn contains(&self, clause: &Arc<Clause>) -> bool {
        self.clauses.iter().any(|c| Arc::ptr_eq(c, clause))
    }

    /// Number of clauses in the set
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterate over the clauses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Clause>> {
        self.clauses.iter()
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Arc<Clause>;
    type IntoIter = std::slice::Iter<'a, Arc<Clause>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
