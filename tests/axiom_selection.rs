//! End-to-end behavior of relevance-based axiom selection

use proofsieve::{
    select_axioms, select_axioms_with_marks, select_by_threshold, Atom, AxiomFilter, Clause,
    ClauseSet, Fof, Formula, FormulaSet, GenDistrib, Literal, PtrMarks, Role, Selection, Symbols,
    Term,
};
use std::sync::Arc;

/// Test context building pools of unit clauses over shared constants
struct TestCtx {
    symbols: Symbols,
    set: ClauseSet,
    formulas: FormulaSet,
}

impl TestCtx {
    fn new() -> Self {
        TestCtx {
            symbols: Symbols::new(),
            set: ClauseSet::new(),
            formulas: FormulaSet::new(),
        }
    }

    /// Insert a unit clause `pred(c1, ..., cn)` with the given role
    fn clause(&mut self, pred: &str, constants: &[&str], role: Role) -> Arc<Clause> {
        let p = self.symbols.intern(pred, constants.len() as u8);
        let args = constants
            .iter()
            .map(|c| Term::constant(self.symbols.intern(c, 0)))
            .collect();
        self.set
            .insert(Clause::with_role(vec![Literal::positive(Atom::new(p, args))], role))
    }

    /// Insert an atomic formula `pred(c1, ..., cn)` with the given role
    fn formula(&mut self, pred: &str, constants: &[&str], role: Role) -> Arc<Formula> {
        let p = self.symbols.intern(pred, constants.len() as u8);
        let args = constants
            .iter()
            .map(|c| Term::constant(self.symbols.intern(c, 0)))
            .collect();
        self.formulas
            .insert(Formula::with_role(Fof::Atom(Atom::new(p, args)), role))
    }

    /// Link every object through all of its non-internal symbols
    fn permissive_filter(&self) -> AxiomFilter {
        AxiomFilter {
            benevolence: f64::MAX,
            ..AxiomFilter::default()
        }
    }

    fn select(&self, filter: &AxiomFilter) -> Selection {
        let clause_sets = std::slice::from_ref(&self.set);
        let formula_sets = std::slice::from_ref(&self.formulas);
        let distrib = GenDistrib::from_sets(&self.symbols, clause_sets, formula_sets);
        select_axioms(&distrib, &self.symbols, clause_sets, formula_sets, 0, filter)
    }
}

fn contains(selection: &Selection, clause: &Arc<Clause>) -> bool {
    selection.clauses.iter().any(|c| Arc::ptr_eq(c, clause))
}

#[test]
fn test_scenario_unreachable_axioms_stay_out() {
    // H references f; A1 references f; A2 and A3 reference only g.
    // A2/A3 are not reachable from f, so depth 2 still excludes them.
    let mut ctx = TestCtx::new();
    let h = ctx.clause("h", &["f"], Role::Hypothesis);
    let a1 = ctx.clause("a1", &["f"], Role::Axiom);
    let a2 = ctx.clause("a2", &["g"], Role::Axiom);
    let a3 = ctx.clause("a3", &["g"], Role::Axiom);

    let filter = AxiomFilter {
        max_recursion_depth: 2,
        ..ctx.permissive_filter()
    };
    let selection = ctx.select(&filter);

    assert!(contains(&selection, &h));
    assert!(contains(&selection, &a1));
    assert!(!contains(&selection, &a2));
    assert!(!contains(&selection, &a3));
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_scenario_second_generation_reaches_through_bridge() {
    // As above, but A1 also references g: generation 2 picks up A2 and A3.
    let mut ctx = TestCtx::new();
    let h = ctx.clause("h", &["f"], Role::Hypothesis);
    let a1 = ctx.clause("a1", &["f", "g"], Role::Axiom);
    let a2 = ctx.clause("a2", &["g"], Role::Axiom);
    let a3 = ctx.clause("a3", &["g"], Role::Axiom);

    let filter = AxiomFilter {
        max_recursion_depth: 2,
        ..ctx.permissive_filter()
    };
    let selection = ctx.select(&filter);

    assert!(contains(&selection, &h));
    assert!(contains(&selection, &a1));
    assert!(contains(&selection, &a2));
    assert!(contains(&selection, &a3));
    assert!(!selection.truncated);

    // Depth 1 stops at the bridge axiom.
    let filter = AxiomFilter {
        max_recursion_depth: 1,
        ..ctx.permissive_filter()
    };
    let selection = ctx.select(&filter);
    assert!(contains(&selection, &h));
    assert!(contains(&selection, &a1));
    assert_eq!(selection.len(), 2);
    assert!(selection.truncated);
}

#[test]
fn test_depth_zero_selects_only_seeds() {
    let mut ctx = TestCtx::new();
    let h = ctx.clause("h", &["f"], Role::Hypothesis);
    ctx.clause("a1", &["f"], Role::Axiom);
    ctx.clause("a2", &["f"], Role::Axiom);

    let filter = AxiomFilter {
        max_recursion_depth: 0,
        ..ctx.permissive_filter()
    };
    let selection = ctx.select(&filter);
    assert_eq!(selection.len(), 1);
    assert!(contains(&selection, &h));
}

#[test]
fn test_no_duplicates_through_diamond() {
    // B is reachable through both f (via A1) and g (via A2); it must
    // appear exactly once.
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f", "g"], Role::Hypothesis);
    ctx.clause("a1", &["f"], Role::Axiom);
    ctx.clause("a2", &["g"], Role::Axiom);
    ctx.clause("b", &["f", "g"], Role::Axiom);

    let selection = ctx.select(&ctx.permissive_filter());
    assert_eq!(selection.len(), 4);
    for (i, c1) in selection.clauses.iter().enumerate() {
        for c2 in &selection.clauses[i + 1..] {
            assert!(!Arc::ptr_eq(c1, c2));
        }
    }
}

#[test]
fn test_empty_hypotheses_give_empty_selection() {
    let mut ctx = TestCtx::new();
    ctx.clause("a1", &["f"], Role::Axiom);
    ctx.clause("a2", &["f"], Role::Axiom);

    let selection = ctx.select(&ctx.permissive_filter());
    assert!(selection.is_empty());
    assert!(!selection.truncated);
}

#[test]
fn test_hypotheses_need_use_hypotheses() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    ctx.clause("a1", &["f"], Role::Axiom);

    let filter = AxiomFilter {
        use_hypotheses: false,
        ..ctx.permissive_filter()
    };
    assert!(ctx.select(&filter).is_empty());

    // Conjectures seed regardless of the flag.
    let mut ctx = TestCtx::new();
    ctx.clause("goal", &["f"], Role::NegatedConjecture);
    ctx.clause("a1", &["f"], Role::Axiom);
    let filter = AxiomFilter {
        use_hypotheses: false,
        ..ctx.permissive_filter()
    };
    assert_eq!(ctx.select(&filter).len(), 2);
}

#[test]
fn test_hyp_start_restricts_seed_scan() {
    let mut ctx = TestCtx::new();
    ctx.clause("goal", &["f"], Role::NegatedConjecture);
    ctx.clause("a1", &["f"], Role::Axiom);

    let mut axioms_only = ClauseSet::new();
    {
        let p = ctx.symbols.intern("a2", 1);
        let f = ctx.symbols.intern("f", 0);
        axioms_only.insert(Clause::new(vec![Literal::positive(Atom::new(
            p,
            vec![Term::constant(f)],
        ))]));
    }

    let clause_sets = [ctx.set.clone(), axioms_only];
    let formula_sets = [FormulaSet::new(), FormulaSet::new()];
    let distrib = GenDistrib::from_sets(&ctx.symbols, &clause_sets, &formula_sets);

    // Scanning from set 1 only: the conjecture in set 0 is not a seed.
    let selection = select_axioms(
        &distrib,
        &ctx.symbols,
        &clause_sets,
        &formula_sets,
        1,
        &ctx.permissive_filter(),
    );
    assert!(selection.is_empty());

    // Scanning from set 0 reaches everything through f.
    let selection = select_axioms(
        &distrib,
        &ctx.symbols,
        &clause_sets,
        &formula_sets,
        0,
        &ctx.permissive_filter(),
    );
    assert_eq!(selection.len(), 3);
}

#[test]
fn test_size_bound_is_monotonic() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    for name in ["a1", "a2", "a3", "a4"] {
        ctx.clause(name, &["f"], Role::Axiom);
    }
    let total = 5;

    let mut previous = 0;
    for max_set_size in [0, 1, total] {
        let filter = AxiomFilter {
            max_set_size,
            ..ctx.permissive_filter()
        };
        let selection = ctx.select(&filter);
        // Bound respected up to the object accepted on the crossing pop
        assert!(selection.len() <= max_set_size + 1);
        assert!(selection.len() >= previous.min(max_set_size));
        assert!(selection.len() >= previous || max_set_size >= total);
        previous = selection.len();
    }
    assert_eq!(previous, total);
}

#[test]
fn test_marking_cleanup_allows_reruns() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    ctx.clause("a1", &["f"], Role::Axiom);
    ctx.clause("a2", &["g"], Role::Axiom);

    let clause_sets = std::slice::from_ref(&ctx.set);
    let formula_sets = std::slice::from_ref(&ctx.formulas);
    let distrib = GenDistrib::from_sets(&ctx.symbols, clause_sets, formula_sets);
    let filter = ctx.permissive_filter();

    let mut marks = PtrMarks::new();
    let first = select_axioms_with_marks(
        &distrib,
        &ctx.symbols,
        clause_sets,
        formula_sets,
        0,
        &filter,
        &mut marks,
    );
    // Every mark set during the run has been cleared again.
    assert!(marks.is_empty());

    let second = select_axioms_with_marks(
        &distrib,
        &ctx.symbols,
        clause_sets,
        formula_sets,
        0,
        &filter,
        &mut marks,
    );
    assert!(marks.is_empty());

    assert_eq!(first.len(), second.len());
    for (c1, c2) in first.clauses.iter().zip(&second.clauses) {
        assert!(Arc::ptr_eq(c1, c2));
    }
}

#[test]
fn test_marking_cleanup_after_truncation() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    for name in ["a1", "a2", "a3", "a4"] {
        ctx.clause(name, &["f"], Role::Axiom);
    }

    let clause_sets = std::slice::from_ref(&ctx.set);
    let formula_sets = std::slice::from_ref(&ctx.formulas);
    let distrib = GenDistrib::from_sets(&ctx.symbols, clause_sets, formula_sets);
    let filter = AxiomFilter {
        max_set_size: 1,
        ..ctx.permissive_filter()
    };

    let mut marks = PtrMarks::new();
    let selection = select_axioms_with_marks(
        &distrib,
        &ctx.symbols,
        clause_sets,
        formula_sets,
        0,
        &filter,
        &mut marks,
    );
    assert!(selection.truncated);
    assert!(marks.is_empty());
}

#[test]
fn test_formulas_participate_in_selection() {
    let mut ctx = TestCtx::new();
    let goal = ctx.formula("goal", &["f"], Role::Conjecture);
    let fa = ctx.formula("fa", &["f"], Role::Axiom);
    let a1 = ctx.clause("a1", &["f"], Role::Axiom);
    ctx.clause("a2", &["g"], Role::Axiom);

    let selection = ctx.select(&ctx.permissive_filter());
    assert!(contains(&selection, &a1));
    assert!(selection.formulas.iter().any(|g| Arc::ptr_eq(g, &goal)));
    assert!(selection.formulas.iter().any(|g| Arc::ptr_eq(g, &fa)));
    assert_eq!(selection.len(), 3);
}

#[test]
fn test_max_set_fraction_caps_result() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    for name in ["a1", "a2", "a3", "a4", "a5", "a6", "a7"] {
        ctx.clause(name, &["f"], Role::Axiom);
    }

    // Pool of 8, fraction 0.25: cap is 2, so at most 3 objects survive the
    // crossing pop.
    let filter = AxiomFilter {
        max_set_fraction: 0.25,
        ..ctx.permissive_filter()
    };
    let selection = ctx.select(&filter);
    assert!(selection.truncated);
    assert!(selection.len() <= 3);
}

#[test]
fn test_threshold_fallback() {
    let mut ctx = TestCtx::new();
    for name in ["a1", "a2", "a3", "a4", "a5"] {
        ctx.clause(name, &["f"], Role::Axiom);
    }
    let clause_sets = std::slice::from_ref(&ctx.set);

    let filter = AxiomFilter {
        threshold: 10,
        ..AxiomFilter::default()
    };
    assert_eq!(select_by_threshold(clause_sets, &[], &filter).len(), 5);

    let filter = AxiomFilter {
        threshold: 3,
        ..AxiomFilter::default()
    };
    assert_eq!(select_by_threshold(clause_sets, &[], &filter).len(), 0);
}

#[test]
fn test_inputs_are_not_mutated() {
    let mut ctx = TestCtx::new();
    ctx.clause("h", &["f"], Role::Hypothesis);
    ctx.clause("a1", &["f"], Role::Axiom);
    let before: Vec<_> = ctx.set.iter().cloned().collect();

    let _ = ctx.select(&ctx.permissive_filter());

    assert_eq!(ctx.set.len(), before.len());
    for (old, new) in before.iter().zip(ctx.set.iter()) {
        assert!(Arc::ptr_eq(old, new));
    }
}
