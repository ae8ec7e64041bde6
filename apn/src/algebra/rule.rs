/*!

A `RewriteRule` is an oriented equation `lhs -> rhs`, optionally guarded by equational conditions. Application is
leftmost-innermost: every argument of a term is reduced by the rule before the term itself is matched against
`lhs`, which is what lets an outer rule's `lhs` assume its operands are already in whatever normal form the
equational system implies.

*/

use std::fmt;
use std::rc::Rc;

use apn_abs::string_util::join_display;

use crate::{
  matcher::match_terms,
  rewrite::{apply_binding, reduce},
  term::Term,
};

struct RewriteRuleData {
  lhs: Term,
  rhs: Term,
  conditions: Vec<(Term, Term)>,
}

/// Cheaply-cloned handle to an (lhs, rhs, conditions) tuple.
#[derive(Clone)]
pub struct RewriteRule(Rc<RewriteRuleData>);

impl RewriteRule {
  pub fn new(lhs: Term, rhs: Term, conditions: Vec<(Term, Term)>) -> Self {
    RewriteRule(Rc::new(RewriteRuleData { lhs, rhs, conditions }))
  }

  pub fn lhs(&self) -> &Term {
    &self.0.lhs
  }

  pub fn rhs(&self) -> &Term {
    &self.0.rhs
  }

  pub fn conditions(&self) -> &[(Term, Term)] {
    &self.0.conditions
  }

  /// Applies this rule to `term`: recurses into every argument first (leftmost-innermost), then matches the
  /// rebuilt term against `lhs`; if the match succeeds and every condition's two sides reduce to structurally
  /// equal normal forms (using `rules` to reduce the conditions), returns the bound `rhs`. Otherwise returns the
  /// rebuilt (but otherwise unchanged) term. `iteration_cap` bounds every nested `reduce` call it triggers (the
  /// condition reductions here, and transitively the fixpoint loop in [`crate::rewrite::reduce`] that called this).
  pub fn apply(&self, term: &Term, rules: &[RewriteRule], iteration_cap: Option<usize>) -> Term {
    let rebuilt = match term.operation() {
      None => term.clone(),
      Some(operation) => {
        let args = term.args().iter().map(|arg| self.apply(arg, rules, iteration_cap)).collect();
        Term::application(operation.clone(), args)
      }
    };

    let result = match_terms(&rebuilt, &self.0.lhs);
    if !result.success {
      return rebuilt;
    }

    for (left, right) in &self.0.conditions {
      let left_normal = reduce(&apply_binding(left, &result.bindings), rules, iteration_cap);
      let right_normal = reduce(&apply_binding(right, &result.bindings), rules, iteration_cap);
      if left_normal != right_normal {
        return rebuilt;
      }
    }

    apply_binding(&self.0.rhs, &result.bindings)
  }
}

impl fmt::Display for RewriteRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.0.conditions.is_empty() {
      let rendered = join_display(
        self.0.conditions.iter().map(|(left, right)| format!("({} == {})", left, right)),
        ", ",
      );
      write!(f, "{}, => ", rendered)?;
    }
    write!(f, "{} -> {}", self.0.lhs, self.0.rhs)
  }
}

impl fmt::Debug for RewriteRule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
