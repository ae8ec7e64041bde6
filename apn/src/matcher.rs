/*!

Structural matching of two (possibly open) terms, producing a variable binding that witnesses the match.

This is deliberately not unification: there is no occurs check, and binding two variables to each other is a
two-sided convenience (both directions are recorded) that is only sound for the single-sided substitution
`apply_binding` performs during rewriting, not as a general-purpose bijection. There is no AC/associative matching;
matching is purely syntactic.

*/

use std::collections::HashMap;

use crate::{algebra::variable::Variable, term::Term};

pub type Bindings = HashMap<Variable, Term>;

#[derive(Debug, Clone)]
pub struct MatchResult {
  pub success: bool,
  pub bindings: Bindings,
}

impl MatchResult {
  fn failure() -> Self {
    MatchResult { success: false, bindings: Bindings::new() }
  }
}

/// Attempts to match `a` against `b`. Either side may contain variables; on success, `bindings` maps each variable
/// encountered on either side to the subterm it was matched against on the other side.
pub fn match_terms(a: &Term, b: &Term) -> MatchResult {
  let a_sort = a.sort();
  let b_sort = b.sort();

  // Filter 1: a sort mismatch when neither side is generic is an immediate failure.
  if !a_sort.is_generic() && !b_sort.is_generic() && a_sort != b_sort {
    return MatchResult::failure();
  }

  // Filter 2: the generic sort's minimal "declares the operation" guard, checked symmetrically.
  if a_sort.is_generic() {
    if let Some(operation) = a.operation() {
      if !b_sort.declares_operation(operation.name()) {
        return MatchResult::failure();
      }
    }
  }
  if b_sort.is_generic() {
    if let Some(operation) = b.operation() {
      if !a_sort.declares_operation(operation.name()) {
        return MatchResult::failure();
      }
    }
  }

  let mut bindings = Bindings::new();
  if compare(a, b, &mut bindings) {
    MatchResult { success: true, bindings }
  } else {
    MatchResult::failure()
  }
}

fn compare(lhs: &Term, rhs: &Term, bindings: &mut Bindings) -> bool {
  match (lhs.as_variable(), rhs.as_variable()) {
    (Some(lhs_var), Some(rhs_var)) => {
      if let Some(existing) = bindings.get(lhs_var) {
        if existing != rhs {
          return false;
        }
      }
      if let Some(existing) = bindings.get(rhs_var) {
        if existing != lhs {
          return false;
        }
      }
      bindings.insert(lhs_var.clone(), rhs.clone());
      bindings.insert(rhs_var.clone(), lhs.clone());
      true
    }

    (Some(lhs_var), None) => {
      if let Some(existing) = bindings.get(lhs_var) {
        if existing != rhs {
          return false;
        }
      }
      bindings.insert(lhs_var.clone(), rhs.clone());
      true
    }

    (None, Some(rhs_var)) => {
      if let Some(existing) = bindings.get(rhs_var) {
        if existing != lhs {
          return false;
        }
      }
      bindings.insert(rhs_var.clone(), lhs.clone());
      true
    }

    (None, None) => {
      // Both sides are applications, by construction (a `Term` is always one or the other).
      let lhs_op = lhs.operation().expect("non-variable term must be an application");
      let rhs_op = rhs.operation().expect("non-variable term must be an application");
      lhs_op == rhs_op && lhs.args().iter().zip(rhs.args().iter()).all(|(l, r)| compare(l, r, bindings))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algebra::sort::Sort;

  #[test]
  fn sort_guard_rejects_unequal_non_generic_sorts() {
    let bool_sort = Sort::new("bool");
    let nat_sort = Sort::new("nat");
    let t_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let z_op = nat_sort.declare_operation("zero", vec![], None).unwrap();
    let t = t_op.call(vec![]).unwrap();
    let z = z_op.call(vec![]).unwrap();
    assert!(!match_terms(&t, &z).success);
  }

  #[test]
  fn match_success_is_symmetric() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let not_op = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
    let b = bool_sort.declare_variable("b");

    let pattern = not_op.call(vec![b.call()]).unwrap();
    let ground = not_op.call(vec![true_op.call(vec![]).unwrap()]).unwrap();

    assert_eq!(match_terms(&pattern, &ground).success, match_terms(&ground, &pattern).success);
  }

  #[test]
  fn variable_binds_to_ground_subterm() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let not_op = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
    let b = bool_sort.declare_variable("b");

    let pattern = not_op.call(vec![b.call()]).unwrap();
    let truth = true_op.call(vec![]).unwrap();
    let ground = not_op.call(vec![truth.clone()]).unwrap();

    let result = match_terms(&pattern, &ground);
    assert!(result.success);
    assert_eq!(result.bindings.get(&b), Some(&truth));
  }

  #[test]
  fn binding_is_sound_on_non_variable_positions() {
    use crate::rewrite::apply_binding;

    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let not_op = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
    let b = bool_sort.declare_variable("b");

    let pattern = not_op.call(vec![b.call()]).unwrap();
    let ground = not_op.call(vec![true_op.call(vec![]).unwrap()]).unwrap();

    let result = match_terms(&pattern, &ground);
    assert!(result.success);
    // The `not_` head is shared by both sides (not a variable bound across them), so substituting the binding
    // into either side must agree there; only the `b` position, which is a bound variable, may differ before
    // substitution.
    assert_eq!(apply_binding(&pattern, &result.bindings), apply_binding(&ground, &result.bindings));
  }

  #[test]
  fn conflicting_binding_fails() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let false_op = bool_sort.declare_operation("false", vec![], None).unwrap();
    let and_op = bool_sort.declare_operation("and_", vec![bool_sort.clone(), bool_sort.clone()], None).unwrap();
    let b = bool_sort.declare_variable("b");

    // and_(b, b) should not match and_(true, false): b cannot be bound to both.
    let pattern = and_op.call(vec![b.call(), b.call()]).unwrap();
    let ground = and_op.call(vec![true_op.call(vec![]).unwrap(), false_op.call(vec![]).unwrap()]).unwrap();
    assert!(!match_terms(&pattern, &ground).success);
  }
}
