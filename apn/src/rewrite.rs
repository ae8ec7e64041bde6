/*!

Substitution and fixpoint reduction. [`RewriteRule::apply`](crate::algebra::rule::RewriteRule::apply) uses both of
these; they are also useful on their own (e.g. to normalize an arc label's bound term before it becomes a token).

*/

use apn_abs::log::trace;

use crate::{algebra::rule::RewriteRule, matcher::Bindings, term::Term};

/// Replaces every variable occurrence in `term` with its binding. A variable absent from `bindings` is left
/// untouched; [`apply_binding_strict`] is the stricter alternative that raises instead.
pub fn apply_binding(term: &Term, bindings: &Bindings) -> Term {
  match term.as_variable() {
    Some(variable) => bindings.get(variable).cloned().unwrap_or_else(|| term.clone()),
    None => {
      let operation = term.operation().expect("non-variable term must be an application").clone();
      let args = term.args().iter().map(|arg| apply_binding(arg, bindings)).collect();
      Term::application(operation, args)
    }
  }
}

/// Like [`apply_binding`], but raises [`crate::error::Error::MalformedDeclaration`] the first time it encounters a
/// variable with no binding, instead of leaving it untouched.
pub fn apply_binding_strict(term: &Term, bindings: &Bindings) -> crate::error::Result<Term> {
  match term.as_variable() {
    Some(variable) => bindings.get(variable).cloned().ok_or_else(|| crate::error::Error::MalformedDeclaration {
      message: format!("variable `{}` has no binding", variable),
    }),
    None => {
      let operation = term.operation().expect("non-variable term must be an application").clone();
      let mut args = Vec::with_capacity(term.args().len());
      for arg in term.args() {
        args.push(apply_binding_strict(arg, bindings)?);
      }
      Ok(Term::application(operation, args))
    }
  }
}

/// Applies every rule in `rules`, in order, to `term`, repeating the full pass until two successive passes produce
/// structurally equal terms (the fixpoint / normal form). `iteration_cap`, if set, bounds the number of passes;
/// non-termination of the underlying rule set is otherwise the caller's responsibility.
pub fn reduce(term: &Term, rules: &[RewriteRule], iteration_cap: Option<usize>) -> Term {
  let mut previous: Option<Term> = None;
  let mut current = term.clone();
  let mut passes = 0usize;

  while previous.as_ref() != Some(&current) {
    previous = Some(current.clone());
    for rule in rules {
      current = rule.apply(&current, rules, iteration_cap);
    }
    passes += 1;
    trace!(passes, term = %current, "reduction pass");
    if let Some(cap) = iteration_cap {
      if passes >= cap {
        break;
      }
    }
  }

  current
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algebra::sort::Sort;

  #[test]
  fn ground_terms_are_stable_under_any_binding() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let not_op = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
    let b = bool_sort.declare_variable("b");

    let ground = not_op.call(vec![true_op.call(vec![]).unwrap()]).unwrap();
    let mut bindings = Bindings::new();
    bindings.insert(b, true_op.call(vec![]).unwrap());

    assert_eq!(apply_binding(&ground, &bindings), ground, "a ground term must be stable under any binding");
  }

  #[test]
  fn unbound_variable_is_left_untouched() {
    let bool_sort = Sort::new("bool");
    let b = bool_sort.declare_variable("b");
    let c = bool_sort.declare_variable("c");
    let term = c.call();
    let mut bindings = Bindings::new();
    bindings.insert(b, bool_sort.declare_variable("dummy").call());
    assert_eq!(apply_binding(&term, &bindings), term);
  }

  #[test]
  fn strict_variant_raises_on_unbound_variable() {
    let bool_sort = Sort::new("bool");
    let c = bool_sort.declare_variable("c");
    let bindings = Bindings::new();
    assert!(apply_binding_strict(&c.call(), &bindings).is_err());
  }

  #[test]
  fn reduction_is_idempotent_once_a_fixpoint_is_reached() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let false_op = bool_sort.declare_operation("false", vec![], None).unwrap();
    let not_op = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
    let rules = vec![
      RewriteRule::new(not_op.call(vec![true_op.call(vec![]).unwrap()]).unwrap(), false_op.call(vec![]).unwrap(), vec![]),
      RewriteRule::new(not_op.call(vec![false_op.call(vec![]).unwrap()]).unwrap(), true_op.call(vec![]).unwrap(), vec![]),
    ];

    let not_not_true =
      not_op.call(vec![not_op.call(vec![true_op.call(vec![]).unwrap()]).unwrap()]).unwrap();
    let once = reduce(&not_not_true, &rules, None);
    let twice = reduce(&once, &rules, None);
    assert_eq!(once, twice, "reducing an already-normal term must return it unchanged");
  }
}
