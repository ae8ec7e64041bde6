//! Scenario 1: `not_(not_(true)) -> true` by fixpoint reduction of `bool.not_`.

use apn::{reduce, Sort};

#[test]
fn not_not_true_reduces_to_true() {
  let bool_sort = Sort::new("bool");
  let truth = bool_sort.declare_operation("true", vec![], None).unwrap();
  let falsity = bool_sort.declare_operation("false", vec![], None).unwrap();
  let not_ = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();

  bool_sort.declare_rewrite_rule(apn::RewriteRule::new(
    not_.call(vec![truth.call(vec![]).unwrap()]).unwrap(),
    falsity.call(vec![]).unwrap(),
    vec![],
  ));
  bool_sort.declare_rewrite_rule(apn::RewriteRule::new(
    not_.call(vec![falsity.call(vec![]).unwrap()]).unwrap(),
    truth.call(vec![]).unwrap(),
    vec![],
  ));

  let rules = bool_sort.rewrite_rules();
  let not_not_true = not_.call(vec![not_.call(vec![truth.call(vec![]).unwrap()]).unwrap()]).unwrap();

  assert_eq!(reduce(&not_not_true, &rules, None), truth.call(vec![]).unwrap());
}
