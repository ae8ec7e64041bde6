//! Scenario 3: a two-place Fibonacci net, advanced by firing the same transition twice.

use apn::{AlgebraicPetriNet, RewriteRule, Sort};

#[test]
fn two_firings_advance_the_fibonacci_sequence() {
  let nat = Sort::new("nat");
  let zero = nat.declare_operation("zero", vec![], None).unwrap();
  let succ = nat.declare_operation("succ", vec![nat.clone()], None).unwrap();
  let add = nat.declare_operation("add", vec![nat.clone(), nat.clone()], None).unwrap();
  let x = nat.declare_variable("x");
  let y = nat.declare_variable("y");

  nat.declare_rewrite_rule(RewriteRule::new(
    add.call(vec![x.call(), zero.call(vec![]).unwrap()]).unwrap(),
    x.call(),
    vec![],
  ));
  nat.declare_rewrite_rule(RewriteRule::new(
    add.call(vec![x.call(), succ.call(vec![y.call()]).unwrap()]).unwrap(),
    succ.call(vec![add.call(vec![x.call(), y.call()]).unwrap()]).unwrap(),
    vec![],
  ));

  let mut net = AlgebraicPetriNet::new("fibonacci");
  net.extend_rules_from_sort(&nat);

  let z = zero.call(vec![]).unwrap();
  let one = succ.call(vec![z.clone()]).unwrap();
  let two = succ.call(vec![one.clone()]).unwrap();

  let p1 = net.add_place("p1", nat.clone(), vec![z.clone()]).unwrap();
  let p2 = net.add_place("p2", nat.clone(), vec![one.clone()]).unwrap();

  let t = net.add_transition("t").unwrap();
  net.add_inbound_arc(&p1, &t, vec![x.call()]).unwrap();
  net.add_inbound_arc(&p2, &t, vec![y.call()]).unwrap();
  net.add_outbound_arc(&t, &p1, vec![y.call()]).unwrap();
  net.add_outbound_arc(&t, &p2, vec![add.call(vec![x.call(), y.call()]).unwrap()]).unwrap();

  net.fire(&t).unwrap();
  assert_eq!(p1.marking(), vec![one.clone()]);
  assert_eq!(p2.marking(), vec![one.clone()]);

  net.fire(&t).unwrap();
  assert_eq!(p1.marking(), vec![one]);
  assert_eq!(p2.marking(), vec![two]);
}
