//! Scenario 4: a transition whose inbound label cannot match the current marking is absent from `fireables()` and
//! fails with `NotFireable`, leaving the marking untouched.

use apn::{AlgebraicPetriNet, Error, Sort};

#[test]
fn only_the_matching_transition_is_fireable() {
  let bool_sort = Sort::new("bool");
  let truth = bool_sort.declare_operation("true", vec![], None).unwrap();
  let not_ = bool_sort.declare_operation("not_", vec![bool_sort.clone()], None).unwrap();
  let constant = truth.call(vec![]).unwrap();

  let mut net = AlgebraicPetriNet::new("n");
  let p = net.add_place("p", bool_sort.clone(), vec![constant.clone()]).unwrap();

  let x = bool_sort.declare_variable("x");
  let t1 = net.add_transition("t1").unwrap();
  net.add_inbound_arc(&p, &t1, vec![x.call()]).unwrap();

  let t2 = net.add_transition("t2").unwrap();
  net.add_inbound_arc(&p, &t2, vec![not_.call(vec![constant.clone()]).unwrap()]).unwrap();

  let fireables = net.fireables();
  assert_eq!(fireables.len(), 1);
  assert_eq!(fireables[0].name(), t1.name());

  let err = net.fire(&t2).unwrap_err();
  assert!(matches!(err, Error::NotFireable { .. }));
  assert_eq!(p.marking(), vec![constant]);
}
