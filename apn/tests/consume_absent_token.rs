//! Scenario 5: consuming a token a place does not hold raises `TokenAbsent` and leaves the marking intact.

use apn::{Error, Place, Sort};

#[test]
fn consuming_an_absent_token_fails_without_mutating_the_marking() {
  let bool_sort = Sort::new("bool");
  let truth = bool_sort.declare_operation("true", vec![], None).unwrap();
  let falsity = bool_sort.declare_operation("false", vec![], None).unwrap();
  let constant = truth.call(vec![]).unwrap();

  let place = Place::new("p", bool_sort, vec![constant.clone()]).unwrap();
  let err = place.consume(&[falsity.call(vec![]).unwrap()]).unwrap_err();

  assert!(matches!(err, Error::TokenAbsent { .. }));
  assert_eq!(place.marking(), vec![constant]);
}
