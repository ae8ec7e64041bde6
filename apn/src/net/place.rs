/*!

A `Place` holds a multiset of ground tokens of one sort. Duplicates are significant: consuming a token removes a
single occurrence, not all occurrences with the same value.

*/

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use apn_abs::IString;

use crate::{
  algebra::sort::Sort,
  error::{Error, Result},
  term::Term,
};

pub struct Place {
  name: IString,
  sort: Sort,
  marking: RefCell<Vec<Term>>,
}

/// Shared handle to a place; places are referenced by every arc incident to them.
pub type PlaceRef = Rc<Place>;

impl Place {
  pub fn new(name: impl Into<IString>, sort: Sort, marking: Vec<Term>) -> Result<PlaceRef> {
    let name = name.into();
    for token in &marking {
      if token.sort() != sort {
        return Err(Error::MalformedDeclaration {
          message: format!(
            "initial marking of place `{}` contains a token of sort `{}`, expected `{}`",
            name,
            token.sort(),
            sort
          ),
        });
      }
    }
    Ok(Rc::new(Place { name, sort, marking: RefCell::new(marking) }))
  }

  pub fn name(&self) -> IString {
    self.name
  }

  pub fn sort(&self) -> Sort {
    self.sort.clone()
  }

  pub fn marking(&self) -> Vec<Term> {
    self.marking.borrow().clone()
  }

  /// Removes one occurrence of each token in `tokens`, in order. Not transactional: a token found absent partway
  /// through aborts the call, but earlier tokens in this same call remain consumed. The firing engine guards
  /// against this by verifying enabling before calling `consume` at all.
  pub fn consume(&self, tokens: &[Term]) -> Result<()> {
    let mut marking = self.marking.borrow_mut();
    for token in tokens {
      let position = marking.iter().position(|held| held == token).ok_or_else(|| Error::TokenAbsent {
        place: self.name,
        token: token.to_string(),
      })?;
      marking.remove(position);
    }
    Ok(())
  }

  /// Appends each token to the marking, in order.
  pub fn produce(&self, tokens: Vec<Term>) -> Result<()> {
    for token in &tokens {
      if token.sort() != self.sort {
        return Err(Error::MalformedDeclaration {
          message: format!(
            "cannot produce a token of sort `{}` into place `{}` (sort `{}`)",
            token.sort(),
            self.name,
            self.sort
          ),
        });
      }
    }
    self.marking.borrow_mut().extend(tokens);
    Ok(())
  }
}

impl fmt::Display for Place {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "place {}", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algebra::sort::Sort;

  #[test]
  fn consume_absent_token_raises_and_leaves_marking_intact() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let false_op = bool_sort.declare_operation("false", vec![], None).unwrap();
    let truth = true_op.call(vec![]).unwrap();
    let place = Place::new("p", bool_sort.clone(), vec![truth.clone()]).unwrap();

    let err = place.consume(&[false_op.call(vec![]).unwrap()]).unwrap_err();
    assert!(matches!(err, Error::TokenAbsent { .. }));
    assert_eq!(place.marking(), vec![truth]);
  }

  #[test]
  fn consume_removes_a_single_occurrence() {
    let bool_sort = Sort::new("bool");
    let true_op = bool_sort.declare_operation("true", vec![], None).unwrap();
    let truth = true_op.call(vec![]).unwrap();
    let place = Place::new("p", bool_sort.clone(), vec![truth.clone(), truth.clone()]).unwrap();

    place.consume(&[truth.clone()]).unwrap();
    assert_eq!(place.marking(), vec![truth]);
  }
}
