/*!

An `Arc` connects a place to a transition (inbound) or a transition to a place (outbound) and carries a label: a
finite ordered sequence of terms, possibly open, possibly empty.

*/

use std::fmt;

use apn_abs::string_util::join_display;

use crate::{net::place::PlaceRef, term::Term};

pub struct Arc {
  pub place: PlaceRef,
  pub label: Vec<Term>,
}

impl Arc {
  pub fn new(place: PlaceRef, label: Vec<Term>) -> Self {
    Arc { place, label }
  }
}

impl fmt::Display for Arc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", join_display(self.label.iter(), ", "))
  }
}
