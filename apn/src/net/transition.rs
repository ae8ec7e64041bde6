/*!

A `Transition` owns an ordered list of inbound arcs and an ordered list of outbound arcs. Arc order is observable:
it defines traversal order during matching.

The enabling algorithm here is the central non-trivial piece of the firing engine: it resolves a single consistent
variable binding across every inbound arc's label terms, scanning each arc's source place for the first unclaimed,
matching token. It commits to that token and does not backtrack across token choices if a later label term or a
later arc conflicts, which keeps enabling deterministic given a fixed marking order at the cost of occasionally
missing an enabling a backtracking search would find.

*/

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use apn_abs::{log::trace, IString};

use crate::{
  algebra::rule::RewriteRule,
  error::{Error, Result},
  matcher::{match_terms, Bindings},
  net::{arc::Arc, place::PlaceRef},
  rewrite::{apply_binding, reduce},
  term::Term,
};

pub struct Transition {
  name: IString,
  // `RefCell`, not a plain `Vec`, because arcs are added through a shared `TransitionRef` after the transition has
  // already been handed back to the caller by `Net::add_transition` — the same pattern `Place` uses for `marking`.
  inbound: RefCell<Vec<Arc>>,
  outbound: RefCell<Vec<Arc>>,
}

pub type TransitionRef = Rc<Transition>;

impl Transition {
  pub fn new(name: impl Into<IString>) -> TransitionRef {
    Rc::new(Transition { name: name.into(), inbound: RefCell::new(Vec::new()), outbound: RefCell::new(Vec::new()) })
  }

  pub fn name(&self) -> IString {
    self.name
  }

  pub(crate) fn push_inbound_arc(&self, place: PlaceRef, label: Vec<Term>) {
    self.inbound.borrow_mut().push(Arc::new(place, label));
  }

  pub(crate) fn push_outbound_arc(&self, place: PlaceRef, label: Vec<Term>) {
    self.outbound.borrow_mut().push(Arc::new(place, label));
  }

  /// Determines whether this transition is enabled and, if so, the binding that witnesses it. Does not mutate any
  /// marking and does not consult outbound arcs.
  pub fn enabled(&self) -> (bool, Bindings) {
    let mut bindings = Bindings::new();

    for arc in self.inbound.borrow().iter() {
      let marking = arc.place.marking();
      // A marking occurrence already claimed by an earlier label term *on this same arc* cannot satisfy another
      // label term on it; claims do not carry over between distinct arcs.
      let mut claimed: HashSet<usize> = HashSet::new();

      for label_term in &arc.label {
        let mut found = false;

        for (index, token) in marking.iter().enumerate() {
          if claimed.contains(&index) {
            continue;
          }

          let result = match_terms(label_term, token);
          if !result.success {
            continue;
          }

          let consistent = result
            .bindings
            .iter()
            .all(|(variable, value)| bindings.get(variable).map_or(true, |existing| existing == value));
          if !consistent {
            continue;
          }

          bindings.extend(result.bindings);
          claimed.insert(index);
          found = true;
          break;
        }

        if !found {
          return (false, Bindings::new());
        }
      }
    }

    (true, bindings)
  }

  /// Fires this transition: consumes the bound, reduced inbound labels from their source places and produces the
  /// bound, reduced outbound labels into their target places. Fails with `NotFireable` without touching any
  /// marking if `enabled()` is false. `iteration_cap` bounds every `reduce` call this firing triggers; `None`
  /// leaves reduction unbounded.
  pub fn fire(&self, rules: &[RewriteRule], iteration_cap: Option<usize>) -> Result<()> {
    let (ok, bindings) = self.enabled();
    if !ok {
      return Err(Error::NotFireable { transition: self.name });
    }

    trace!(transition = %self.name, "firing");

    for arc in self.inbound.borrow().iter() {
      let tokens: Vec<Term> = arc
        .label
        .iter()
        .map(|label| reduce(&apply_binding(label, &bindings), rules, iteration_cap))
        .collect();
      arc.place.consume(&tokens)?;
    }

    for arc in self.outbound.borrow().iter() {
      let tokens: Vec<Term> = arc
        .label
        .iter()
        .map(|label| reduce(&apply_binding(label, &bindings), rules, iteration_cap))
        .collect();
      arc.place.produce(tokens)?;
    }

    Ok(())
  }

  pub fn with_inbound_arcs<R>(&self, f: impl FnOnce(&[Arc]) -> R) -> R {
    f(&self.inbound.borrow())
  }

  pub fn with_outbound_arcs<R>(&self, f: impl FnOnce(&[Arc]) -> R) -> R {
    f(&self.outbound.borrow())
  }
}

impl fmt::Display for Transition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "transition {}", self.name)
  }
}
