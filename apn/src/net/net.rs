/*!

`AlgebraicPetriNet` ties places, transitions, and a global rewrite rule set together, and implements the net-level
operations that sit on top of the firing engine: `marking`, `fireables`, `fire`, `fire_random`.

*/

use std::collections::HashMap;
use std::rc::Rc;

use rand::seq::SliceRandom;

use apn_abs::{log::warning, IString};

use crate::{
  algebra::rule::RewriteRule,
  algebra::sort::Sort,
  error::{Error, Result},
  net::{
    arc::Arc,
    place::{Place, PlaceRef},
    transition::{Transition, TransitionRef},
  },
  term::Term,
};

/// One endpoint of an arc: either a place or a transition. `add_arc` requires one of each.
pub enum Endpoint {
  Place(PlaceRef),
  Transition(TransitionRef),
}

/// A net under construction and, once built, under execution. There is no phase flag: nothing prevents calling
/// `add_place` after firing has begun; callers are trusted to respect the setup/runtime split themselves.
pub struct AlgebraicPetriNet {
  name: IString,
  places: Vec<PlaceRef>,
  transitions: Vec<TransitionRef>,
  rules: Vec<RewriteRule>,
  /// Bounds every `reduce` pass a firing on this net triggers. `None` (the default) leaves reduction unbounded;
  /// termination of the rule set is then entirely the caller's responsibility, per spec.
  iteration_cap: Option<usize>,
}

impl AlgebraicPetriNet {
  /// Creates an empty net with no places, transitions, or rules attached, and no rewrite iteration cap.
  pub fn new(name: impl Into<IString>) -> Self {
    AlgebraicPetriNet {
      name: name.into(),
      places: Vec::new(),
      transitions: Vec::new(),
      rules: Vec::new(),
      iteration_cap: None,
    }
  }

  /// Bounds every `reduce` pass a firing on this net triggers to at most `cap` rounds. Useful as a circuit
  /// breaker against a non-terminating rule set; unset by default.
  pub fn with_iteration_cap(mut self, cap: usize) -> Self {
    self.iteration_cap = Some(cap);
    self
  }

  /// Adds every rewrite rule declared on `sort` to this net's global rule set. A sort's rules are typically pulled
  /// in once, right after the sort's declarations are complete.
  pub fn extend_rules_from_sort(&mut self, sort: &Sort) {
    self.rules.extend(sort.rewrite_rules());
  }

  pub fn name(&self) -> IString {
    self.name
  }

  pub fn places(&self) -> &[PlaceRef] {
    &self.places
  }

  pub fn transitions(&self) -> &[TransitionRef] {
    &self.transitions
  }

  pub fn rules(&self) -> &[RewriteRule] {
    &self.rules
  }

  fn find_place(&self, name: IString) -> Option<&PlaceRef> {
    self.places.iter().find(|place| place.name() == name)
  }

  fn find_transition(&self, name: IString) -> Option<&TransitionRef> {
    self.transitions.iter().find(|transition| transition.name() == name)
  }

  /// Declares a new place holding `initial_marking` tokens of sort `sort`. Fails if `name` is already used by a
  /// place in this net, or if a token's sort disagrees with `sort`.
  pub fn add_place(&mut self, name: impl Into<IString>, sort: Sort, initial_marking: Vec<Term>) -> Result<PlaceRef> {
    let name = name.into();
    if self.find_place(name).is_some() {
      warning!(place = %name, net = %self.name, "duplicate place name rejected");
      return Err(Error::MalformedDeclaration {
        message: format!("place `{}` is already declared in net `{}`", name, self.name),
      });
    }
    let place = Place::new(name, sort, initial_marking)?;
    self.places.push(place.clone());
    Ok(place)
  }

  /// Declares a new, arc-less transition. Fails if `name` is already used by a transition in this net.
  pub fn add_transition(&mut self, name: impl Into<IString>) -> Result<TransitionRef> {
    let name = name.into();
    if self.find_transition(name).is_some() {
      warning!(transition = %name, net = %self.name, "duplicate transition name rejected");
      return Err(Error::MalformedDeclaration {
        message: format!("transition `{}` is already declared in net `{}`", name, self.name),
      });
    }
    let transition = Transition::new(name);
    self.transitions.push(transition.clone());
    Ok(transition)
  }

  /// Adds an arc between `source` and `target`; exactly one of the two must be a place and the other a transition,
  /// and both must already be registered in this net.
  pub fn add_arc(&mut self, source: &Endpoint, target: &Endpoint, label: Vec<Term>) -> Result<()> {
    match (source, target) {
      (Endpoint::Place(place), Endpoint::Transition(transition)) => {
        self.check_registered(place, transition)?;
        transition.push_inbound_arc(place.clone(), label);
        Ok(())
      }
      (Endpoint::Transition(transition), Endpoint::Place(place)) => {
        self.check_registered(place, transition)?;
        transition.push_outbound_arc(place.clone(), label);
        Ok(())
      }
      _ => Err(Error::MalformedDeclaration {
        message: "an arc must connect exactly one place and one transition".to_string(),
      }),
    }
  }

  fn check_registered(&self, place: &PlaceRef, transition: &TransitionRef) -> Result<()> {
    let place_ok = self.find_place(place.name()).map_or(false, |registered| Rc::ptr_eq(registered, place));
    let transition_ok =
      self.find_transition(transition.name()).map_or(false, |registered| Rc::ptr_eq(registered, transition));
    if !place_ok || !transition_ok {
      return Err(Error::MalformedDeclaration {
        message: format!(
          "cannot add an arc between place `{}` and transition `{}`: both endpoints must already be registered in net `{}`",
          place.name(),
          transition.name(),
          self.name
        ),
      });
    }
    Ok(())
  }

  /// Convenience constructor for an inbound arc (place → transition).
  pub fn add_inbound_arc(&mut self, place: &PlaceRef, transition: &TransitionRef, label: Vec<Term>) -> Result<()> {
    self.add_arc(&Endpoint::Place(place.clone()), &Endpoint::Transition(transition.clone()), label)
  }

  /// Convenience constructor for an outbound arc (transition → place).
  pub fn add_outbound_arc(&mut self, transition: &TransitionRef, place: &PlaceRef, label: Vec<Term>) -> Result<()> {
    self.add_arc(&Endpoint::Transition(transition.clone()), &Endpoint::Place(place.clone()), label)
  }

  /// The current marking of every place in this net, keyed by place name.
  pub fn marking(&self) -> HashMap<IString, Vec<Term>> {
    self.places.iter().map(|place| (place.name(), place.marking())).collect()
  }

  /// The ordered sub-list of transitions currently enabled.
  pub fn fireables(&self) -> Vec<TransitionRef> {
    self.transitions.iter().filter(|transition| transition.enabled().0).cloned().collect()
  }

  /// Fires `transition`, which must belong to this net. Fails with `NotFireable` without mutating any marking if
  /// the transition is not currently enabled.
  pub fn fire(&self, transition: &TransitionRef) -> Result<()> {
    transition.fire(&self.rules, self.iteration_cap)
  }

  /// Picks one transition uniformly at random from `fireables()` and fires it. Fails with `NotFireable` if no
  /// transition is currently enabled.
  pub fn fire_random(&self) -> Result<()> {
    let candidates = self.fireables();
    let chosen = candidates.choose(&mut rand::thread_rng()).ok_or_else(|| Error::NotFireable {
      transition: IString::from(""),
    })?;
    self.fire(chosen)
  }
}
