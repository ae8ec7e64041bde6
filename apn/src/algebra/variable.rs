/*!

A `Variable` is a (name, sort) pair. Unlike `Operation`, variables are identified by reference identity within the
algebra that declared them: two variables with equal name and sort but distinct declarations are distinct bindable
entities, since they serve as keys in the matcher's binding map.

*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use apn_abs::IString;

use crate::{algebra::sort::Sort, term::Term};

struct VariableData {
  name: IString,
  sort: Sort,
}

/// Referentially unique handle to a declared variable. Cloning a `Variable` yields another handle to the same
/// declaration, not a fresh one.
#[derive(Clone)]
pub struct Variable(Rc<VariableData>);

impl Variable {
  pub(crate) fn new(name: IString, sort: Sort) -> Self {
    Variable(Rc::new(VariableData { name, sort }))
  }

  pub fn name(&self) -> IString {
    self.0.name
  }

  pub fn sort(&self) -> Sort {
    self.0.sort.clone()
  }

  /// Constructs the variable-occurrence term `self()`.
  pub fn call(&self) -> Term {
    Term::variable(self.clone())
  }
}

impl PartialEq for Variable {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}
impl Eq for Variable {}

impl Hash for Variable {
  fn hash<H: Hasher>(&self, state: &mut H) {
    (Rc::as_ptr(&self.0) as *const () as usize).hash(state);
  }
}

impl fmt::Display for Variable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.sort(), self.name())
  }
}

impl fmt::Debug for Variable {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
