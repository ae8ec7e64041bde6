/*!

A `Sort` is a named carrier set of a many-sorted algebra. Sorts own the operations and variables declared on them
and the rewrite rules attached to them.

## Equality

Two sorts are equal iff their names are equal — a deliberately weaker notion than reference identity. `GenericSort`
is the one exception that needs identity: it is recognized by a reserved tag set only on the thread-local singleton
returned by [`Sort::generic`], not by name-matching a user sort that happens to be called `anysort`.

## Lifecycle and Ownership

A `Sort`'s operation/variable/rule tables are populated during setup (`declare_operation`, `declare_variable`,
`declare_rewrite_rule`) and are treated as immutable once firing begins; nothing in this crate enforces that after
the fact.

*/

use std::fmt;

use indexmap::IndexMap;
use once_cell::unsync::Lazy;

use apn_abs::{IString, RcCell};

use crate::{
  algebra::{operation::Operation, rule::RewriteRule, variable::Variable},
  error::{Error, Result},
};

struct SortData {
  name: IString,
  is_generic: bool,
  operations: IndexMap<IString, Operation>,
  variables: IndexMap<IString, Variable>,
  rewrite_rules: Vec<RewriteRule>,
}

/// A named sort. Cheap to clone: it is a handle onto shared, interior-mutable state.
#[derive(Clone)]
pub struct Sort(RcCell<SortData>);

impl Sort {
  pub fn new(name: impl Into<IString>) -> Self {
    Sort(RcCell::new(SortData {
      name: name.into(),
      is_generic: false,
      operations: IndexMap::new(),
      variables: IndexMap::new(),
      rewrite_rules: Vec::new(),
    }))
  }

  /// The generic sort ("any sort"), `anysort`. Every call on the same thread returns a handle to the same
  /// underlying singleton. `Sort` wraps an `Rc` and so is neither `Send` nor `Sync` (matching the single-threaded
  /// execution model); the singleton is therefore thread-local rather than process-wide.
  pub fn generic() -> Self {
    thread_local! {
      static GENERIC: Lazy<Sort> = Lazy::new(|| {
        Sort(RcCell::new(SortData {
          name: IString::from("anysort"),
          is_generic: true,
          operations: IndexMap::new(),
          variables: IndexMap::new(),
          rewrite_rules: Vec::new(),
        }))
      });
    }
    GENERIC.with(|generic| generic.clone())
  }

  pub fn name(&self) -> IString {
    self.0.borrow().name
  }

  /// True only for the singleton returned by [`Sort::generic`], never for a user sort merely named `anysort`.
  pub fn is_generic(&self) -> bool {
    self.0.borrow().is_generic
  }

  /// Declares a new operation on this sort. Fails with `MalformedDeclaration` if `name` is already in use on this
  /// sort. `result_sort` defaults to this sort when `None`.
  pub fn declare_operation(
    &self,
    name: impl Into<IString>,
    signature: Vec<Sort>,
    result_sort: Option<Sort>,
  ) -> Result<Operation> {
    let name = name.into();
    let mut data = self.0.borrow_mut();
    if data.operations.contains_key(&name) {
      return Err(Error::MalformedDeclaration {
        message: format!("operation `{}` is already declared on sort `{}`", name, data.name),
      });
    }
    let operation = Operation::new(name, self.clone(), signature, result_sort.unwrap_or_else(|| self.clone()));
    data.operations.insert(name, operation.clone());
    Ok(operation)
  }

  /// Declares a fresh variable of this sort, bound to `name`.
  pub fn declare_variable(&self, name: impl Into<IString>) -> Variable {
    let name = name.into();
    let variable = Variable::new(name, self.clone());
    self.0.borrow_mut().variables.insert(name, variable.clone());
    variable
  }

  /// Appends a rewrite rule to this sort's rule list.
  pub fn declare_rewrite_rule(&self, rule: RewriteRule) {
    self.0.borrow_mut().rewrite_rules.push(rule);
  }

  /// This sort's own rewrite rules, in declaration order. A `Net`'s global rule set is the concatenation of every
  /// sort's rules that it was built from; see `Net::new`.
  pub fn rewrite_rules(&self) -> Vec<RewriteRule> {
    self.0.borrow().rewrite_rules.clone()
  }

  /// Whether this sort declares an operation named `name`. Used by the matcher's generic-sort guard.
  pub fn declares_operation(&self, name: IString) -> bool {
    self.0.borrow().operations.contains_key(&name)
  }

  pub fn operation(&self, name: IString) -> Option<Operation> {
    self.0.borrow().operations.get(&name).cloned()
  }

  pub fn variable(&self, name: IString) -> Option<Variable> {
    self.0.borrow().variables.get(&name).cloned()
  }
}

impl PartialEq for Sort {
  fn eq(&self, other: &Self) -> bool {
    self.0.borrow().name == other.0.borrow().name
  }
}
impl Eq for Sort {}

impl fmt::Display for Sort {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl fmt::Debug for Sort {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Sort({})", self.name())
  }
}
