/*!

A `Term` is a tree built from operation applications and variable occurrences: finite and acyclic, since the only
way to build a `Term` is through [`Operation::call`] and [`Variable::call`], which can only ever produce a tree,
never a cycle.

`Term`s are value-like: equality is structural, and cloning is a cheap `Rc` bump, not a deep copy.

*/

use std::fmt;
use std::rc::Rc;

use apn_abs::string_util::join_display;

use crate::algebra::{operation::Operation, sort::Sort, variable::Variable};

enum TermNode {
  Application { operation: Operation, args: Vec<Term> },
  Variable(Variable),
}

#[derive(Clone)]
pub struct Term(Rc<TermNode>);

impl Term {
  /// Constructs an application term without re-checking arity/sort consistency; only [`Operation::call`] should
  /// call this, since it alone has already verified those.
  pub(crate) fn application(operation: Operation, args: Vec<Term>) -> Self {
    Term(Rc::new(TermNode::Application { operation, args }))
  }

  pub(crate) fn variable(variable: Variable) -> Self {
    Term(Rc::new(TermNode::Variable(variable)))
  }

  pub fn sort(&self) -> Sort {
    match &*self.0 {
      TermNode::Application { operation, .. } => operation.result_sort(),
      TermNode::Variable(variable) => variable.sort(),
    }
  }

  /// `None` for a variable occurrence.
  pub fn operation(&self) -> Option<&Operation> {
    match &*self.0 {
      TermNode::Application { operation, .. } => Some(operation),
      TermNode::Variable(_) => None,
    }
  }

  /// Empty for a variable occurrence.
  pub fn args(&self) -> &[Term] {
    match &*self.0 {
      TermNode::Application { args, .. } => args,
      TermNode::Variable(_) => &[],
    }
  }

  /// `None` for an application.
  pub fn as_variable(&self) -> Option<&Variable> {
    match &*self.0 {
      TermNode::Variable(variable) => Some(variable),
      TermNode::Application { .. } => None,
    }
  }

  pub fn is_variable(&self) -> bool {
    self.as_variable().is_some()
  }

  /// A term stored as a token in a place must contain no variable occurrences.
  pub fn is_ground(&self) -> bool {
    match &*self.0 {
      TermNode::Variable(_) => false,
      TermNode::Application { args, .. } => args.iter().all(Term::is_ground),
    }
  }
}

impl PartialEq for Term {
  fn eq(&self, other: &Self) -> bool {
    match (&*self.0, &*other.0) {
      (TermNode::Variable(a), TermNode::Variable(b)) => a == b,
      (
        TermNode::Application { operation: op_a, args: args_a },
        TermNode::Application { operation: op_b, args: args_b },
      ) => op_a == op_b && args_a == args_b,
      _ => false,
    }
  }
}
impl Eq for Term {}

impl fmt::Display for Term {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &*self.0 {
      TermNode::Variable(variable) => write!(f, "{}", variable),
      TermNode::Application { operation, args } => {
        write!(f, "{}.{}({})", operation.result_sort(), operation.name(), join_display(args.iter(), ", "))
      }
    }
  }
}

impl fmt::Debug for Term {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
