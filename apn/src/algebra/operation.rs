/*!

An `Operation` is a named constructor/function symbol: a tuple of (name, signature, result sort). Calling an
operation on a list of argument terms constructs an application term, checking arity and sort consistency.

*/

use std::fmt;
use std::rc::Rc;

use apn_abs::{IString, SmallVec};

use crate::{
  algebra::sort::Sort,
  error::{Error, Result},
  term::Term,
};

/// Most operations in practice are nullary, unary, or binary; inlining a couple of signature slots avoids a heap
/// allocation for the common case.
pub type Signature = SmallVec<Sort, 2>;

struct OperationData {
  name: IString,
  host_sort: Sort,
  signature: Signature,
  result_sort: Sort,
}

/// Structurally equal, cheaply-cloned handle to an operation's (name, signature, result sort) tuple.
#[derive(Clone)]
pub struct Operation(Rc<OperationData>);

impl Operation {
  pub(crate) fn new(name: IString, host_sort: Sort, signature: Vec<Sort>, result_sort: Sort) -> Self {
    Operation(Rc::new(OperationData { name, host_sort, signature: Signature::from_vec(signature), result_sort }))
  }

  pub fn name(&self) -> IString {
    self.0.name
  }

  pub fn host_sort(&self) -> Sort {
    self.0.host_sort.clone()
  }

  pub fn signature(&self) -> &[Sort] {
    &self.0.signature
  }

  pub fn result_sort(&self) -> Sort {
    self.0.result_sort.clone()
  }

  pub fn arity(&self) -> usize {
    self.0.signature.len()
  }

  /// Constructs the application term `self(args...)`, checking arity and per-slot sort consistency: a
  /// `GenericSort` signature slot accepts an argument of any sort.
  pub fn call(&self, args: Vec<Term>) -> Result<Term> {
    if args.len() != self.arity() {
      return Err(Error::MalformedDeclaration {
        message: format!(
          "operation `{}` expects {} argument(s), got {}",
          self.name(),
          self.arity(),
          args.len()
        ),
      });
    }
    for (index, (arg, slot_sort)) in args.iter().zip(self.signature().iter()).enumerate() {
      if !slot_sort.is_generic() && arg.sort() != *slot_sort {
        return Err(Error::MalformedDeclaration {
          message: format!(
            "argument {} of operation `{}` has sort `{}`, expected `{}`",
            index,
            self.name(),
            arg.sort(),
            slot_sort
          ),
        });
      }
    }
    Ok(Term::application(self.clone(), args))
  }
}

impl PartialEq for Operation {
  fn eq(&self, other: &Self) -> bool {
    self.0.name == other.0.name
      && self.0.result_sort == other.0.result_sort
      && self.0.signature == other.0.signature
  }
}
impl Eq for Operation {}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sig = self.signature().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(", ");
    write!(f, "{}.{}({}) -> {}", self.host_sort(), self.name(), sig, self.result_sort())
  }
}

impl fmt::Debug for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
