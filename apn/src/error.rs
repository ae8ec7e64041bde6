/*!

Error kinds raised by the algebra registry, the term constructors, and the net/firing engine.

A binding conflict during matching is deliberately absent from this enum: it is internal to the matcher and never
surfaces as a user-visible error; it manifests as a failed match (`MatchResult::success == false`) instead.

*/

use std::fmt;

use apn_abs::IString;

#[derive(Debug, Clone)]
pub enum Error {
  /// Setup violated an invariant: arity mismatch at term construction, a non-sort value in a signature, a sort
  /// mismatch at a non-generic signature slot, a duplicate operation/variable name, or a malformed arc endpoint.
  MalformedDeclaration { message: String },

  /// A place was asked to consume a token it does not currently hold.
  TokenAbsent { place: IString, token: String },

  /// `fire` was called on a transition whose `enabled()` is false, or `fire_random` was called with no enabled
  /// transitions.
  NotFireable { transition: IString },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::MalformedDeclaration { message } => write!(f, "malformed declaration: {}", message),
      Error::TokenAbsent { place, token } => {
        write!(f, "place `{}` does not hold the token {}", place, token)
      }
      Error::NotFireable { transition } => {
        write!(f, "transition `{}` is not fireable", transition)
      }
    }
  }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
