/*!

Algebraic Petri Nets: many-sorted term algebras, syntactic matching with consistent variable binding, conditional
leftmost-innermost rewriting to fixpoint, and a Petri net firing engine built on top of both.

Bundled example algebras (booleans, naturals, maps, ...) are intentionally not shipped here; declare your own sorts,
operations, variables, and rules with [`algebra::Sort`] and build terms by calling them.

*/

pub mod algebra;
pub mod error;
pub mod matcher;
pub mod net;
pub mod rewrite;
pub mod term;
pub mod visualize;

pub use algebra::{Operation, RewriteRule, Sort, Variable};
pub use error::{Error, Result};
pub use matcher::{match_terms, Bindings, MatchResult};
pub use net::{AlgebraicPetriNet, Arc, Endpoint, Place, PlaceRef, Transition, TransitionRef};
pub use rewrite::{apply_binding, apply_binding_strict, reduce};
pub use term::Term;
pub use visualize::{ArcSnapshot, NetSnapshot, PlaceSnapshot, TransitionSnapshot};
