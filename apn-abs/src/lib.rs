/*!

Types/type aliases that abstract over the implementing backing type.

# Background and Motivation

A motivating example is the `IString` type, an interned string type. A number of external crates could provide this
functionality. This module redirects to whatever chosen implementation we want. We currently alias `IString` to
[`ustr::Ustr`](https://docs.rs/ustr), a globally interned, `Copy`, pointer-sized string handle. If we later wanted
`string_cache`'s atom instead, only this module would need to change.

Likewise, the (crate) public interface of the `log` module consists only of the macros `critical!`, `error!`,
`warning!`, `info!`, `debug!`, and `trace!`; the backing implementation (`tracing`) is encapsulated here so it can be
swapped without touching call sites.

*/

mod rc_cell;
pub mod log;
pub mod string_util;

// Interned string. See the module documentation above for the rationale.
pub use ustr::Ustr as IString;

pub use rc_cell::{RcCell, WeakCell, rc_cell};

pub use smallvec::{smallvec, SmallVec};

pub use tracing;
