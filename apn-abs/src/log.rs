/*!

Logging facade. The rest of the crate never calls `tracing` macros directly; it calls these instead, so the backing
implementation stays swappable in one place.

*/

pub use tracing::{error as critical, error, warn as warning, info, debug, trace};

/// Installs a `tracing_subscriber` that prints to stderr, honoring `RUST_LOG`. Intended for binaries and test
/// harnesses; library code should never install a global subscriber itself.
pub fn init_default_subscriber() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .try_init();
}
