//! The pool setup session: sequencing every computation against
//! accumulated state.
//!
//! [`PoolSession`] is the only stateful type in the crate. It records which
//! [`Stage`] the workflow has reached and hands out a [`PoolParameters`]
//! snapshot once finalized.

mod parameters;
mod pool_session;
mod stage;

pub use parameters::PoolParameters;
pub use pool_session::PoolSession;
pub use stage::Stage;
