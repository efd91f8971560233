//! reelview search session
//!
//! The state machine that coordinates a remote lookup, pagination state,
//! selection state, and history persistence into one user-facing flow.
//! Rendering layers invoke the session's action methods in response to user
//! input and re-render from the returned state; no ambient global state and
//! no implicit re-render mechanism.

pub mod error;
pub mod session;
pub mod state;

pub use error::{SessionError, SessionResult};
pub use session::SearchSession;
pub use state::{SearchSessionState, SessionPhase};
