//! Screen orchestration
//!
//! The screen state is a single snapshot replaced by a pure reducer for every
//! event. Fetches are described as effects, tagged with request tokens and run
//! by the runtime; results come back as actions.
//!
//! - `action`: events the screen reacts to and the effects it asks for
//! - `state`: the snapshot and request bookkeeping
//! - `reducer`: `(state, action) -> (state, effect)`
//! - `effects`: turns fetch effects into futures against a data provider
//! - `runtime`: owns the state and the action channel

pub mod action;
pub mod effects;
pub mod reducer;
pub mod runtime;
pub mod state;

pub use action::{Action, Effect};
pub use effects::DataEffects;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::{RequestToken, ScreenState, Slot};
