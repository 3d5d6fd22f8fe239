//! Session orchestration: tick loop, touch effects, floor switching.
//!
//! ## Key Types
//!
//! - `GameSession`: owns all mutable world state and drives per-tick
//!   simulation
//! - `SessionState`: minimal lifecycle state machine
//! - `MessageLog`: bounded, tick-expiring status messages
//! - `SessionError`: operation failures, with recoverable traversal
//!   refusals nested as `Navigation`

pub mod game;
pub mod messages;

pub use game::{GameSession, SessionError, SessionState};
pub use messages::{MessageLog, StatusMessage};
