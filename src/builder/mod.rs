//! Builder API for ergonomic state machine construction.
//!
//! This module is sugar over the four engine entry points
//! (`add_mapping`, `set_initial_state`, `handle_action`, and the read
//! accessors). It adds no semantics of its own and preserves the
//! required call order: configure fully, set the initial state last.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
