//! Hatchling: a lifecycle-guarded finite state machine library
//!
//! Hatchling separates a machine's life into two phases. While it
//! *incubates*, callers declare `(source state, action) → destination`
//! mappings and an initial state; once it hatches, actions drive
//! transitions and the configuration is locked for good. The engine is
//! synchronous, thread-safe behind an instance-scoped lock, and resolves
//! transitions by *kind*: two values of the same enum variant are the same
//! state, whatever payload they carry.
//!
//! # Core Concepts
//!
//! - **State**: a checkpoint the machine can occupy, with optional
//!   enter/exit hooks, via the `State` trait
//! - **Action**: a trigger identified by kind only, via the `Action` trait
//! - **Mapping**: a rule `(source, action) → destination`, validated for
//!   conflicts at insertion time
//! - **Stimulus**: what gets fed to the machine, either a domain action or
//!   the reserved birth signal that marks "nothing has happened yet"
//!
//! # Example
//!
//! ```rust
//! use hatchling::builder::StateMachineBuilder;
//! use hatchling::machine::TransitionError;
//! use hatchling::{action_enum, mappings, state_enum};
//!
//! state_enum! {
//!     enum Water {
//!         Empty,
//!         Ice,
//!         Liquid,
//!         Steam,
//!     }
//! }
//!
//! action_enum! {
//!     enum Tap {
//!         Fill,
//!         Heat,
//!         Chill,
//!         Drink,
//!     }
//! }
//!
//! let machine = StateMachineBuilder::new()
//!     .mappings(mappings! {
//!         Water::Empty, Tap::Fill => Water::Liquid;
//!         Water::Liquid, Tap::Heat => Water::Steam;
//!         Water::Liquid, Tap::Chill => Water::Ice;
//!         Water::Liquid, Tap::Drink => Water::Empty;
//!         Water::Ice, Tap::Heat => Water::Liquid;
//!     })
//!     .initial_state(Water::Empty)
//!     .build()?;
//!
//! machine.handle_action(Tap::Fill)?;
//! machine.handle_action(Tap::Chill)?;
//! assert_eq!(machine.current_state(), Some(Water::Ice));
//!
//! // Ice has no Drink mapping; the machine stays put and says so.
//! let err = machine.handle_action(Tap::Drink).unwrap_err();
//! assert!(matches!(err, TransitionError::NoMapping { .. }));
//! assert_eq!(machine.current_state(), Some(Water::Ice));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Action, ActionKind, Mapping, State, StateKind, TransitionLog, TransitionRecord};
pub use builder::{BuildError, StateMachineBuilder};
pub use machine::{ConfigError, MappingTable, StateMachine, Stimulus, TransitionError};
