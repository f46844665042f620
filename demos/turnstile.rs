//! Turnstile State Machine
//!
//! A coin-operated turnstile with entry/exit hooks doing the side effects.
//!
//! Key concepts:
//! - Hand-implemented `State` with `on_enter` / `on_exit` hooks
//! - Hooks fire in fixed order: exit the old state, then enter the new one
//! - The engine stays put when an action has no mapping
//!
//! Run with: cargo run --example turnstile

use hatchling::action_enum;
use hatchling::builder::StateMachineBuilder;
use hatchling::core::State;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
enum Turnstile {
    Locked,
    Unlocked,
}

impl State for Turnstile {
    fn name(&self) -> &str {
        match self {
            Self::Locked => "Locked",
            Self::Unlocked => "Unlocked",
        }
    }

    fn on_enter(&self) {
        match self {
            Self::Locked => println!("    [clunk] arms locked"),
            Self::Unlocked => println!("    [click] arms free, walk through"),
        }
    }

    fn on_exit(&self) {
        println!("    leaving {}", self.name());
    }
}

action_enum! {
    enum Visitor {
        Coin,
        Push,
    }
}

fn main() {
    env_logger::init();

    let machine = StateMachineBuilder::new()
        .mapping(Turnstile::Locked, Visitor::Coin, Turnstile::Unlocked)
        .mapping(Turnstile::Unlocked, Visitor::Push, Turnstile::Locked)
        .initial_state(Turnstile::Locked)
        .build()
        .expect("turnstile should build");

    println!("=== Turnstile ===\n");

    for action in [
        Visitor::Push,
        Visitor::Coin,
        Visitor::Coin,
        Visitor::Push,
        Visitor::Push,
    ] {
        println!("{action:?}:");
        match machine.handle_action(action) {
            Ok(()) => {}
            Err(err) => println!("    rejected: {err}"),
        }
    }

    println!(
        "\nEnded up {:?} after {} transitions",
        machine.current_state().unwrap(),
        machine.history().len()
    );
}
