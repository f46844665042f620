//! Water Cycle State Machine
//!
//! The classic water example: one substance, four states, four actions.
//!
//! Key concepts:
//! - Declaring vocabularies with `state_enum!` / `action_enum!`
//! - Batch mapping declaration with `mappings!`
//! - Branching on `NoMapping` as the ordinary "nothing to do" case
//!
//! Run with: cargo run --example water_cycle

use hatchling::builder::StateMachineBuilder;
use hatchling::machine::TransitionError;
use hatchling::{action_enum, mappings, state_enum};

state_enum! {
    enum Water {
        Empty,
        Ice,
        Liquid,
        Steam,
    }
}

action_enum! {
    enum Tap {
        Heat,
        Chill,
        Drink,
        Fill,
    }
}

fn main() {
    env_logger::init();

    let machine = StateMachineBuilder::new()
        .mappings(mappings! {
            Water::Ice, Tap::Heat => Water::Liquid;
            Water::Liquid, Tap::Heat => Water::Steam;
            Water::Steam, Tap::Heat => Water::Steam;
            Water::Steam, Tap::Chill => Water::Liquid;
            Water::Liquid, Tap::Chill => Water::Ice;
            Water::Ice, Tap::Chill => Water::Ice;
            Water::Liquid, Tap::Drink => Water::Empty;
            Water::Empty, Tap::Fill => Water::Liquid;
        })
        .initial_state(Water::Empty)
        .build()
        .expect("water machine should build");

    println!("=== Water Cycle State Machine ===\n");
    println!("Starting from: {:?}", machine.current_state().unwrap());

    for action in [Tap::Fill, Tap::Chill, Tap::Drink, Tap::Heat, Tap::Heat, Tap::Drink] {
        match machine.handle_action(action.clone()) {
            Ok(()) => println!(
                "  {:?} -> now {:?}",
                action,
                machine.current_state().unwrap()
            ),
            Err(TransitionError::NoMapping { state, action }) => {
                println!("  {action:?} -> no mapping from {state:?}, staying put")
            }
            Err(err) => println!("  {action:?} -> {err}"),
        }
    }

    println!("\nFinal state: {:?}", machine.current_state().unwrap());
    println!("Transitions committed: {}", machine.history().len());
    println!(
        "Path: {}",
        machine
            .history()
            .path()
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(" -> ")
    );
}
