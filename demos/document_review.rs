//! Document Review Workflow
//!
//! A small editorial pipeline showing conflict detection at configuration
//! time and the permanence of the configuration lock.
//!
//! Run with: cargo run --example document_review

use hatchling::core::Mapping;
use hatchling::machine::StateMachine;
use hatchling::{action_enum, state_enum};

state_enum! {
    enum Document {
        Draft,
        InReview,
        Approved,
        Published,
    }
}

action_enum! {
    enum Editorial {
        Submit,
        Approve,
        Reject,
        Publish,
    }
}

fn main() {
    env_logger::init();

    println!("=== Document Review Workflow ===\n");

    let machine = StateMachine::new();
    machine
        .add_mapping(Mapping::new(
            Document::Draft,
            Editorial::Submit,
            Document::InReview,
        ))
        .unwrap();
    machine
        .add_mapping(Mapping::new(
            Document::InReview,
            Editorial::Approve,
            Document::Approved,
        ))
        .unwrap();
    machine
        .add_mapping(Mapping::new(
            Document::InReview,
            Editorial::Reject,
            Document::Draft,
        ))
        .unwrap();
    machine
        .add_mapping(Mapping::new(
            Document::Approved,
            Editorial::Publish,
            Document::Published,
        ))
        .unwrap();

    // A second opinion on what approval means is caught immediately:
    let conflict = machine.add_mapping(Mapping::new(
        Document::InReview,
        Editorial::Approve,
        Document::Published,
    ));
    println!("conflicting rule rejected:\n{}\n", conflict.unwrap_err());

    machine.set_initial_state(Document::Draft).unwrap();

    // The machine is alive now; late configuration is refused.
    let late = machine.add_mapping(Mapping::new(
        Document::Published,
        Editorial::Reject,
        Document::Draft,
    ));
    println!("late rule rejected: {}\n", late.unwrap_err());

    for action in [
        Editorial::Submit,
        Editorial::Reject,
        Editorial::Submit,
        Editorial::Approve,
        Editorial::Publish,
    ] {
        machine.handle_action(action.clone()).unwrap();
        println!(
            "{:?} -> {:?}",
            action,
            machine.current_state().unwrap()
        );
    }

    println!("\nHistory:");
    for record in machine.history().records() {
        println!(
            "  {:?} --[{:?}]--> {:?} at {}",
            record.from, record.action, record.to, record.timestamp
        );
    }
}
