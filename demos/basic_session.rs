//! Basic Session
//!
//! This example demonstrates driving the calculator input machine through
//! a session, one button press at a time.
//!
//! Key concepts:
//! - Pure state transitions with no side effects
//! - Total handling: no button sequence can panic
//! - Error degradation and recovery on division by zero
//! - The submit log as a replayable audit trail
//!
//! Run with: cargo run --example basic_session

use tenkey::events;
use tenkey::Session;

fn main() {
    println!("=== Basic Session Example ===\n");

    let mut session = Session::new();

    println!("Pressing: 5 + 3 - 2 =");
    for event in events!["5", "+", "3", "-", "2", "="] {
        let display = session.submit(event);
        println!("  {:?} -> display {}", event, display);
    }
    println!("Result: {}\n", session.display());

    println!("Pressing: ÷ 0 = (division by zero)");
    for event in events!["÷", "0", "="] {
        session.submit(event);
    }
    println!("Display: {}", session.display());

    println!("Pressing: 7 (digit input recovers)");
    for event in events!["7"] {
        session.submit(event);
    }
    println!("Display: {}\n", session.display());

    println!("Display trace: {:?}", session.log().display_trace());

    println!("\n=== Example Complete ===");
}
