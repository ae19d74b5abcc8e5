//! Checkpoint and Resume
//!
//! This example demonstrates snapshotting a calculator session mid-operation
//! and resuming it later, as a UI layer would across process restarts.
//!
//! Key concepts:
//! - Serialization formats (JSON for readability, binary for compactness)
//! - Version and invariant validation on load
//! - Resuming a pending operation exactly where it left off
//!
//! Run with: cargo run --example checkpoint_resume

use tenkey::events;
use tenkey::{Checkpoint, Session};

fn main() {
    println!("=== Checkpoint and Resume Example ===\n");

    let mut session = Session::new();
    println!("Pressing: 1 2 ×");
    for event in events!["1", "2", "×"] {
        session.submit(event);
    }
    println!("Display: {} (operation pending)\n", session.display());

    let checkpoint = session.checkpoint();
    let json = checkpoint.to_json().expect("checkpoint should encode");
    let binary = checkpoint.to_binary().expect("checkpoint should encode");
    println!("Checkpoint {} captured", checkpoint.id);
    println!("  JSON: {} bytes, binary: {} bytes\n", json.len(), binary.len());

    // Simulate a restart: everything past this point uses only the bytes.
    drop(session);

    let restored = Checkpoint::from_json(&json).expect("checkpoint should decode");
    let mut resumed = Session::restore(restored).expect("checkpoint should validate");
    println!("Resumed with display {}", resumed.display());

    println!("Pressing: 4 =");
    for event in events!["4", "="] {
        resumed.submit(event);
    }
    println!("Result: {}", resumed.display());

    println!("\n=== Example Complete ===");
}
