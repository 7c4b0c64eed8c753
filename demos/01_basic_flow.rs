//! Example 01: Basic task lifecycle
//!
//! Adds tasks, toggles one complete, deletes one, and shows how validation
//! rejects blank fields.
//!
//! Run with: cargo run --example 01_basic_flow

use eyre::Result;
use taskboard::{SequentialIds, TaskStore};

fn main() -> Result<()> {
    println!("Taskboard Basic Flow Example");
    println!("============================\n");

    // Deterministic ids so the output is stable across runs
    let mut store = TaskStore::with_generator(SequentialIds::default());

    println!("Adding tasks...");
    let milk = store.add("Buy milk", "2L whole")?;
    let clean = store.add("Clean", "Kitchen")?;
    store.add("Review PR", "The filtering change")?;
    for task in store.visible() {
        println!("  {} - {} ({})", task.id, task.title, task.description);
    }
    println!();

    println!("Validation rejects blank fields:");
    match store.add("", "some description") {
        Err(err) => println!("  add(\"\", ...) -> {}", err),
        Ok(_) => unreachable!(),
    }
    println!("  store still has {} tasks\n", store.len());

    println!("Toggling '{}' complete...", store.get(&milk).unwrap().title);
    store.toggle(&milk);
    println!(
        "  completed = {}\n",
        store.get(&milk).unwrap().completed
    );

    println!("Deleting '{}'...", store.get(&clean).unwrap().title);
    store.delete(&clean);
    println!("Remaining tasks:");
    for task in store.visible() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{}] {} - {}", mark, task.id, task.title);
    }

    println!("\nExample complete!");
    Ok(())
}
