//! Example 02: Status filtering
//!
//! Shows how the filter selection changes what `visible` returns without
//! touching the underlying list, and how the completed/pending views
//! partition the full list.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use taskboard::{Filter, SequentialIds, TaskStore};

fn main() -> Result<()> {
    println!("Taskboard Filtering Example");
    println!("===========================\n");

    let mut store = TaskStore::with_generator(SequentialIds::default());

    println!("Creating sample tasks...");
    let ids = [
        store.add("Write documentation", "Getting-started page")?,
        store.add("Fix critical bug", "Filter resets on toggle")?,
        store.add("Code review", "Open PRs")?,
        store.add("Update tests", "Partition property")?,
        store.add("Deploy to staging", "After review")?,
    ];
    store.toggle(&ids[1]);
    store.toggle(&ids[3]);
    println!("  {} tasks, 2 marked complete\n", store.len());

    for filter in [Filter::All, Filter::Completed, Filter::Pending] {
        store.select_filter(filter);
        println!("Filter '{}':", filter);
        for task in store.visible() {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{}] {} - {}", mark, task.id, task.title);
        }
        println!("  Found: {} tasks\n", store.visible().count());
    }

    // The two partial views always partition the full list
    store.select_filter(Filter::All);
    let all = store.visible().count();
    store.select_filter(Filter::Completed);
    let completed = store.visible().count();
    store.select_filter(Filter::Pending);
    let pending = store.visible().count();
    println!(
        "Partition check: {} all = {} completed + {} pending",
        all, completed, pending
    );

    println!("\nExample complete!");
    Ok(())
}
