use clap::Parser;
use colored::Colorize;
use eyre::Result;
use std::io::{self, BufRead, Write};
use taskboard::{Filter, IdGenerator, TaskId, TaskStore};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - record tasks, mark them done, view them by status")]
#[command(version)]
struct Cli {
    /// Initial filter for the task list (all, completed, pending)
    #[arg(short, long, default_value = "all")]
    filter: Filter,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut store = TaskStore::new();
    store.select_filter(cli.filter);

    println!("{}", "taskboard".bold());
    println!("Type 'help' for commands. Tasks live in memory for this session only.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{} ", ">".blue().bold())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match command {
            "add" => {
                // Title and description separated by "::"
                let (title, description) = match rest.split_once("::") {
                    Some((t, d)) => (t, d),
                    None => (rest, ""),
                };
                match store.add(title, description) {
                    Ok(id) => {
                        println!("added {}", short_id(&id).dimmed());
                        render(&store);
                    }
                    Err(err) => println!("{} {}", "error:".red().bold(), err),
                }
            }
            "toggle" => match resolve(&store, rest) {
                Ok(id) => {
                    store.toggle(&id);
                    render(&store);
                }
                Err(msg) => println!("{} {}", "error:".red().bold(), msg),
            },
            "delete" => match resolve(&store, rest) {
                Ok(id) => {
                    store.delete(&id);
                    render(&store);
                }
                Err(msg) => println!("{} {}", "error:".red().bold(), msg),
            },
            "filter" => match rest.parse::<Filter>() {
                Ok(filter) => {
                    store.select_filter(filter);
                    render(&store);
                }
                Err(msg) => println!("{} {}", "error:".red().bold(), msg),
            },
            "list" => render(&store),
            "json" => {
                let visible: Vec<_> = store.visible().collect();
                println!("{}", serde_json::to_string_pretty(&visible)?);
            }
            "help" => help(),
            "quit" | "exit" => break,
            other => println!(
                "{} unknown command: {} (try 'help')",
                "error:".red().bold(),
                other
            ),
        }
    }

    Ok(())
}

/// Render the visible tasks under the current filter.
fn render(store: &TaskStore) {
    println!("[{}]", store.filter().to_string().bold());

    let mut shown = 0;
    for task in store.visible() {
        let title = if task.completed {
            task.title.trim().green().strikethrough().to_string()
        } else {
            task.title.trim().to_string()
        };
        println!(
            "  {}  {}  {}",
            short_id(&task.id).dimmed(),
            title,
            task.description.trim().dimmed()
        );
        shown += 1;
    }

    if shown == 0 {
        println!("  (no tasks)");
    }
}

/// Resolve a user-typed id prefix against the full task list, so a task can
/// be toggled or deleted even when the current filter hides it.
fn resolve<G: IdGenerator>(store: &TaskStore<G>, prefix: &str) -> Result<TaskId, String> {
    if prefix.is_empty() {
        return Err("expected a task id (or unique prefix)".to_string());
    }

    let matches: Vec<&TaskId> = store
        .iter()
        .map(|t| &t.id)
        .filter(|id| id.as_str().starts_with(prefix))
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => Err(format!("no task with id starting '{}'", prefix)),
        _ => Err(format!("ambiguous id prefix '{}'", prefix)),
    }
}

fn short_id(id: &TaskId) -> &str {
    let s = id.as_str();
    s.get(..8).unwrap_or(s)
}

fn help() {
    println!("Commands:");
    println!("  add <title> :: <description>   add a task (both parts required)");
    println!("  toggle <id-prefix>             flip a task's completed flag");
    println!("  delete <id-prefix>             remove a task");
    println!("  filter all|completed|pending   choose which tasks are listed");
    println!("  list                           show tasks under the current filter");
    println!("  json                           dump visible tasks as JSON");
    println!("  quit                           leave (nothing is saved)");
}
