//! Demo of one todo list shared between two panels.
//!
//! Configuration is read from `TODOS_*` environment variables (see
//! [`todos::config`]). Set `RUST_LOG` to see store tracing.

use anyhow::Context;
use todos::{TodoConfig, TodoStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Single-threaded so the panel redraws between steps, in order
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=info,todo_store_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Shared Todos ===\n");

    let config = TodoConfig::from_env().context("loading configuration")?;
    let store = TodoStore::from_config(&config).context("creating todo store")?;

    // A display-only panel that redraws on every change
    let reader = store.reader();
    let mut snapshots = reader.subscribe();
    let display = tokio::spawn(async move {
        let mut redraws = 0_usize;
        while snapshots.changed().await.is_ok() {
            let state = snapshots.borrow_and_update().clone();
            redraws += 1;
            println!("[panel] {} todo(s)", state.count());
            for todo in &state.todos {
                let status = if todo.done { "x" } else { " " };
                println!("[panel]   [{status}] #{} {}", todo.id, todo.text);
            }
        }
        redraws
    });

    // Two editing consumers bound to the same list
    let input = store.clone();
    let list = store.clone();

    let milk = input
        .add_todo("Buy milk")
        .context("no fresh todo id left")?;
    tokio::task::yield_now().await;
    let _ = input.add_todo("Write documentation");
    tokio::task::yield_now().await;

    println!("\nRemoving #{milk} from the list panel...");
    let _ = list.remove_todo(milk);
    tokio::task::yield_now().await;

    let _ = input.add_todo("Deploy");
    tokio::task::yield_now().await;

    let final_list = store.todos();
    println!(
        "\nFinal list:\n{}",
        serde_json::to_string_pretty(&final_list).context("serializing todos")?
    );

    // Closing every handle ends the panel's subscription
    drop((store, input, list, reader));
    let redraws = display.await.context("panel task failed")?;
    println!("\nPanel redrew {redraws} time(s)");

    println!("\n=== Demo Complete ===");
    Ok(())
}
