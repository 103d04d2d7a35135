//! Console pokedex browser.
//!
//! Drives the catalog store from a line-based prompt: a local credential
//! gate at `/`, the collection listing at `/home`, and a detail view at
//! `/more/{name}`. Every navigation to a route dispatches that route's
//! fetch, waits for it to settle, and renders the resulting state.

use dexter_app::{auth, ui, Route};
use dexter_catalog::{CatalogAction, CatalogReducer, CatalogState, LiveCatalogEnvironment};
use dexter_runtime::error::StoreError;
use dexter_runtime::Store;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CatalogStore = Store<
    CatalogState,
    CatalogAction,
    LiveCatalogEnvironment,
    CatalogReducer<LiveCatalogEnvironment>,
>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dexter_app=debug,dexter_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Dexter: console pokedex browser ===");
    println!("Type 'help' for commands, 'quit' to exit.\n");

    if !login_gate()? {
        return Ok(());
    }

    let store = Store::new(
        CatalogState::new(),
        CatalogReducer::new(),
        LiveCatalogEnvironment::new(),
    );

    let mut route = Route::Home;
    enter(&store, &route).await?;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }
        if input.is_empty() {
            continue;
        }

        run_command(&store, &mut route, input).await?;
    }

    Ok(())
}

/// Run the credential gate until a valid login.
///
/// Returns `false` when stdin closes before the user logs in.
fn login_gate() -> io::Result<bool> {
    println!("Login");
    loop {
        print!("email: ");
        io::stdout().flush()?;
        let mut email = String::new();
        if io::stdin().read_line(&mut email)? == 0 {
            return Ok(false);
        }

        print!("password: ");
        io::stdout().flush()?;
        let mut password = String::new();
        if io::stdin().read_line(&mut password)? == 0 {
            return Ok(false);
        }

        if auth::verify(&email, &password) {
            println!();
            return Ok(true);
        }
        println!("invalid user\n");
    }
}

/// Execute one console command against the current route.
async fn run_command(
    store: &CatalogStore,
    route: &mut Route,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "help" => print_help(),
        "list" | "back" | "home" => {
            *route = Route::Home;
            enter(store, route).await?;
        }
        "select" => {
            if rest.is_empty() {
                println!("usage: select <name>");
            } else {
                select_entry(store, rest).await?;
            }
        }
        "open" => {
            let name = if rest.is_empty() {
                store.state(|s| s.selected_name().map(String::from)).await
            } else {
                Some(rest.to_string())
            };
            match name {
                Some(name) => {
                    *route = Route::MoreInfo { name };
                    enter(store, route).await?;
                }
                None => println!("select a pokemon first, or give a name: open <name>"),
            }
        }
        "go" => match Route::parse(rest) {
            Some(Route::Login) => {
                println!();
                if !login_gate()? {
                    return Ok(());
                }
                *route = Route::Home;
                enter(store, route).await?;
            }
            Some(next) => {
                *route = next;
                enter(store, route).await?;
            }
            None => println!("no route for '{rest}'"),
        },
        _ => println!("unknown command '{command}', type 'help'"),
    }

    Ok(())
}

/// Enter a route: dispatch its fetch, wait for it to settle, render.
async fn enter(store: &CatalogStore, route: &Route) -> Result<(), StoreError> {
    match route {
        Route::Login => {}
        Route::Home => {
            dispatch_and_wait(store, CatalogAction::FetchList).await?;
            let view = store.state(ui::render_home).await;
            println!("{view}");
        }
        Route::MoreInfo { name } => {
            dispatch_and_wait(store, CatalogAction::FetchDetails { name: name.clone() }).await?;
            let view = store.state(|s| ui::render_details(s, name)).await;
            println!("{view}");
        }
    }
    Ok(())
}

/// Send an action and wait until its effects and their completions land.
async fn dispatch_and_wait(store: &CatalogStore, action: CatalogAction) -> Result<(), StoreError> {
    tracing::debug!(action = action.label(), "dispatching");
    let mut handle = store.send(action).await?;
    handle.wait().await;
    Ok(())
}

/// Select a listed entry by name and re-render the home view.
///
/// Selection works from the listing, so only a listed entry can be
/// selected here. Names are matched case-insensitively.
async fn select_entry(store: &CatalogStore, name: &str) -> Result<(), StoreError> {
    let target = store
        .state(|s| {
            s.list_entries()
                .iter()
                .find(|entry| entry.name.eq_ignore_ascii_case(name))
                .cloned()
        })
        .await;

    match target {
        Some(entry) => {
            store
                .send(CatalogAction::Select {
                    target: Some(entry),
                })
                .await?;
            let view = store.state(ui::render_home).await;
            println!("{view}");
        }
        None => println!("no pokemon named '{name}' in the list"),
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  list             refresh and show the pokemon list");
    println!("  select <name>    select a pokemon from the list");
    println!("  open [name]      show details for a pokemon (default: the selection)");
    println!("  back             return to the list");
    println!("  go <path>        navigate to a route: /, /home, /more/<name>");
    println!("  quit             exit");
}
