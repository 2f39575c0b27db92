//! REPL command set and handlers
//!
//! Each command the user can type at the prompt is a `Command` variant;
//! dispatch is a plain `match` in [`Command::execute`]. Handlers receive the
//! shared [`AppState`] and the [`ApiClient`] explicitly rather than touching
//! globals, and signal whether the loop should keep running through
//! [`CommandOutcome`].

use std::fmt::Write as _;

use rand::Rng;
use thiserror::Error;

use crate::api::{ApiClient, ApiError, Pokemon};
use crate::pokedex::Pokedex;

/// Catch chance floor, in percent
const MIN_CATCH_CHANCE: i64 = 5;

/// Errors a command handler can surface to the loop
#[derive(Debug, Error)]
pub enum CommandError {
    /// A PokeAPI fetch or decode failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Whether the REPL should keep prompting after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Keep reading input
    Continue,
    /// Leave the loop and shut down
    Exit,
}

/// Mutable state shared by the command handlers
#[derive(Debug)]
pub struct AppState {
    /// URL of the next location-area page, `None` once past the last page
    pub next: Option<String>,
    /// URL of the previous page, `None` while on the first page
    pub previous: Option<String>,
    /// Registry of caught Pokemon
    pub pokedex: Pokedex,
}

impl AppState {
    /// Creates the initial state, pointed at the first location-area page
    pub fn new(first_page_url: String) -> Self {
        Self {
            next: Some(first_page_url),
            previous: None,
            pokedex: Pokedex::new(),
        }
    }
}

/// The commands understood at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Resolves the first input token to a command
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Command::Help),
            "exit" => Some(Command::Exit),
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            _ => None,
        }
    }

    /// The name the user types
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    /// One-line description for the help listing
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Lists the next page of location areas",
            Command::MapBack => "Lists the previous page of location areas",
            Command::Explore => "Lists the Pokemon found in a location area",
            Command::Catch => "Throws a Pokeball at a Pokemon",
            Command::Inspect => "Shows details of a caught Pokemon",
            Command::Pokedex => "Lists all caught Pokemon",
        }
    }

    /// Runs the command against the shared state.
    ///
    /// API errors bubble up for the loop to print; every other outcome is a
    /// message on stdout plus a [`CommandOutcome`].
    pub async fn execute(
        self,
        state: &mut AppState,
        client: &ApiClient,
        args: &[String],
    ) -> Result<CommandOutcome, CommandError> {
        match self {
            Command::Help => command_help(),
            Command::Exit => command_exit(),
            Command::Map => command_map(state, client).await,
            Command::MapBack => command_map_back(state, client).await,
            Command::Explore => command_explore(client, args).await,
            Command::Catch => command_catch(state, client, args).await,
            Command::Inspect => command_inspect(state, args),
            Command::Pokedex => command_pokedex(state),
        }
    }
}

fn command_help() -> Result<CommandOutcome, CommandError> {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for command in Command::ALL {
        println!("{}: {}", command.name(), command.description());
    }
    Ok(CommandOutcome::Continue)
}

fn command_exit() -> Result<CommandOutcome, CommandError> {
    println!("Closing the Pokedex... Goodbye!");
    Ok(CommandOutcome::Exit)
}

/// Shows the next page of location areas and advances the page window.
async fn command_map(
    state: &mut AppState,
    client: &ApiClient,
) -> Result<CommandOutcome, CommandError> {
    let Some(url) = state.next.clone() else {
        println!("You're on the last page of results.");
        return Ok(CommandOutcome::Continue);
    };

    let page = client.fetch_location_page(&url).await?;
    for area in &page.results {
        println!("{}", area.name);
    }
    state.next = page.next;
    state.previous = page.previous;
    Ok(CommandOutcome::Continue)
}

/// Mirror of `map` in the other direction.
async fn command_map_back(
    state: &mut AppState,
    client: &ApiClient,
) -> Result<CommandOutcome, CommandError> {
    let Some(url) = state.previous.clone() else {
        println!("You're on the first page of results.");
        return Ok(CommandOutcome::Continue);
    };

    let page = client.fetch_location_page(&url).await?;
    for area in &page.results {
        println!("{}", area.name);
    }
    state.next = page.next;
    state.previous = page.previous;
    Ok(CommandOutcome::Continue)
}

async fn command_explore(
    client: &ApiClient,
    args: &[String],
) -> Result<CommandOutcome, CommandError> {
    let Some(area) = args.first() else {
        println!("Please provide a location area name");
        return Ok(CommandOutcome::Continue);
    };

    let detail = client.fetch_location_area(area).await?;
    println!("Found Pokemon:");
    for encounter in &detail.encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(CommandOutcome::Continue)
}

async fn command_catch(
    state: &mut AppState,
    client: &ApiClient,
    args: &[String],
) -> Result<CommandOutcome, CommandError> {
    let Some(name) = args.first() else {
        println!("Please provide a pokemon name");
        return Ok(CommandOutcome::Continue);
    };

    println!("Throwing a Pokeball at {}...", name);
    if state.pokedex.contains(name) {
        println!("{} already caught!!", name);
        return Ok(CommandOutcome::Continue);
    }

    let pokemon = client.fetch_pokemon(name).await?;
    let chance = catch_chance(pokemon.base_experience.unwrap_or(0));
    let roll = rand::rng().random_range(0..100);
    if roll < chance {
        println!("{} was caught!", name);
        state.pokedex.add(pokemon);
    } else {
        println!("{} escaped!", name);
    }
    Ok(CommandOutcome::Continue)
}

fn command_inspect(state: &AppState, args: &[String]) -> Result<CommandOutcome, CommandError> {
    let Some(name) = args.first() else {
        println!("Please provide a pokemon name");
        return Ok(CommandOutcome::Continue);
    };

    match state.pokedex.get(name) {
        Some(pokemon) => print!("{}", format_pokemon(pokemon)),
        None => println!("you have not caught that pokemon"),
    }
    Ok(CommandOutcome::Continue)
}

fn command_pokedex(state: &AppState) -> Result<CommandOutcome, CommandError> {
    println!("Your Pokedex:");
    for name in state.pokedex.names() {
        println!("- {}", name);
    }
    Ok(CommandOutcome::Continue)
}

/// Catch chance in percent for a given base experience.
///
/// The higher the base experience, the lower the chance, floored at
/// [`MIN_CATCH_CHANCE`] so even legendaries stay catchable.
pub fn catch_chance(base_experience: i64) -> i64 {
    (100 - base_experience / 6).max(MIN_CATCH_CHANCE)
}

/// Renders the `inspect` output for one caught Pokemon
pub fn format_pokemon(pokemon: &Pokemon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", pokemon.name);
    let _ = writeln!(out, "Height: {}", pokemon.height);
    let _ = writeln!(out, "Weight: {}", pokemon.weight);
    let _ = writeln!(out, "Stats:");
    for stat in &pokemon.stats {
        let _ = writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat);
    }
    let _ = writeln!(out, "Types:");
    for slot in &pokemon.types {
        let _ = writeln!(out, "  - {}", slot.kind.name);
    }
    out
}
