//! The interactive prompt loop
//!
//! Reads lines from stdin, tokenizes them with [`clean_input`], resolves the
//! first token to a [`Command`], and runs it. Handler errors are printed and
//! never terminate the loop; only `exit` or end-of-input do.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::ApiClient;
use crate::commands::{AppState, Command, CommandOutcome};

/// Splits user input into lowercase words.
///
/// Leading, trailing, and repeated whitespace all disappear, so blank input
/// yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Runs the prompt loop until the user exits or stdin closes
pub async fn run(state: &mut AppState, client: &ApiClient) -> std::io::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF (e.g. ctrl-d or piped input running out) ends the session.
            println!();
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::from_name(name) else {
            println!("Unknown command");
            continue;
        };

        match command.execute(state, client, args).await {
            Ok(CommandOutcome::Continue) => {}
            Ok(CommandOutcome::Exit) => break,
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}
